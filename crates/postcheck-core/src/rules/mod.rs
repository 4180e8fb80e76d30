pub mod matcher;

pub use matcher::{
    delivery_candidates, find_exact_match, is_delivery_eligible, suggestions_for,
    upstream_failure, validate, NON_DELIVERY_CATEGORY,
};

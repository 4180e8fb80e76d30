use crate::source::{LocalityQuery, LocalitySource};
use crate::Result;
use postcheck_core::{extract_localities, rules, Locality, SubmittedAddress, ValidationResult};
use tracing::{debug, warn};

pub fn search_localities(
    source: &dyn LocalitySource,
    query: &LocalityQuery,
) -> Result<Vec<Locality>> {
    let body = source.search(query)?;
    let localities = extract_localities(&body);
    debug!(
        source = source.source_name(),
        q = %query.q,
        count = localities.len(),
        "localities fetched"
    );
    Ok(localities)
}

pub fn validate_submission(
    source: &dyn LocalitySource,
    submitted: &SubmittedAddress,
) -> ValidationResult {
    let query = LocalityQuery::for_address(submitted);
    match search_localities(source, &query) {
        Ok(candidates) => rules::validate(&candidates, submitted),
        Err(err) => {
            warn!(source = source.source_name(), error = %err, "locality lookup failed");
            rules::upstream_failure()
        }
    }
}

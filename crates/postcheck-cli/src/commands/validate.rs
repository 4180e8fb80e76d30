use crate::commands::{print_json, Context};
use crate::error::{invalid_input, CliError};
use anyhow::Result;
use clap::Args;
use postcheck_core::{
    AddressSuggestion, ErrorReason, SubmittedAddress, ValidationResult, SUCCESS_DISPLAY_DURATION,
};
use postcheck_lookup::validate_submission;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long)]
    pub suburb: String,
    #[arg(long)]
    pub postcode: String,
    #[arg(long)]
    pub state: String,
    /// Re-validate with the Nth suggestion (1-based) when the address does not match
    #[arg(long)]
    pub pick: Option<usize>,
}

#[derive(Debug, Serialize)]
struct SubmittedDto<'a> {
    suburb: &'a str,
    postcode: &'a str,
    state: &'a str,
}

#[derive(Debug, Serialize)]
struct ValidationReport<'a> {
    submitted: SubmittedDto<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    picked: Option<&'a AddressSuggestion>,
    #[serde(flatten)]
    result: &'a ValidationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_ms: Option<u64>,
}

pub fn validate(ctx: &Context<'_>, args: ValidateArgs) -> Result<()> {
    if args.pick == Some(0) {
        return Err(invalid_input("--pick is 1-based"));
    }
    let submitted = SubmittedAddress::new(&args.suburb, &args.postcode, &args.state)?;
    let first = validate_submission(ctx.source, &submitted);

    let picked = match args.pick {
        Some(index) if !first.suggestions().is_empty() => Some(pick_suggestion(&first, index)?),
        Some(index) => {
            debug!(pick = index, "no suggestions to pick from, --pick ignored");
            None
        }
        None => None,
    };

    let (submitted, result) = match picked {
        Some(suggestion) => {
            debug!(suburb = %suggestion.suburb, postcode = suggestion.postcode, "suggestion picked");
            let resubmitted = SubmittedAddress::from_suggestion(suggestion)?;
            let result = validate_submission(ctx.source, &resubmitted);
            (resubmitted, result)
        }
        None => (submitted, first.clone()),
    };

    if ctx.json {
        print_json(&ValidationReport {
            submitted: SubmittedDto {
                suburb: submitted.suburb(),
                postcode: submitted.postcode().as_str(),
                state: submitted.state().as_str(),
            },
            picked,
            result: &result,
            display_ms: result
                .is_success()
                .then(|| SUCCESS_DISPLAY_DURATION.as_millis() as u64),
        })?;
    } else {
        if let Some(suggestion) = picked {
            println!("Picked {}", format_suggestion(suggestion));
        }
        print_result(&result);
    }

    match result.reason() {
        None => Ok(()),
        Some(ErrorReason::UpstreamFailure) => Err(CliError::LookupFailed.into()),
        Some(_) => Err(CliError::NotValidated.into()),
    }
}

fn pick_suggestion(result: &ValidationResult, index: usize) -> Result<&AddressSuggestion> {
    let suggestions = result.suggestions();
    suggestions.get(index - 1).ok_or_else(|| {
        invalid_input(format!(
            "--pick {} is out of range: {} suggestion(s) available",
            index,
            suggestions.len()
        ))
    })
}

fn print_result(result: &ValidationResult) {
    println!("{}", result.message());
    let suggestions = result.suggestions();
    for (idx, suggestion) in suggestions.iter().enumerate() {
        println!("  {}. {}", idx + 1, format_suggestion(suggestion));
    }
    if !suggestions.is_empty() {
        println!("Re-run with --pick <N> to validate a suggestion.");
    }
}

fn format_suggestion(suggestion: &AddressSuggestion) -> String {
    format!(
        "{} {} ({:04})",
        suggestion.suburb, suggestion.state, suggestion.postcode
    )
}

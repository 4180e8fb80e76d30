use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use clap::Args;
use postcheck_core::AustralianState;
use postcheck_lookup::{search_localities, LocalityQuery};

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Suburb text to look up
    pub q: String,
    #[arg(long)]
    pub state: Option<String>,
}

pub fn search(ctx: &Context<'_>, args: SearchArgs) -> Result<()> {
    let state = args
        .state
        .as_deref()
        .map(str::parse::<AustralianState>)
        .transpose()?;
    let query = LocalityQuery::new(&args.q, state);
    let localities = search_localities(ctx.source, &query)
        .with_context(|| format!("search localities for {:?}", query.q))?;

    if ctx.json {
        return print_json(&localities);
    }

    if localities.is_empty() {
        println!("no localities");
        return Ok(());
    }

    for locality in localities {
        let category = locality.category.as_deref().unwrap_or("uncategorised");
        println!(
            "{} {} {:04} [{}]",
            locality.location, locality.state, locality.postcode, category
        );
    }
    Ok(())
}

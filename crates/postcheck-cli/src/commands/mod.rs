use anyhow::Result;
use postcheck_lookup::LocalitySource;
use serde::Serialize;
use std::io::{self, Write};

pub mod completions;
pub mod search;
pub mod validate;

pub struct Context<'a> {
    pub source: &'a dyn LocalitySource,
    pub json: bool,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

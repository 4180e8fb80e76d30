use crate::source::{LocalityQuery, LocalitySource};
use crate::{LookupError, Result};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

// Mirrors the upstream service: `q` is a case-insensitive substring match and
// a single hit comes back as a bare object.
#[derive(Debug, Clone)]
pub struct FileLocalitySource {
    path: PathBuf,
}

impl FileLocalitySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Value> {
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| {
            LookupError::Parse(format!("{}: {}", self.path.display(), err))
        })
    }
}

impl LocalitySource for FileLocalitySource {
    fn source_name(&self) -> &'static str {
        "fixture"
    }

    fn search(&self, query: &LocalityQuery) -> Result<Value> {
        let body = self.load()?;
        let records = match body.get("localities").and_then(|l| l.get("locality")) {
            Some(Value::Array(items)) => items.clone(),
            Some(item @ Value::Object(_)) => vec![item.clone()],
            _ => Vec::new(),
        };

        let needle = query.q.to_uppercase();
        let mut hits: Vec<Value> = records
            .into_iter()
            .filter(|record| {
                let location = record
                    .get("location")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                location.to_uppercase().contains(&needle)
            })
            .filter(|record| match query.state {
                Some(state) => record.get("state").and_then(Value::as_str) == Some(state.as_str()),
                None => true,
            })
            .collect();

        let locality = match hits.len() {
            0 => return Ok(json!({ "localities": "" })),
            1 => hits.remove(0),
            _ => Value::Array(hits),
        };
        Ok(json!({ "localities": { "locality": locality } }))
    }
}

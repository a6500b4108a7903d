//! Query result rendering.
//!
//! Both formats answer each distinct prefix once, in the order it was first
//! given.

use std::collections::HashSet;
use std::io::Write;

use serde_json::{Map, Value};

use crate::data_structures::PrefixIndex;
use crate::error::AppResult;

/// How query results are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `prefix: a, b` line per prefix
    #[default]
    Plain,
    /// A single pretty-printed JSON object mapping prefix to its matches
    Json,
}

impl OutputFormat {
    /// Selects [`OutputFormat::Json`] when `json` is set.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Plain
        }
    }
}

/// Writes the matches for every prefix to `out`.
///
/// Repeated prefixes are answered once, at their first position.
pub fn write_matches<W: Write>(
    index: &PrefixIndex,
    prefixes: &[String],
    format: OutputFormat,
    mut out: W,
) -> AppResult<()> {
    let mut seen = HashSet::new();
    let prefixes = prefixes
        .iter()
        .map(String::as_str)
        .filter(|prefix| seen.insert(*prefix));

    match format {
        OutputFormat::Plain => {
            for prefix in prefixes {
                writeln!(out, "{}: {}", prefix, index.find_matches(prefix).join(", "))?;
            }
        }
        OutputFormat::Json => {
            let results: Map<String, Value> = prefixes
                .map(|prefix| (prefix.to_owned(), Value::from(index.find_matches(prefix))))
                .collect();
            serde_json::to_writer_pretty(&mut out, &results)?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}

//! Container records parsed from the runtime listing

use serde::Deserialize;

use crate::error::{DockpickError, Result};

/// A running container as reported by the runtime listing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Container {
    #[serde(rename = "ID")]
    pub id: String,
    /// Container name, as printed in the `Names` column
    #[serde(rename = "Names")]
    pub names: String,
}

/// Parse the output of `ps --format "{{json .}}"`.
///
/// Returns `None` when the runtime printed nothing at all, and `Some` with
/// possibly zero records otherwise. Blank lines are skipped but still count
/// towards the reported line number of a malformed record.
pub fn parse_listing(output: &str) -> Result<Option<Vec<Container>>> {
    if output.is_empty() {
        return Ok(None);
    }

    let mut containers = Vec::new();
    for (i, line) in output.split('\n').enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            continue;
        }

        let container: Container =
            serde_json::from_str(line).map_err(|e| DockpickError::ListingParse {
                line: i + 1,
                content: line.to_string(),
                message: e.to_string(),
            })?;
        containers.push(container);
    }

    Ok(Some(containers))
}

/// Sort containers by name, ascending
pub fn sort_by_name(containers: &mut [Container]) {
    containers.sort_by(|a, b| a.names.cmp(&b.names));
}

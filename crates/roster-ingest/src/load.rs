//! Turning a roster source into records.
//!
//! The payload must be a JSON array. Individual entries that do not have the
//! `{id, name, email, role}` shape are skipped with a warning, as are repeated
//! ids (the first occurrence wins), so the store is always seeded with
//! uniquely identified records.

use std::collections::HashSet;
use std::fs;
use std::time::{Duration, Instant};

use roster_model::Record;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::client::{DEFAULT_TIMEOUT, RosterClient};
use crate::error::{IngestError, Result};
use crate::source::RosterSource;

/// Options for a roster load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Parse a roster payload.
///
/// # Errors
///
/// Returns an error if the payload is not valid JSON or not an array.
pub fn parse_records(payload: &str) -> Result<Vec<Record>> {
    let entries: Vec<Value> = serde_json::from_str(payload)?;
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let record: Record = match serde_json::from_value(entry) {
            Ok(record) => record,
            Err(error) => {
                warn!(index, %error, "skipping malformed roster entry");
                continue;
            }
        };
        if !seen.insert(record.id.clone()) {
            warn!(index, record_id = %record.id, "skipping roster entry with duplicate id");
            continue;
        }
        records.push(record);
    }
    Ok(records)
}

/// Load the roster from `source`.
///
/// # Errors
///
/// Returns an error if the source cannot be read or its payload is not a JSON array.
pub fn load_records(source: &RosterSource, options: LoadOptions) -> Result<Vec<Record>> {
    let start = Instant::now();
    let payload = match source {
        RosterSource::Url(url) => RosterClient::new(options.timeout)?.fetch(url)?,
        RosterSource::File(path) => fs::read_to_string(path).map_err(|source| IngestError::Io {
            path: path.clone(),
            source,
        })?,
    };
    let records = parse_records(&payload)?;
    info!(
        %source,
        record_count = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "roster fetched"
    );
    Ok(records)
}

/// Load the roster, logging any failure and falling back to an empty list.
pub fn load_or_empty(source: &RosterSource, options: LoadOptions) -> Vec<Record> {
    match load_records(source, options) {
        Ok(records) => records,
        Err(err) => {
            error!(%source, error = %err, "roster load failed; starting with an empty roster");
            Vec::new()
        }
    }
}

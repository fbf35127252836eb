use std::fs;
use std::path::Path;

use crate::core::WeatherRecord;
use crate::error::ChartResult;

/// Parses a JSON array of observation records.
///
/// Structural problems (not an array, not objects) fail; individual missing
/// or non-numeric fields are tolerated and surface as `None` values on the
/// record.
pub fn parse_records(input: &str) -> ChartResult<Vec<WeatherRecord>> {
    let records: Vec<WeatherRecord> = serde_json::from_str(input)?;
    Ok(records)
}

/// Reads and parses a dataset from the filesystem.
///
/// A single read-only fetch: path in, parsed array or error out, no retries.
pub fn load_records(path: impl AsRef<Path>) -> ChartResult<Vec<WeatherRecord>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let records = parse_records(&raw)?;
    tracing::info!(path = %path.display(), records = records.len(), "loaded dataset");
    Ok(records)
}

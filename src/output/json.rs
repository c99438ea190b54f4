//! JSON output formatter

use super::Listing;
use crate::error::Result;

/// Render records as a pretty-printed JSON array (2-space indent)
///
/// Fields keep declaration order and an empty list renders as `[]`.
pub fn render<R: Listing>(records: &[R]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

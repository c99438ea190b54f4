//! Alfred script filter output formatter
//!
//! Alfred reads `{"items": [...]}` from a script filter and shows an error
//! when the array is empty, so an empty result is replaced by a single
//! placeholder item.

use serde::{Deserialize, Serialize};

use super::{Listing, Site};
use crate::cli::OutputFormat;
use crate::error::{Result, TfeError};

/// One selectable row in Alfred
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AlfredItem {
    pub title: String,
    pub subtitle: String,
    /// Passed to the next workflow action (a deep link)
    pub arg: String,
    /// Text Alfred filters on
    #[serde(rename = "match")]
    pub match_text: String,
    pub autocomplete: String,
    /// Stable ID Alfred uses to remember selection order
    pub uid: String,
}

impl AlfredItem {
    /// Placeholder item with only a title
    pub fn not_found(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }
}

/// Script filter payload
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AlfredOutput {
    pub items: Vec<AlfredItem>,
}

/// Render records as an Alfred script filter payload
pub fn render<R: Listing>(records: &[R], site: &Site) -> Result<String> {
    if !R::FORMATS.contains(&OutputFormat::Alfred) {
        return Err(TfeError::Config(format!(
            "{} cannot be rendered as {}",
            R::KIND,
            OutputFormat::Alfred
        )));
    }

    let mut items: Vec<AlfredItem> = records
        .iter()
        .filter_map(|record| record.alfred_item(site))
        .collect();
    if items.is_empty() {
        items.push(AlfredItem::not_found(R::NOT_FOUND));
    }

    Ok(serde_json::to_string_pretty(&AlfredOutput { items })?)
}

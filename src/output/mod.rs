//! Output formatting module
//!
//! Projects a fetched record list into one of the output formats: an aligned
//! text table, a JSON array, or an Alfred script filter payload. Every
//! renderer is pure and keeps the input order.

mod alfred;
mod json;
mod link;
mod runs;
mod table;
mod team_access;
mod variables;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;

pub use self::alfred::{AlfredItem, AlfredOutput};
pub use self::link::{deep_link, Site};

/// Rendering capabilities of a listable record kind
pub trait Listing: Serialize {
    /// Plural resource name, used in log and progress messages
    const KIND: &'static str;

    /// Upper-case table column names, in row order
    const HEADERS: &'static [&'static str];

    /// Formats the listing command accepts
    const FORMATS: &'static [OutputFormat];

    /// Format used when none is given
    const DEFAULT_FORMAT: OutputFormat = OutputFormat::Table;

    /// Title of the placeholder Alfred item shown for an empty result
    const NOT_FOUND: &'static str = "No workspaces found";

    /// Table cells, one per header
    fn table_row(&self, site: &Site) -> Vec<String>;

    /// Alfred item for this record; `None` for kinds without Alfred support
    fn alfred_item(&self, _site: &Site) -> Option<AlfredItem> {
        None
    }
}

/// Render records in the given format
///
/// The returned string has no trailing newline; the caller prints it whole.
pub fn render<R: Listing>(records: &[R], format: OutputFormat, site: &Site) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(table::render(records, site)),
        OutputFormat::Json => json::render(records),
        OutputFormat::Alfred => alfred::render(records, site),
    }
}

//! Run listing projections

use super::{deep_link, Listing, Site};
use crate::cli::OutputFormat;
use crate::config::links;
use crate::hcp::Run;

impl Listing for Run {
    const KIND: &'static str = "runs";
    const HEADERS: &'static [&'static str] = &["WORKSPACE", "STATUS", "NEEDS CONFIRM", "LINK"];
    const FORMATS: &'static [OutputFormat] = &[OutputFormat::Table, OutputFormat::Json];

    fn table_row(&self, site: &Site) -> Vec<String> {
        vec![
            self.workspace.clone(),
            self.status.clone(),
            self.is_confirmable.to_string(),
            deep_link(site, &self.workspace, links::RUNS, &self.id),
        ]
    }
}

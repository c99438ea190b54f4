//! Workspace variable listing projections

use super::{deep_link, AlfredItem, Listing, Site};
use crate::cli::OutputFormat;
use crate::config::links;
use crate::hcp::WorkspaceVariable;

impl Listing for WorkspaceVariable {
    const KIND: &'static str = "workspace variables";
    const HEADERS: &'static [&'static str] = &["WORKSPACE", "NAME", "ID", "VALUE"];
    const FORMATS: &'static [OutputFormat] = &OutputFormat::ALL;

    fn table_row(&self, _site: &Site) -> Vec<String> {
        vec![
            self.workspace.name.clone(),
            self.variable.key.clone(),
            self.variable.id.clone(),
            self.variable.value.clone(),
        ]
    }

    fn alfred_item(&self, site: &Site) -> Option<AlfredItem> {
        Some(AlfredItem {
            title: self.variable.id.clone(),
            subtitle: format!(
                "vcs repo: {}",
                self.workspace.vcs_repo_name.as_deref().unwrap_or("")
            ),
            arg: deep_link(site, &self.workspace.name, links::VARIABLES, &self.variable.id),
            match_text: self.variable.key.clone(),
            autocomplete: self.variable.value.clone(),
            uid: self.variable.id.clone(),
        })
    }
}

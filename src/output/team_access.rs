//! Team access listing projections

use super::{deep_link, AlfredItem, Listing, Site};
use crate::cli::OutputFormat;
use crate::config::links;
use crate::hcp::TeamAccess;

impl Listing for TeamAccess {
    const KIND: &'static str = "team accesses";
    const HEADERS: &'static [&'static str] =
        &["TEAM", "TEAM ID", "WORKSPACE", "ACCESS ID", "PRIVILEGE"];
    const FORMATS: &'static [OutputFormat] = &OutputFormat::ALL;

    fn table_row(&self, _site: &Site) -> Vec<String> {
        vec![
            self.team.name.clone(),
            self.team.id.clone(),
            self.workspace.name.clone(),
            self.id.clone(),
            self.access.clone(),
        ]
    }

    fn alfred_item(&self, site: &Site) -> Option<AlfredItem> {
        Some(AlfredItem {
            title: self.team.name.clone(),
            subtitle: String::new(),
            arg: deep_link(site, &self.workspace.name, links::TEAM_ACCESS, &self.id),
            match_text: self.team.id.clone(),
            autocomplete: self.team.name.clone(),
            uid: self.id.clone(),
        })
    }
}

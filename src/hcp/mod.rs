//! TFE API client module
//!
//! This module provides functionality to interact with the Terraform Cloud API
//! and the per-command list pipeline built on top of it.

mod client;
mod commands;
mod credentials;
mod host;
pub mod runs;
pub mod team_access;
pub mod traits;
pub mod variables;
pub mod workspaces;

use serde::Deserialize;

pub use client::TfeClient;
pub use commands::{fetch_and_render, run_command, run_list_command};
pub use credentials::TokenResolver;
pub use host::HostResolver;
pub use runs::Run;
pub use team_access::{TeamAccess, TeamRef, WorkspaceRef};
pub use traits::{Fetch, PaginatedResponse, TfeResource};
pub use variables::{Variable, WorkspaceSummary, WorkspaceVariable};
pub use workspaces::Workspace;

/// Pagination metadata from TFE API (shared across resources)
#[derive(Deserialize, Debug, Default, Clone)]
pub struct PaginationMeta {
    pub pagination: Option<Pagination>,
}

/// Pagination details
#[derive(Deserialize, Debug, Clone)]
pub struct Pagination {
    #[serde(rename = "current-page")]
    pub current_page: u32,
    #[serde(rename = "next-page")]
    pub next_page: Option<u32>,
}

//! tfcloud - List Terraform Cloud resources from the command line
//!
//! Lists the current runs, team accesses and variables of every workspace in
//! an organization and prints them as a table, as JSON, or as an Alfred
//! script filter payload.
//!
//! # Example
//!
//! ```bash
//! # Current runs, as a table
//! tfcloud run list my-org
//!
//! # Team accesses as JSON, against a Terraform Enterprise host
//! tfcloud workspace accesses my-org tfe.example.com -o json
//!
//! # Variables for an Alfred workflow
//! tfcloud workspace variables my-org -o alfred
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod hcp;
pub mod output;
pub mod ui;

pub use cli::{Cli, Command, ListArgs, OutputFormat, RunCommand, WorkspaceCommand};
pub use error::{Result, TfeError};
pub use hcp::{
    fetch_and_render, run_command, run_list_command, Fetch, HostResolver, Run, TeamAccess,
    TfeClient, TokenResolver, WorkspaceVariable,
};
pub use output::{render, AlfredItem, AlfredOutput, Listing, Site};

//! Workspace variables module

mod api;
mod models;

pub use models::{Variable, VariableAttributes, VariableResource, WorkspaceSummary, WorkspaceVariable};

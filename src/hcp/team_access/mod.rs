//! Team workspace access module

mod api;
mod models;

pub use models::{
    TeamAccess, TeamAttributes, TeamRef, TeamResource, TeamWorkspaceAttributes,
    TeamWorkspaceRelationships, TeamWorkspaceResource, WorkspaceRef,
};

//! Team workspace access data models

use serde::{Deserialize, Serialize};

use crate::hcp::workspaces::RelationshipData;

/// Team workspace access binding from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct TeamWorkspaceResource {
    pub id: String,
    pub attributes: TeamWorkspaceAttributes,
    pub relationships: Option<TeamWorkspaceRelationships>,
}

/// Team workspace access attributes
#[derive(Deserialize, Debug, Clone)]
pub struct TeamWorkspaceAttributes {
    pub access: Option<String>,
}

/// Relationships for team workspace access
#[derive(Deserialize, Debug, Clone)]
pub struct TeamWorkspaceRelationships {
    pub team: Option<RelationshipData>,
}

/// Team from TFE API (included alongside access bindings)
#[derive(Deserialize, Debug, Clone)]
pub struct TeamResource {
    pub id: String,
    pub attributes: TeamAttributes,
}

/// Team attributes
#[derive(Deserialize, Debug, Clone)]
pub struct TeamAttributes {
    pub name: String,
}

impl TeamWorkspaceResource {
    /// Get the access level
    pub fn access(&self) -> &str {
        self.attributes.access.as_deref().unwrap_or("")
    }

    /// Get the team ID from relationships
    pub fn team_id(&self) -> &str {
        self.relationships
            .as_ref()
            .and_then(|r| r.team.as_ref())
            .and_then(|t| t.id())
            .unwrap_or("")
    }
}

/// Team reference inside a [`TeamAccess`] record
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TeamRef {
    pub id: String,
    pub name: String,
}

/// Workspace reference inside a [`TeamAccess`] record
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceRef {
    pub id: String,
    pub name: String,
}

/// A team's access to one workspace, with names resolved for display
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TeamAccess {
    pub id: String,
    pub access: String,
    pub team: TeamRef,
    pub workspace: WorkspaceRef,
}

//! Workspace data models

use serde::Deserialize;

use crate::hcp::traits::TfeResource;

/// Workspace data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Workspace {
    pub id: String,
    pub attributes: WorkspaceAttributes,
    pub relationships: Option<WorkspaceRelationships>,
}

/// Workspace attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct WorkspaceAttributes {
    pub name: String,
    #[serde(rename = "vcs-repo")]
    pub vcs_repo: Option<VcsRepo>,
}

/// VCS repository connected to a workspace
#[derive(Deserialize, Debug, Clone)]
pub struct VcsRepo {
    #[serde(rename = "display-identifier")]
    pub display_identifier: Option<String>,
    pub identifier: Option<String>,
}

/// Workspace relationships from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct WorkspaceRelationships {
    #[serde(rename = "current-run")]
    pub current_run: Option<RelationshipData>,
}

/// Generic relationship data
#[derive(Deserialize, Debug, Clone)]
pub struct RelationshipData {
    pub data: Option<RelationshipId>,
}

impl RelationshipData {
    /// ID of the related resource, if the relationship is populated
    pub fn id(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.id.as_str())
    }
}

/// Relationship ID reference
#[derive(Deserialize, Debug, Clone)]
pub struct RelationshipId {
    pub id: String,
}

impl TfeResource for Workspace {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.name
    }
}

impl Workspace {
    /// Display name of the connected VCS repository (e.g. "acme/infra")
    pub fn vcs_repo_name(&self) -> Option<&str> {
        self.attributes.vcs_repo.as_ref().and_then(|repo| {
            repo.display_identifier
                .as_deref()
                .or(repo.identifier.as_deref())
        })
    }

    /// ID of the workspace's current run
    pub fn current_run_id(&self) -> Option<&str> {
        self.relationships
            .as_ref()
            .and_then(|r| r.current_run.as_ref())
            .and_then(|r| r.id())
    }
}

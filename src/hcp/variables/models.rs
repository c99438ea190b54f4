//! Workspace variable data models

use serde::{Deserialize, Serialize};

/// Variable data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct VariableResource {
    pub id: String,
    pub attributes: VariableAttributes,
}

/// Variable attributes from TFE API
///
/// `value` is null for sensitive variables.
#[derive(Deserialize, Debug, Clone)]
pub struct VariableAttributes {
    pub key: String,
    pub value: Option<String>,
    pub category: Option<String>,
    pub sensitive: Option<bool>,
    pub hcl: Option<bool>,
}

/// Workspace side of a [`WorkspaceVariable`] record
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceSummary {
    pub id: String,
    pub name: String,
    pub vcs_repo_name: Option<String>,
}

/// Variable side of a [`WorkspaceVariable`] record
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub id: String,
    pub key: String,
    pub value: String,
    pub category: String,
    pub sensitive: bool,
    pub hcl: bool,
}

impl From<&VariableResource> for Variable {
    fn from(var: &VariableResource) -> Self {
        Self {
            id: var.id.clone(),
            key: var.attributes.key.clone(),
            value: var.attributes.value.clone().unwrap_or_default(),
            category: var.attributes.category.clone().unwrap_or_default(),
            sensitive: var.attributes.sensitive.unwrap_or(false),
            hcl: var.attributes.hcl.unwrap_or(false),
        }
    }
}

/// A variable together with the workspace it is set on
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceVariable {
    pub workspace: WorkspaceSummary,
    pub variable: Variable,
}

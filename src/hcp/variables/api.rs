//! Workspace variable API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::hcp::traits::{ApiListResponse, Fetch, TfeResource};
use crate::hcp::TfeClient;

use super::models::{Variable, VariableResource, WorkspaceSummary, WorkspaceVariable};

impl TfeClient {
    /// Get variables of a single workspace
    pub async fn get_workspace_variables(&self, workspace_id: &str) -> Result<Vec<VariableResource>> {
        let path = format!(
            "/{}/{}/{}",
            api::WORKSPACES,
            urlencoding::encode(workspace_id),
            api::VARS
        );
        let error_context = format!("variables for workspace '{}'", workspace_id);

        let (vars, _) = self
            .fetch_all_pages::<VariableResource, serde_json::Value, ApiListResponse<VariableResource>>(
                &path,
                &error_context,
            )
            .await?;
        Ok(vars)
    }

    /// Get every variable of every workspace in an organization
    pub async fn list_workspace_variables(&self, org: &str) -> Result<Vec<WorkspaceVariable>> {
        let workspaces = self.list_workspaces(org).await?;
        let mut variables = Vec::new();

        for ws in &workspaces {
            let vars = self.get_workspace_variables(ws.id()).await?;
            debug!("Workspace '{}' has {} variables", ws.name(), vars.len());

            let summary = WorkspaceSummary {
                id: ws.id().to_string(),
                name: ws.name().to_string(),
                vcs_repo_name: ws.vcs_repo_name().map(str::to_string),
            };
            variables.extend(vars.iter().map(|var| WorkspaceVariable {
                workspace: summary.clone(),
                variable: Variable::from(var),
            }));
        }

        debug!(
            "Found {} variables in organization '{}'",
            variables.len(),
            org
        );
        Ok(variables)
    }
}

impl Fetch for WorkspaceVariable {
    async fn fetch(client: &TfeClient, org: &str) -> Result<Vec<Self>> {
        client.list_workspace_variables(org).await
    }
}

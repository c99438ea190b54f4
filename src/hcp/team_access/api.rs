//! Team workspace access API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::hcp::traits::{ApiListResponse, Fetch, TfeResource};
use crate::hcp::TfeClient;

use super::models::{TeamAccess, TeamRef, TeamResource, TeamWorkspaceResource, WorkspaceRef};

impl TfeClient {
    /// Get team access bindings of a single workspace, with teams included
    pub async fn get_workspace_team_accesses(
        &self,
        workspace_id: &str,
    ) -> Result<(Vec<TeamWorkspaceResource>, Vec<TeamResource>)> {
        let path = format!(
            "/{}?filter[workspace][id]={}&include=team",
            api::TEAM_WORKSPACES,
            urlencoding::encode(workspace_id)
        );
        let error_context = format!("team accesses for workspace '{}'", workspace_id);

        self.fetch_all_pages::<
            TeamWorkspaceResource,
            TeamResource,
            ApiListResponse<TeamWorkspaceResource, TeamResource>,
        >(&path, &error_context)
        .await
    }

    /// Get every team access binding of every workspace in an organization
    pub async fn list_team_accesses(&self, org: &str) -> Result<Vec<TeamAccess>> {
        let workspaces = self.list_workspaces(org).await?;
        let mut accesses = Vec::new();

        for ws in &workspaces {
            let (bindings, teams) = self.get_workspace_team_accesses(ws.id()).await?;
            debug!(
                "Workspace '{}' has {} team access bindings",
                ws.name(),
                bindings.len()
            );

            accesses.extend(bindings.iter().map(|binding| {
                let team_id = binding.team_id();
                let team_name = teams
                    .iter()
                    .find(|t| t.id == team_id)
                    .map(|t| t.attributes.name.clone())
                    .unwrap_or_default();

                TeamAccess {
                    id: binding.id.clone(),
                    access: binding.access().to_string(),
                    team: TeamRef {
                        id: team_id.to_string(),
                        name: team_name,
                    },
                    workspace: WorkspaceRef {
                        id: ws.id().to_string(),
                        name: ws.name().to_string(),
                    },
                }
            }));
        }

        debug!(
            "Found {} team accesses in organization '{}'",
            accesses.len(),
            org
        );
        Ok(accesses)
    }
}

impl Fetch for TeamAccess {
    async fn fetch(client: &TfeClient, org: &str) -> Result<Vec<Self>> {
        client.list_team_accesses(org).await
    }
}

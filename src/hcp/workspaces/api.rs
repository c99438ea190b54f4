//! Workspace API operations

use serde::de::DeserializeOwned;

use crate::config::api;
use crate::error::Result;
use crate::hcp::traits::ApiListResponse;
use crate::hcp::TfeClient;

use super::models::Workspace;

impl TfeClient {
    /// Get all workspaces of an organization
    pub async fn list_workspaces(&self, org: &str) -> Result<Vec<Workspace>> {
        let (workspaces, _) = self
            .list_workspaces_including::<serde_json::Value>(org, None)
            .await?;
        Ok(workspaces)
    }

    /// Get all workspaces of an organization together with the related
    /// resources requested through `include`
    pub(crate) async fn list_workspaces_including<I>(
        &self,
        org: &str,
        include: Option<&str>,
    ) -> Result<(Vec<Workspace>, Vec<I>)>
    where
        I: DeserializeOwned,
    {
        let mut path = format!(
            "/{}/{}/{}",
            api::ORGANIZATIONS,
            urlencoding::encode(org),
            api::WORKSPACES
        );
        if let Some(include) = include {
            path.push_str(&format!("?include={}", include));
        }
        let error_context = format!("workspaces for organization '{}'", org);

        self.fetch_all_pages::<Workspace, I, ApiListResponse<Workspace, I>>(&path, &error_context)
            .await
    }
}

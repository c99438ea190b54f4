//! Run API operations

use log::debug;

use crate::error::Result;
use crate::hcp::traits::{Fetch, TfeResource};
use crate::hcp::TfeClient;

use super::models::{is_final_status, Run, RunResource};

impl TfeClient {
    /// Get the current, still active run of every workspace in an organization
    ///
    /// Workspaces are listed with their current run included; workspaces
    /// without a current run, or whose current run reached a final status,
    /// are skipped. Output follows workspace order.
    pub async fn list_current_runs(&self, org: &str) -> Result<Vec<Run>> {
        let (workspaces, included) = self
            .list_workspaces_including::<RunResource>(org, Some("current_run"))
            .await?;

        let runs: Vec<Run> = workspaces
            .iter()
            .filter_map(|ws| {
                let run_id = ws.current_run_id()?;
                let run = included.iter().find(|r| r.id == run_id)?;
                if is_final_status(&run.attributes.status) {
                    debug!(
                        "Skipping run '{}' of workspace '{}' ({})",
                        run.id,
                        ws.name(),
                        run.attributes.status
                    );
                    return None;
                }
                Some(Run {
                    workspace: ws.name().to_string(),
                    status: run.attributes.status.clone(),
                    is_confirmable: run.is_confirmable(),
                    id: run.id.clone(),
                })
            })
            .collect();

        debug!("Found {} current runs in organization '{}'", runs.len(), org);
        Ok(runs)
    }
}

impl Fetch for Run {
    async fn fetch(client: &TfeClient, org: &str) -> Result<Vec<Self>> {
        client.list_current_runs(org).await
    }
}

#[cfg(test)]
mod tests {
    use crate::hcp::TfeClient;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn workspace(id: &str, name: &str, run_id: Option<&str>) -> serde_json::Value {
        let data = run_id.map(|id| serde_json::json!({ "id": id, "type": "runs" }));
        serde_json::json!({
            "id": id,
            "type": "workspaces",
            "attributes": { "name": name },
            "relationships": { "current-run": { "data": data } }
        })
    }

    fn run(id: &str, status: &str, confirmable: bool) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "type": "runs",
            "attributes": {
                "status": status,
                "actions": { "is-confirmable": confirmable }
            }
        })
    }

    #[tokio::test]
    async fn test_list_current_runs() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/organizations/acme/workspaces"))
            .and(query_param("include", "current_run"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [
                    workspace("ws-1", "prod", Some("run-1")),
                    workspace("ws-2", "stage", Some("run-2")),
                    workspace("ws-3", "empty", None),
                    workspace("ws-4", "dev", Some("run-4"))
                ],
                "included": [
                    run("run-4", "planning", false),
                    run("run-1", "applied", false),
                    run("run-2", "planned", true)
                ],
                "meta": { "pagination": { "current-page": 1, "next-page": null } }
            })))
            .mount(&mock_server)
            .await;

        let client = TfeClient::test_client(&mock_server.uri());
        let runs = client.list_current_runs("acme").await.unwrap();

        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].workspace, "stage");
        assert_eq!(runs[0].id, "run-2");
        assert_eq!(runs[0].status, "planned");
        assert!(runs[0].is_confirmable);
        assert_eq!(runs[1].workspace, "dev");
        assert_eq!(runs[1].id, "run-4");
        assert!(!runs[1].is_confirmable);
    }

    #[tokio::test]
    async fn test_list_current_runs_no_workspaces() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/organizations/acme/workspaces"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": []
            })))
            .mount(&mock_server)
            .await;

        let client = TfeClient::test_client(&mock_server.uri());
        let runs = client.list_current_runs("acme").await.unwrap();
        assert!(runs.is_empty());
    }
}

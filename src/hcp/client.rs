//! TFE HTTP client for API interactions

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::traits::PaginatedResponse;

/// TFE API client
pub struct TfeClient {
    client: Client,
    token: String,
    host: String,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
}

impl TfeClient {
    /// Create a new TFE client
    ///
    /// Fails when the token is blank or the HTTP client cannot be built.
    pub fn new(token: String, host: String) -> Result<Self> {
        if token.trim().is_empty() {
            return Err(TfeError::TokenNotFound(format!(
                "Terraform Cloud token for host '{}' is empty",
                host
            )));
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            token,
            host,
            base_url_override: None,
        })
    }

    /// Create a client with custom base URL (for testing with mock servers)
    #[cfg(test)]
    pub fn with_base_url(token: String, host: String, base_url: String) -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            host,
            base_url_override: Some(base_url),
        }
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.clone();
        }
        format!(
            "https://{}/{}",
            self.host,
            api::BASE_PATH.trim_start_matches('/')
        )
    }

    /// Get the host for building URLs
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/vnd.api+json")
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(TfeError::Unauthorized(format!(
                "token rejected by '{}' while fetching {}",
                self.host, error_context
            )));
        }
        if !status.is_success() {
            return Err(TfeError::Api {
                status: status.as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }
        Ok(response.json().await?)
    }

    /// Fetch every page of a paginated API endpoint, one page at a time
    ///
    /// Follows `meta.pagination.next-page` until the server stops returning
    /// one. Items keep server order; included resources from all pages are
    /// concatenated.
    ///
    /// # Arguments
    /// * `path` - API path (e.g., "/organizations/my-org/workspaces" or with query "...?include=current_run")
    /// * `error_context` - Context for error messages (e.g., "workspaces for organization 'my-org'")
    pub async fn fetch_all_pages<T, I, R>(
        &self,
        path: &str,
        error_context: &str,
    ) -> Result<(Vec<T>, Vec<I>)>
    where
        R: DeserializeOwned + PaginatedResponse<T, I>,
    {
        let separator = if path.contains('?') { "&" } else { "?" };
        let mut items = Vec::new();
        let mut included = Vec::new();
        let mut page = 1;

        loop {
            let url = format!(
                "{}{}{}page[size]={}&page[number]={}",
                self.base_url(),
                path,
                separator,
                api::DEFAULT_PAGE_SIZE,
                page
            );
            debug!("Fetching page {} from: {}", page, url);

            let response = self.get(&url).send().await?;
            let page_context = format!("{} (page {})", error_context, page);
            let resp: R = self.parse_api_response(response, &page_context).await?;

            let next_page = resp.next_page();
            let (data, extra) = resp.into_parts();
            let count = data.len();
            items.extend(data);
            included.extend(extra);

            debug!("Page {} returned {} items", page, count);

            match next_page {
                Some(next) if next > page && count > 0 => page = next,
                _ => break,
            }
        }

        debug!("Fetched {} total items for {}", items.len(), error_context);
        Ok((items, included))
    }
}

#[cfg(test)]
impl TfeClient {
    /// Create a test client with mock base URL
    pub fn test_client(base_url: &str) -> Self {
        Self::with_base_url(
            "test-token".to_string(),
            "mock.terraform.io".to_string(),
            base_url.to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hcp::traits::ApiListResponse;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_base_url() {
        let client = TfeClient::new("token".to_string(), "example.com".to_string()).unwrap();
        assert_eq!(client.base_url(), "https://example.com/api/v2");
    }

    #[test]
    fn test_client_creation() {
        let client =
            TfeClient::new("my-token".to_string(), "tfe.example.com".to_string()).unwrap();
        assert_eq!(client.host(), "tfe.example.com");
        assert_eq!(client.token, "my-token");
    }

    #[test]
    fn test_client_rejects_blank_token() {
        let result = TfeClient::new("  ".to_string(), "tfe.example.com".to_string());
        assert!(matches!(result, Err(TfeError::TokenNotFound(_))));
    }

    #[test]
    fn test_test_client_uses_override() {
        let client = TfeClient::test_client("http://127.0.0.1:9999");
        assert_eq!(client.base_url(), "http://127.0.0.1:9999");
    }

    fn page_body(ids: &[&str], next_page: Option<u32>) -> serde_json::Value {
        let data: Vec<serde_json::Value> = ids
            .iter()
            .map(|id| serde_json::json!({ "id": id }))
            .collect();
        serde_json::json!({
            "data": data,
            "meta": { "pagination": { "current-page": 1, "next-page": next_page } }
        })
    }

    #[tokio::test]
    async fn test_fetch_all_pages_follows_next_page() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/things"))
            .and(query_param("page[number]", "1"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&["a", "b"], Some(2))))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/things"))
            .and(query_param("page[number]", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&["c"], None)))
            .mount(&mock_server)
            .await;

        let client = TfeClient::test_client(&mock_server.uri());
        let (items, included) = client
            .fetch_all_pages::<serde_json::Value, serde_json::Value, ApiListResponse<_, _>>(
                "/things", "things",
            )
            .await
            .unwrap();

        let ids: Vec<&str> = items.iter().filter_map(|v| v["id"].as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert!(included.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_all_pages_appends_to_existing_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/things"))
            .and(query_param("include", "team"))
            .and(query_param("page[size]", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&["a"], None)))
            .mount(&mock_server)
            .await;

        let client = TfeClient::test_client(&mock_server.uri());
        let (items, _) = client
            .fetch_all_pages::<serde_json::Value, serde_json::Value, ApiListResponse<_, _>>(
                "/things?include=team",
                "things",
            )
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_all_pages_unauthorized() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/things"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let client = TfeClient::test_client(&mock_server.uri());
        let result = client
            .fetch_all_pages::<serde_json::Value, serde_json::Value, ApiListResponse<_, _>>(
                "/things", "things",
            )
            .await;
        assert!(matches!(result, Err(TfeError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_fetch_all_pages_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/things"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = TfeClient::test_client(&mock_server.uri());
        let err = client
            .fetch_all_pages::<serde_json::Value, serde_json::Value, ApiListResponse<_, _>>(
                "/things", "things",
            )
            .await
            .unwrap_err();
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("Failed to fetch things"));
    }
}

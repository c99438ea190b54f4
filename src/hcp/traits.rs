//! Common traits for TFE resources

use serde::Deserialize;

use crate::error::Result;
use crate::hcp::{PaginationMeta, TfeClient};

/// Common trait for TFE resources that carry an ID and a human-readable name
pub trait TfeResource {
    /// Get the resource ID
    fn id(&self) -> &str;

    /// Get the human-readable name
    fn name(&self) -> &str;
}

/// A record kind that can be listed for a whole organization
///
/// The returned list is complete and in server order.
#[allow(async_fn_in_trait)]
pub trait Fetch: Sized {
    /// Fetch every record of this kind in `org`
    async fn fetch(client: &TfeClient, org: &str) -> Result<Vec<Self>>;
}

/// Trait for API responses that contain paginated data
///
/// Implement this trait for any response struct to enable use with
/// `TfeClient::fetch_all_pages()`.
pub trait PaginatedResponse<T, I> {
    /// Consume self and return the data items and included resources
    fn into_parts(self) -> (Vec<T>, Vec<I>);
    /// Get reference to pagination metadata
    fn meta(&self) -> Option<&PaginationMeta>;

    /// Next page number announced by the server, if any
    fn next_page(&self) -> Option<u32> {
        self.meta()
            .and_then(|m| m.pagination.as_ref())
            .and_then(|p| p.next_page)
    }
}

/// Generic API list response wrapper for paginated endpoints
///
/// `I` is the type of the compound-document `included` array, if the
/// request asked for one.
#[derive(Deserialize, Debug)]
pub struct ApiListResponse<T, I = serde_json::Value> {
    pub data: Vec<T>,
    #[serde(default = "Vec::new")]
    pub included: Vec<I>,
    #[serde(default)]
    pub meta: Option<PaginationMeta>,
}

impl<T, I> PaginatedResponse<T, I> for ApiListResponse<T, I> {
    fn into_parts(self) -> (Vec<T>, Vec<I>) {
        (self.data, self.included)
    }

    fn meta(&self) -> Option<&PaginationMeta> {
        self.meta.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_list_response_into_parts() {
        let response: ApiListResponse<serde_json::Value> =
            serde_json::from_value(serde_json::json!({
                "data": [{"id": "item-1"}, {"id": "item-2"}],
                "included": [{"id": "team-1"}],
                "meta": {
                    "pagination": {
                        "current-page": 1,
                        "next-page": null
                    }
                }
            }))
            .unwrap();
        assert!(response.next_page().is_none());
        let (data, included) = response.into_parts();
        assert_eq!(data.len(), 2);
        assert_eq!(included.len(), 1);
    }

    #[test]
    fn test_api_list_response_next_page() {
        let response: ApiListResponse<serde_json::Value> =
            serde_json::from_value(serde_json::json!({
                "data": [{"id": "item-1"}],
                "meta": {
                    "pagination": {
                        "current-page": 1,
                        "next-page": 2,
                        "total-pages": 3,
                        "total-count": 5
                    }
                }
            }))
            .unwrap();
        assert_eq!(response.next_page(), Some(2));
        let pagination = response.meta().unwrap().pagination.as_ref().unwrap();
        assert_eq!(pagination.current_page, 1);
    }

    #[test]
    fn test_api_list_response_without_meta() {
        let response: ApiListResponse<serde_json::Value> =
            serde_json::from_value(serde_json::json!({
                "data": [{"id": "item-1"}]
            }))
            .unwrap();
        assert!(response.meta().is_none());
        assert!(response.next_page().is_none());
        assert_eq!(response.into_parts().0.len(), 1);
    }

    #[test]
    fn test_api_list_response_empty_data() {
        let response: ApiListResponse<serde_json::Value> =
            serde_json::from_value(serde_json::json!({
                "data": []
            }))
            .unwrap();
        let (data, included) = response.into_parts();
        assert!(data.is_empty());
        assert!(included.is_empty());
    }
}

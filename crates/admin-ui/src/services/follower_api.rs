//! Follower list and approval API service
//!
//! Three endpoints back the followers screen: the public approved-followers
//! list, the authenticated pending-requests list, and the authenticated
//! approve action. The two reads are independent, so a combined fetch runs
//! them concurrently and only resolves once both are terminal.

use futures_util::future;

use crate::models::error::AdminResult;
use crate::models::follower::{normalize_follower_list, Follower, FollowerLists};
use crate::services::api_client::get_api_client;

/// Public endpoint listing approved followers
pub const FOLLOWERS_PATH: &str = "/api/followers";
/// Admin endpoint listing pending follow requests
pub const FOLLOWERS_PENDING_PATH: &str = "/api/admin/followers/pending";
/// Admin endpoint approving a pending follow request
pub const FOLLOWER_APPROVE_PATH: &str = "/api/admin/followers/approve";

/// Follower management service
pub struct FollowerApi;

impl FollowerApi {
    /// Extract the follower list from the approved-followers response.
    ///
    /// The payload nests the list under a `followers` key; an empty-object
    /// marker in that position normalizes to an empty list.
    pub fn approved_from_response(value: &serde_json::Value) -> AdminResult<Vec<Follower>> {
        match value.get("followers") {
            Some(list) => normalize_follower_list(list),
            None => Ok(Vec::new()),
        }
    }

    /// Approved followers; public endpoint, no auth header attached
    pub async fn list_approved() -> AdminResult<Vec<Follower>> {
        let value: serde_json::Value = get_api_client()?.get_json_public(FOLLOWERS_PATH).await?;
        Self::approved_from_response(&value)
    }

    /// Pending follow requests; requires an admin token
    pub async fn list_pending() -> AdminResult<Vec<Follower>> {
        let value: serde_json::Value = get_api_client()?.get_json(FOLLOWERS_PENDING_PATH).await?;
        normalize_follower_list(&value)
    }

    /// Fetch both lists concurrently. Resolves only once both reads are
    /// terminal, so callers replace their state in a single step.
    pub async fn fetch_lists() -> AdminResult<FollowerLists> {
        let (followers, pending) = future::join(Self::list_approved(), Self::list_pending()).await;
        Ok(FollowerLists {
            followers: followers?,
            pending: pending?,
        })
    }

    /// Approve request body, keyed by the follower's link identity
    pub fn approve_body(link: &str) -> serde_json::Value {
        serde_json::json!({
            "federationIRI": link,
            "approved": true,
        })
    }

    /// Approve a pending follow request
    pub async fn approve(link: &str) -> AdminResult<()> {
        get_api_client()?
            .post_json(FOLLOWER_APPROVE_PATH, &Self::approve_body(link))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approve_body_shape() {
        let body = FollowerApi::approve_body("https://remote.example/users/maude");
        assert_eq!(
            body,
            serde_json::json!({
                "federationIRI": "https://remote.example/users/maude",
                "approved": true,
            })
        );
    }

    #[test]
    fn test_approved_response_extracts_nested_list() {
        let response = serde_json::json!({
            "followers": [
                {
                    "link": "https://remote.example/users/maude",
                    "name": "Maude",
                    "image": "",
                    "createdAt": "2023-01-01T00:00:00Z",
                    "approved": "2023-01-02T00:00:00Z"
                }
            ]
        });

        let followers = FollowerApi::approved_from_response(&response).unwrap();
        assert_eq!(followers.len(), 1);
        assert!(!followers[0].is_pending());
    }

    #[test]
    fn test_approved_response_empty_markers() {
        // The server emits `{}` (or an empty-object list) when there is
        // nothing to report; both normalize to an empty list.
        let empty = serde_json::json!({});
        assert!(FollowerApi::approved_from_response(&empty)
            .unwrap()
            .is_empty());

        let empty_list_marker = serde_json::json!({ "followers": {} });
        assert!(FollowerApi::approved_from_response(&empty_list_marker)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_pending_response_normalization() {
        // The pending endpoint returns the array directly.
        let raw = serde_json::json!([
            { "link": "https://a/b", "createdAt": "2023-01-01T00:00:00Z" }
        ]);
        let pending = normalize_follower_list(&raw).unwrap();
        assert_eq!(pending.len(), 1);
        assert!(pending[0].is_pending());

        let empty = normalize_follower_list(&serde_json::json!({})).unwrap();
        assert!(empty.is_empty());
    }
}

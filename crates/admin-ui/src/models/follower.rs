//! Follower data models
//!
//! A [`Follower`] is a remote Fediverse account that requested or was granted
//! notification of this server's live status. Records are server-owned
//! snapshots: the client never mutates one, it only replaces whole lists
//! after a re-fetch. The only state transition (pending → approved) happens
//! server-side and becomes visible through the approval timestamp.
//!
//! Also hosts the pure table logic of the followers screen: list
//! normalization, date sorting, and fixed-size paging.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::error::AdminResult;

/// Fixed table page size
pub const PAGE_SIZE: usize = 20;

/// A remote account following (or requesting to follow) this server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Follower {
    /// Remote actor IRI; unique identity, display URL, and row key
    pub link: String,
    /// Display name of the remote account
    #[serde(default)]
    pub name: String,
    /// Avatar URL
    #[serde(default)]
    pub image: String,
    /// When the follow request was made
    pub created_at: DateTime<Utc>,
    /// When the request was approved; absent while pending
    #[serde(default)]
    pub approved: Option<DateTime<Utc>>,
}

impl Follower {
    /// A follower without an approval timestamp is still awaiting approval
    pub fn is_pending(&self) -> bool {
        self.approved.is_none()
    }

    /// Sort key for the approved table. An approved record always carries a
    /// timestamp; the request time stands in if the server omitted one.
    fn approved_key(&self) -> DateTime<Utc> {
        self.approved.unwrap_or(self.created_at)
    }
}

/// The two follower collections held by the followers screen
///
/// The server guarantees the lists are disjoint; the client trusts whatever
/// it receives and replaces both wholesale on every re-fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FollowerLists {
    pub followers: Vec<Follower>,
    pub pending: Vec<Follower>,
}

impl FollowerLists {
    /// The pending section of the screen only renders when this is true
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

/// Date column a follower table sorts by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowerSortField {
    /// Request timestamp (`created_at`), used by the pending table
    Requested,
    /// Approval timestamp, used by the followers table
    Approved,
}

impl FollowerSortField {
    /// Column header shown above the date column
    pub fn header(&self) -> &'static str {
        match self {
            FollowerSortField::Requested => "Requested",
            FollowerSortField::Approved => "Added",
        }
    }
}

/// Sort direction, toggled by header interaction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "Ascending",
            SortOrder::Descending => "Descending",
        }
    }
}

/// Sort a follower list in place by the given date column
pub fn sort_followers(list: &mut [Follower], field: FollowerSortField, order: SortOrder) {
    list.sort_by(|a, b| {
        let ordering = match field {
            FollowerSortField::Requested => a.created_at.cmp(&b.created_at),
            FollowerSortField::Approved => a.approved_key().cmp(&b.approved_key()),
        };
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}

/// Number of pages a list of `len` rows occupies; never zero
pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE).max(1)
}

/// The rows visible on one page. Out-of-range indexes clamp to the last
/// page, which keeps the view stable when a re-fetch shrinks the list.
pub fn page(list: &[Follower], index: usize) -> &[Follower] {
    let index = index.min(page_count(list.len()) - 1);
    let start = index * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(list.len());
    &list[start..end]
}

/// Normalize a raw list response into follower records.
///
/// The server emits an empty object (or nothing at all) where an empty array
/// is meant; anything that is not an array normalizes to an empty list
/// rather than an error. A malformed array element is a parse error.
pub fn normalize_follower_list(value: &serde_json::Value) -> AdminResult<Vec<Follower>> {
    match value {
        serde_json::Value::Array(_) => {
            serde_json::from_value(value.clone()).map_err(Into::into)
        }
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn follower(link: &str, created_secs: i64, approved_secs: Option<i64>) -> Follower {
        Follower {
            link: link.to_string(),
            name: format!("account-{}", created_secs),
            image: String::new(),
            created_at: at(created_secs),
            approved: approved_secs.map(at),
        }
    }

    #[test]
    fn test_pending_status_follows_approval_timestamp() {
        assert!(follower("https://a/b", 100, None).is_pending());
        assert!(!follower("https://a/b", 100, Some(200)).is_pending());
    }

    #[test]
    fn test_deserializes_wire_format() {
        let raw = serde_json::json!({
            "link": "https://remote.example/users/maude",
            "name": "Maude",
            "image": "https://remote.example/avatar.png",
            "createdAt": "2023-01-01T10:00:00Z"
        });

        let parsed: Follower = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.link, "https://remote.example/users/maude");
        assert_eq!(parsed.created_at, Utc.with_ymd_and_hms(2023, 1, 1, 10, 0, 0).unwrap());
        assert!(parsed.is_pending());
    }

    #[test]
    fn test_normalize_empty_markers_to_empty_list() {
        assert_eq!(
            normalize_follower_list(&serde_json::json!({})).unwrap(),
            Vec::new()
        );
        assert_eq!(
            normalize_follower_list(&serde_json::Value::Null).unwrap(),
            Vec::new()
        );
        assert_eq!(
            normalize_follower_list(&serde_json::json!([])).unwrap(),
            Vec::new()
        );
    }

    #[test]
    fn test_normalize_parses_populated_list() {
        let raw = serde_json::json!([
            { "link": "https://a/b", "createdAt": "2023-01-01T00:00:00Z" },
            { "link": "https://c/d", "createdAt": "2023-02-01T00:00:00Z", "approved": "2023-02-02T00:00:00Z" }
        ]);

        let parsed = normalize_follower_list(&raw).unwrap();
        assert_eq!(parsed.len(), 2);
        assert!(parsed[0].is_pending());
        assert!(!parsed[1].is_pending());
    }

    #[test]
    fn test_normalize_rejects_malformed_rows() {
        let raw = serde_json::json!([{ "name": "missing link and createdAt" }]);
        assert!(normalize_follower_list(&raw).is_err());
    }

    #[test]
    fn test_sort_defaults_to_newest_first() {
        let mut list = vec![
            follower("https://a/1", 100, None),
            follower("https://a/3", 300, None),
            follower("https://a/2", 200, None),
        ];

        sort_followers(&mut list, FollowerSortField::Requested, SortOrder::default());
        let links: Vec<_> = list.iter().map(|f| f.link.as_str()).collect();
        assert_eq!(links, ["https://a/3", "https://a/2", "https://a/1"]);
    }

    #[test]
    fn test_sort_toggle_reverses_direction() {
        let mut list = vec![
            follower("https://a/1", 100, Some(110)),
            follower("https://a/2", 200, Some(210)),
        ];

        let order = SortOrder::default().toggled();
        assert_eq!(order, SortOrder::Ascending);
        sort_followers(&mut list, FollowerSortField::Approved, order);
        assert_eq!(list[0].link, "https://a/1");

        // Toggling again restores the default.
        assert_eq!(order.toggled(), SortOrder::Descending);
    }

    #[test]
    fn test_page_slices_fixed_size() {
        let list: Vec<_> = (0..45)
            .map(|i| follower(&format!("https://a/{}", i), i, None))
            .collect();

        assert_eq!(page_count(list.len()), 3);
        assert_eq!(page(&list, 0).len(), PAGE_SIZE);
        assert_eq!(page(&list, 1).len(), PAGE_SIZE);
        assert_eq!(page(&list, 2).len(), 5);
        // Out of range clamps to the last page.
        assert_eq!(page(&list, 9).len(), 5);
    }

    #[test]
    fn test_page_count_of_empty_list_is_one() {
        assert_eq!(page_count(0), 1);
        assert!(page(&[], 0).is_empty());
    }

    #[test]
    fn test_approval_cycle_moves_row_between_lists() {
        // The state-layer shape of the end-to-end scenario: one pending
        // request, approved server-side, observed via a wholesale re-fetch.
        let pending = follower("https://a/b", 100, None);
        let lists = FollowerLists {
            followers: Vec::new(),
            pending: vec![pending.clone()],
        };
        assert!(lists.has_pending());

        let refetched = FollowerLists {
            followers: vec![Follower {
                approved: Some(at(200)),
                ..pending
            }],
            pending: Vec::new(),
        };
        assert!(!refetched.has_pending());
        assert_eq!(refetched.followers.len(), 1);
        assert!(!refetched.followers[0].is_pending());
    }

    proptest! {
        #[test]
        fn prop_sort_is_total_and_length_preserving(stamps in proptest::collection::vec(0i64..4_000_000, 0..64)) {
            let mut list: Vec<_> = stamps
                .iter()
                .enumerate()
                .map(|(i, secs)| follower(&format!("https://a/{}", i), *secs, None))
                .collect();
            let original_len = list.len();

            sort_followers(&mut list, FollowerSortField::Requested, SortOrder::Descending);

            prop_assert_eq!(list.len(), original_len);
            for pair in list.windows(2) {
                prop_assert!(pair[0].created_at >= pair[1].created_at);
            }
        }

        #[test]
        fn prop_pages_partition_the_list(len in 0usize..200) {
            let list: Vec<_> = (0..len)
                .map(|i| follower(&format!("https://a/{}", i), i as i64, None))
                .collect();

            let total: usize = (0..page_count(len)).map(|i| page(&list, i).len()).sum();
            prop_assert_eq!(total, len);
        }
    }
}

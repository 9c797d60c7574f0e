//! Pull request shaping and page results.
//!
//! `PullRequest` is what arrives at the boundary, every tuning field
//! optional. `PullRequest::params` applies the defaults exactly once and the
//! resulting `PullParams` is all the pagination engine ever sees.

use serde::{Deserialize, Serialize};

use crate::chat::ChatMessage;

/// Cursor used when a pull does not supply one.
pub const DEFAULT_CURSOR: i64 = 0;

/// Page size used when a pull does not supply one.
pub const DEFAULT_LIMIT: i64 = 10;

/// Inbound pull request, as decoded from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    pub chat: String,
    #[serde(default)]
    pub cursor: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub reverse: Option<bool>,
}

/// Fully-defaulted pagination parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullParams {
    pub cursor: i64,
    pub limit: i64,
    pub reverse: bool,
}

impl Default for PullParams {
    fn default() -> Self {
        Self {
            cursor: DEFAULT_CURSOR,
            limit: DEFAULT_LIMIT,
            reverse: false,
        }
    }
}

impl PullRequest {
    /// Resolve absent fields to their defaults.
    pub fn params(&self) -> PullParams {
        PullParams {
            cursor: self.cursor.unwrap_or(DEFAULT_CURSOR),
            limit: self.limit.unwrap_or(DEFAULT_LIMIT),
            reverse: self.reverse.unwrap_or(false),
        }
    }
}

/// One bounded result of a pull.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub messages: Vec<ChatMessage>,
    pub has_more: bool,
    /// Position to resupply as `cursor` for the next pull. Zero unless
    /// `has_more` is set.
    pub next_cursor: i64,
}

impl Page {
    /// The page returned for an empty room or an out-of-range request.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_defaults() {
        let req = PullRequest {
            chat: "a:b".to_string(),
            ..Default::default()
        };
        assert_eq!(req.params(), PullParams::default());
        assert_eq!(req.params().limit, 10);
        assert_eq!(req.params().cursor, 0);
        assert!(!req.params().reverse);
    }

    #[test]
    fn test_params_keep_supplied_values() {
        let req = PullRequest {
            chat: "a:b".to_string(),
            cursor: Some(4),
            limit: Some(0),
            reverse: Some(true),
        };
        let params = req.params();
        assert_eq!(params.cursor, 4);
        assert_eq!(params.limit, 0);
        assert!(params.reverse);
    }

    #[test]
    fn test_pull_request_deserializes_missing_fields() {
        let req: PullRequest = serde_json::from_str(r#"{"chat":"a:b"}"#).unwrap();
        assert_eq!(req.cursor, None);
        assert_eq!(req.limit, None);
        assert_eq!(req.reverse, None);
    }

    #[test]
    fn test_empty_page_serialization() {
        let json = serde_json::to_value(Page::empty()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"messages": [], "hasMore": false, "nextCursor": 0})
        );
    }
}

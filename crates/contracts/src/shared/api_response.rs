use serde::{Deserialize, Serialize};

/// Body returned by `/complete/{index}`, `/delete/{index}` and `/upload`.
///
/// Only `success` is guaranteed; any field besides `message` is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl ActionResponse {
    /// Fallback for order actions (complete, delete).
    pub const UNKNOWN_ERROR: &'static str = "Unknown error";
    /// Fallback for uploads.
    pub const UNKNOWN_UPLOAD_ERROR: &'static str = "Unknown error occurred.";

    /// Server message, or a generic fallback when none was sent.
    pub fn message_or_default(&self) -> &str {
        self.message_or(Self::UNKNOWN_ERROR)
    }

    /// Server message, or `fallback` when it is missing or empty.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failure_with_message() {
        let resp: ActionResponse =
            serde_json::from_value(json!({ "success": false, "message": "locked" })).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.message_or_default(), "locked");
    }

    #[test]
    fn test_extra_fields_ignored() {
        let resp: ActionResponse = serde_json::from_value(json!({
            "success": true,
            "files": ["20240101120000-a.pdf"],
            "message": "Files uploaded successfully"
        }))
        .unwrap();
        assert!(resp.success);
    }

    #[test]
    fn test_missing_message_falls_back() {
        let resp: ActionResponse = serde_json::from_value(json!({ "success": false })).unwrap();
        assert_eq!(resp.message_or_default(), "Unknown error");
        let resp = ActionResponse {
            success: false,
            message: Some(String::new()),
        };
        assert_eq!(resp.message_or_default(), "Unknown error");
    }

    #[test]
    fn test_upload_fallback_differs_from_action_fallback() {
        let resp: ActionResponse = serde_json::from_value(json!({ "success": false })).unwrap();
        assert_eq!(
            resp.message_or(ActionResponse::UNKNOWN_UPLOAD_ERROR),
            "Unknown error occurred."
        );
        assert_eq!(resp.message_or_default(), "Unknown error");
        let resp = ActionResponse {
            success: false,
            message: Some("File too large".to_string()),
        };
        assert_eq!(resp.message_or(ActionResponse::UNKNOWN_UPLOAD_ERROR), "File too large");
    }
}

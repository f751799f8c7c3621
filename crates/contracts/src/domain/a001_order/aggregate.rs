use anyhow::Context;
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Status
// ============================================================================

/// Order processing status as stored by the backend.
///
/// A missing, `null` or unrecognized status is read as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Completed,
    // `other` must sit on the last variant.
    #[default]
    #[serde(other)]
    Pending,
}

impl OrderStatus {
    /// Status name, also used as the CSS modifier on order cards.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Completed => "Completed",
        }
    }
}

fn status_or_pending<'de, D>(deserializer: D) -> Result<OrderStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<OrderStatus>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Aggregate
// ============================================================================

/// Customer upload order as returned by `GET /orders`.
///
/// Orders carry no identifier of their own; actions address them by their
/// position in the most recently fetched list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default, deserialize_with = "status_or_pending")]
    pub status: OrderStatus,
    /// Stored filenames, `{timestamp}-{original name}`.
    #[serde(default)]
    pub files: Vec<String>,
}

impl Order {
    pub fn is_completed(&self) -> bool {
        self.status == OrderStatus::Completed
    }

    pub fn has_files(&self) -> bool {
        !self.files.is_empty()
    }
}

/// Parse the body of `GET /orders`.
pub fn parse_order_list(body: &str) -> anyhow::Result<Vec<Order>> {
    serde_json::from_str(body).context("order list is not a JSON array of orders")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_defaults_to_pending() {
        let order: Order = serde_json::from_value(json!({
            "name": "Alice",
            "phone": "555-1000",
            "timestamp": "2024-03-15 14:02:26",
            "files": []
        }))
        .unwrap();
        assert_eq!(order.status, OrderStatus::Pending);

        let order: Order = serde_json::from_value(json!({ "name": "Bob", "status": null })).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);

        let order: Order =
            serde_json::from_value(json!({ "name": "Carol", "status": "archived" })).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_completed_status() {
        let order: Order =
            serde_json::from_value(json!({ "name": "Bob", "status": "completed" })).unwrap();
        assert!(order.is_completed());
        assert_eq!(order.status.as_str(), "completed");
    }

    #[test]
    fn test_missing_files_and_extra_fields() {
        let order: Order = serde_json::from_value(json!({
            "name": "Dan",
            "phone": "555-3000",
            "note": "ignored"
        }))
        .unwrap();
        assert!(!order.has_files());
        assert_eq!(order.timestamp, "");
    }

    #[test]
    fn test_parse_order_list() {
        let body = r#"[
            {"name":"Alice","phone":"555-1000","status":"pending","files":["1690000-a.pdf"]},
            {"name":"Bob","phone":"555-2000","status":"completed","files":[]}
        ]"#;
        let orders = parse_order_list(body).unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].files, vec!["1690000-a.pdf".to_string()]);
        assert!(orders[1].is_completed());
    }

    #[test]
    fn test_parse_order_list_rejects_html() {
        assert!(parse_order_list("<!doctype html><title>Login</title>").is_err());
        assert!(parse_order_list(r#"{"error":"nope"}"#).is_err());
    }
}

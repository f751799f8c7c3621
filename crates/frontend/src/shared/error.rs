use thiserror::Error;

/// Failure of a call to the order-management backend.
///
/// `Display` output is shown to the user in alerts and inline errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// HTTP 401, or a response that is not JSON (the server's login page).
    #[error("Not logged in or session expired")]
    Unauthenticated,
    #[error("Failed to build request: {0}")]
    Request(String),
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

impl From<wasm_bindgen::JsValue> for ApiError {
    fn from(err: wasm_bindgen::JsValue) -> Self {
        ApiError::Request(format!("{:?}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ApiError::Network("offline".to_string()).to_string(),
            "Failed to send request: offline"
        );
        assert_eq!(
            ApiError::Parse("expected value".to_string()).to_string(),
            "Failed to parse response: expected value"
        );
    }
}

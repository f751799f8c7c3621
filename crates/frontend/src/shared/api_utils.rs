//! API utilities for frontend-backend communication
//!
//! The order-management backend is same-origin and authenticates with a
//! session cookie, so every request is sent with credentials.

use gloo_net::http::{Request, RequestBuilder, Response};
use web_sys::RequestCredentials;

use crate::shared::error::ApiError;

/// Get the base URL for API requests
///
/// # Returns
/// - Page origin like "http://localhost:5000"
/// - Empty string if window is not available, leaving paths relative
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url(&endpoints.complete_url(3));
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET with the session cookie attached.
pub fn credentialed_get(path: &str) -> RequestBuilder {
    Request::get(&api_url(path)).credentials(RequestCredentials::Include)
}

/// POST with the session cookie attached.
pub fn credentialed_post(path: &str) -> RequestBuilder {
    Request::post(&api_url(path)).credentials(RequestCredentials::Include)
}

pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false)
}

/// A protected endpoint answered 401, or redirected to the HTML login page.
pub fn is_session_lost(status: u16, content_type: Option<&str>) -> bool {
    status == 401 || !is_json_content_type(content_type)
}

/// Reject responses that signal a missing or expired session.
pub fn ensure_session(response: &Response) -> Result<(), ApiError> {
    let content_type = response.headers().get("content-type");
    if is_session_lost(response.status(), content_type.as_deref()) {
        log::warn!(
            "Session lost: {} {} ({})",
            response.status(),
            response.url(),
            content_type.as_deref().unwrap_or("no content type")
        );
        return Err(ApiError::Unauthenticated);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_content_type() {
        assert!(is_json_content_type(Some("application/json")));
        assert!(is_json_content_type(Some("Application/JSON; charset=utf-8")));
        assert!(!is_json_content_type(Some("text/html; charset=utf-8")));
        assert!(!is_json_content_type(None));
    }

    #[test]
    fn test_session_lost() {
        assert!(is_session_lost(401, Some("application/json")));
        assert!(is_session_lost(200, Some("text/html")));
        assert!(is_session_lost(200, None));
        assert!(!is_session_lost(200, Some("application/json")));
        // Application errors still carry JSON and are not session problems.
        assert!(!is_session_lost(400, Some("application/json")));
    }
}

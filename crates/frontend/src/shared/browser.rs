//! Thin wrappers over `window` APIs used by both pages.

use web_sys::{window, Element, ScrollBehavior, ScrollIntoViewOptions, Storage};

/// Blocking alert.
pub fn alert(message: &str) {
    if let Some(w) = window() {
        let _ = w.alert_with_message(message);
    }
}

/// Blocking confirmation dialog. `false` when no window is available.
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Full page navigation, used for server-rendered pages such as `/login`.
pub fn navigate(path: &str) {
    if let Some(w) = window() {
        if let Err(e) = w.location().set_href(path) {
            log::error!("Navigation to {} failed: {:?}", path, e);
        }
    }
}

pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// `content` attribute of `<meta name="{name}">`.
pub fn meta_content(name: &str) -> Option<String> {
    let document = window()?.document()?;
    let meta = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;
    meta.get_attribute("content")
}

pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn smooth_scroll_into_view(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

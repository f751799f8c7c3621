use leptos::prelude::*;

/// Width of the scroll progress bar, in percent.
///
/// A page that cannot scroll reads 0.
pub fn scroll_progress_percent(scroll_top: f64, doc_height: f64, viewport_height: f64) -> f64 {
    let scrollable = doc_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > 0.0
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    pub scrolled: bool,
    pub progress: f64,
}

fn read_scroll() -> Option<ScrollState> {
    let window = web_sys::window()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let doc_height = window.document()?.body()?.offset_height() as f64;
    Some(ScrollState {
        scrolled: is_scrolled(scroll_y),
        progress: scroll_progress_percent(scroll_y, doc_height, viewport),
    })
}

/// Track the window scroll position for the header and progress bar.
pub fn use_scroll_state() -> RwSignal<ScrollState> {
    let state = RwSignal::new(read_scroll().unwrap_or_default());
    let _ = window_event_listener(leptos::ev::scroll, move |_| {
        if let Some(next) = read_scroll() {
            state.set(next);
        }
    });
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent() {
        assert_eq!(scroll_progress_percent(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress_percent(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress_percent(2000.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn test_progress_clamped() {
        // Overscroll bounce on touch devices.
        assert_eq!(scroll_progress_percent(2100.0, 3000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress_percent(-20.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress_percent(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress_percent(0.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_scrolled() {
        assert!(!is_scrolled(0.0));
        assert!(is_scrolled(1.0));
    }
}

use leptos::prelude::*;
use web_sys::{Element, TouchEvent};

use crate::shared::browser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved up; go to the next section.
    Up,
    /// Finger moved down; go to the previous section.
    Down,
    Left,
    Right,
}

/// Classify a touch gesture by screen coordinates.
///
/// Vertical and horizontal movement are judged independently, so a diagonal
/// swipe can yield both.
pub fn classify_swipe(start: (f64, f64), end: (f64, f64), threshold: f64) -> Vec<Swipe> {
    let diff_x = start.0 - end.0;
    let diff_y = start.1 - end.1;
    let mut swipes = Vec::new();
    if diff_y.abs() > threshold {
        swipes.push(if diff_y > 0.0 { Swipe::Up } else { Swipe::Down });
    }
    if diff_x.abs() > threshold {
        swipes.push(if diff_x > 0.0 { Swipe::Left } else { Swipe::Right });
    }
    swipes
}

fn first_touch(ev: &TouchEvent) -> Option<(f64, f64)> {
    let touch = ev.changed_touches().get(0)?;
    Some((touch.screen_x() as f64, touch.screen_y() as f64))
}

/// The `<section>` under the centre of the viewport.
fn current_section() -> Option<Element> {
    let window = web_sys::window()?;
    let x = window.inner_width().ok()?.as_f64()? / 2.0;
    let y = window.inner_height().ok()?.as_f64()? / 2.0;
    let hit = window.document()?.element_from_point(x as f32, y as f32)?;
    hit.closest("section").ok()?
}

fn scroll_to_sibling(swipe: Swipe) {
    let Some(section) = current_section() else {
        return;
    };
    let target = match swipe {
        Swipe::Up => section.next_element_sibling(),
        Swipe::Down => section.previous_element_sibling(),
        Swipe::Left | Swipe::Right => {
            log::debug!("Swipe {:?} detected", swipe);
            return;
        }
    };
    if let Some(target) = target {
        browser::smooth_scroll_into_view(&target);
    }
}

/// Vertical swipes page between sections.
pub fn use_swipe_navigation(threshold: f64) {
    let start = StoredValue::new((0.0f64, 0.0f64));

    let _ = window_event_listener(leptos::ev::touchstart, move |ev| {
        if let Some(point) = first_touch(&ev) {
            start.set_value(point);
        }
    });

    let _ = window_event_listener(leptos::ev::touchend, move |ev| {
        let Some(end) = first_touch(&ev) else {
            return;
        };
        for swipe in classify_swipe(start.get_value(), end, threshold) {
            scroll_to_sibling(swipe);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_swipes() {
        assert_eq!(classify_swipe((100.0, 500.0), (100.0, 300.0), 50.0), vec![Swipe::Up]);
        assert_eq!(classify_swipe((100.0, 300.0), (100.0, 500.0), 50.0), vec![Swipe::Down]);
    }

    #[test]
    fn test_below_threshold_ignored() {
        assert!(classify_swipe((100.0, 300.0), (130.0, 350.0), 50.0).is_empty());
    }

    #[test]
    fn test_diagonal_yields_both() {
        assert_eq!(
            classify_swipe((300.0, 500.0), (100.0, 300.0), 50.0),
            vec![Swipe::Up, Swipe::Left]
        );
    }
}

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

const BUTTON_SELECTOR: &str = ".btn";

/// Circle drawn inside a clicked button, in button-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// Circle covering the button, centred on the click point.
    pub fn at(rect: (f64, f64, f64, f64), client: (f64, f64)) -> Self {
        let (rect_left, rect_top, width, height) = rect;
        let size = width.max(height);
        Self {
            size,
            left: client.0 - rect_left - size / 2.0,
            top: client.1 - rect_top - size / 2.0,
        }
    }

    fn style(&self) -> String {
        format!(
            "width: {0}px; height: {0}px; left: {1}px; top: {2}px; position: absolute; \
             border-radius: 50%; background: rgba(255, 255, 255, 0.6); transform: scale(0); \
             animation: ripple 0.6s linear; pointer-events: none;",
            self.size, self.left, self.top
        )
    }
}

fn spawn_ripple(button: &Element, client: (f64, f64), lifetime_ms: u32) -> Option<()> {
    let rect = button.get_bounding_client_rect();
    let ripple = Ripple::at((rect.left(), rect.top(), rect.width(), rect.height()), client);

    let document = web_sys::window()?.document()?;
    let span = document.create_element("span").ok()?.dyn_into::<HtmlElement>().ok()?;
    span.set_class_name("ripple");
    span.set_attribute("style", &ripple.style()).ok()?;
    button.append_child(&span).ok()?;

    spawn_local(async move {
        TimeoutFuture::new(lifetime_ms).await;
        span.remove();
    });
    Some(())
}

/// Ripple on every `.btn` click, delegated from the window.
pub fn use_ripple(lifetime_ms: u32) {
    let _ = window_event_listener(leptos::ev::click, move |ev| {
        let button = ev
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(BUTTON_SELECTOR).ok().flatten());
        if let Some(button) = button {
            spawn_ripple(&button, (ev.client_x() as f64, ev.client_y() as f64), lifetime_ms);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ripple_centred_on_click() {
        let ripple = Ripple::at((100.0, 50.0, 120.0, 40.0), (160.0, 70.0));
        assert_eq!(ripple.size, 120.0);
        assert_eq!(ripple.left, 0.0);
        assert_eq!(ripple.top, -40.0);
    }

    #[test]
    fn test_ripple_uses_larger_side() {
        let ripple = Ripple::at((0.0, 0.0, 30.0, 80.0), (15.0, 40.0));
        assert_eq!(ripple.size, 80.0);
        assert_eq!(ripple.left, -25.0);
        assert_eq!(ripple.top, 0.0);
    }
}

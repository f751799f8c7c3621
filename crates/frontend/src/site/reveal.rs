use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const REVEAL_SELECTOR: &str = ".reveal";
const SHOW_CLASS: &str = "show";
const THRESHOLD: f64 = 0.1;
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Entrance animation for a revealed element, by its classes.
///
/// The animation delay follows the same stagger as the reveal timer.
pub fn reveal_animation(class_name: &str, index: usize, stagger_ms: u32) -> Option<String> {
    let delay = index as u64 * stagger_ms as u64;
    let has = |class: &str| class_name.split_whitespace().any(|c| c == class);
    if has("category-card") {
        Some(format!("slideInLeft 0.6s ease-out {}ms both", delay))
    } else if has("card") {
        Some(format!("bounceIn 0.8s ease-out {}ms both", delay))
    } else {
        None
    }
}

fn show(element: &HtmlElement, index: usize, stagger_ms: u32) {
    let _ = element.class_list().add_1(SHOW_CLASS);
    if let Some(animation) = reveal_animation(&element.class_name(), index, stagger_ms) {
        let _ = element.style().set_property("animation", &animation);
    }
}

/// Reveal every `.reveal` element as it scrolls into view, staggered by
/// its position in the observer batch.
pub fn use_reveal(stagger_ms: u32) {
    Effect::new(move |_| {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            for (index, entry) in entries.iter().enumerate() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let Ok(element) = entry.target().dyn_into::<HtmlElement>() else {
                    continue;
                };
                spawn_local(async move {
                    TimeoutFuture::new(index as u32 * stagger_ms).await;
                    show(&element, index, stagger_ms);
                });
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(THRESHOLD));
        init.set_root_margin(ROOT_MARGIN);

        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(e) => {
                log::error!("IntersectionObserver unavailable: {:?}", e);
                return;
            }
        };
        callback.forget();

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(targets) = document.query_selector_all(REVEAL_SELECTOR) else {
            return;
        };
        for i in 0..targets.length() {
            if let Some(el) = targets.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
                observer.observe(&el);
            }
        }
        log::debug!("Observing {} reveal targets", targets.length());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_by_class() {
        assert_eq!(
            reveal_animation("category-card reveal", 2, 100).as_deref(),
            Some("slideInLeft 0.6s ease-out 200ms both")
        );
        assert_eq!(
            reveal_animation("card reveal", 0, 100).as_deref(),
            Some("bounceIn 0.8s ease-out 0ms both")
        );
        assert_eq!(reveal_animation("section-title reveal", 1, 100), None);
    }

    #[test]
    fn test_animation_delay_follows_stagger() {
        assert_eq!(
            reveal_animation("card reveal", 3, 250).as_deref(),
            Some("bounceIn 0.8s ease-out 750ms both")
        );
    }

    #[test]
    fn test_class_match_is_exact() {
        // "card-icon" is not a card.
        assert_eq!(reveal_animation("card-icon reveal", 0, 100), None);
    }
}

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::config::use_config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingPhase {
    #[default]
    Visible,
    Fading,
    Removed,
}

impl LoadingPhase {
    pub fn next(self) -> Self {
        match self {
            LoadingPhase::Visible => LoadingPhase::Fading,
            LoadingPhase::Fading | LoadingPhase::Removed => LoadingPhase::Removed,
        }
    }

    pub fn style(self) -> &'static str {
        match self {
            LoadingPhase::Visible => "",
            LoadingPhase::Fading | LoadingPhase::Removed => "opacity: 0;",
        }
    }
}

fn document_loaded() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .map(|d| d.ready_state() == "complete")
        .unwrap_or(true)
}

/// Full-screen splash shown until the page has loaded.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    let timing = use_config().timing;
    let (hold_ms, fade_ms) = (timing.loading_screen_ms, timing.loading_fade_ms);
    let phase = RwSignal::new(LoadingPhase::default());
    let started = StoredValue::new(false);

    let start = move || {
        if started.get_value() {
            return;
        }
        started.set_value(true);
        spawn_local(async move {
            TimeoutFuture::new(hold_ms).await;
            phase.try_update(|p| *p = p.next());
            TimeoutFuture::new(fade_ms).await;
            phase.try_update(|p| *p = p.next());
        });
    };

    Effect::new(move |_| {
        if document_loaded() {
            start();
        } else {
            let _ = window_event_listener(leptos::ev::load, move |_| start());
        }
    });

    view! {
        <Show when=move || phase.get() != LoadingPhase::Removed>
            <div class="loading-screen" style=move || phase.get().style()>
                <div class="loading-spinner"></div>
                <div class="loading-text">"Loading Amazing Experience..."</div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phases_advance_to_removed() {
        let phase = LoadingPhase::default();
        assert_eq!(phase, LoadingPhase::Visible);
        assert_eq!(phase.next(), LoadingPhase::Fading);
        assert_eq!(phase.next().next(), LoadingPhase::Removed);
        assert_eq!(phase.next().next().next(), LoadingPhase::Removed);
    }

    #[test]
    fn test_fade_style() {
        assert_eq!(LoadingPhase::Visible.style(), "");
        assert_eq!(LoadingPhase::Fading.style(), "opacity: 0;");
    }
}

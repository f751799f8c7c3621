use crate::shared::animation::counter_frames;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Summary figure whose number counts towards each new value.
///
/// A change while a previous animation is still running restarts from the
/// number currently shown.
#[component]
pub fn StatCard(
    /// Label displayed under the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Target value
    #[prop(into)]
    value: Signal<usize>,
    /// CSS modifier, e.g. `pending`
    #[prop(optional)]
    modifier: &'static str,
) -> impl IntoView {
    let timing = use_config().timing;
    let steps = timing.counter_steps;
    let frame_ms = timing.counter_frame_ms;

    let shown = RwSignal::new(0usize);
    let run = StoredValue::new(0u64);

    Effect::new(move |_| {
        let target = value.get();
        let frames = counter_frames(shown.get_untracked(), target, steps);
        run.update_value(|r| *r += 1);
        let this_run = run.get_value();

        spawn_local(async move {
            for frame in frames {
                TimeoutFuture::new(frame_ms).await;
                if run.try_get_value() != Some(this_run) {
                    return;
                }
                shown.set(frame);
            }
        });
    });

    let class = if modifier.is_empty() {
        "stat-card".to_string()
    } else {
        format!("stat-card stat-card--{}", modifier)
    };

    view! {
        <div class=class>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__value">{move || shown.get()}</div>
                <div class="stat-card__label">{label}</div>
            </div>
        </div>
    }
}

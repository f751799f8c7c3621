use leptos::prelude::*;

/// Dashboard title bar: heading, live date line and trailing actions.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    /// Current date and time, re-rendered whenever the signal ticks.
    #[prop(into)]
    clock: Signal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <header class="dashboard-header">
            <div class="dashboard-header__text">
                <h1>{title}</h1>
                <p class="dashboard-header__date" id="current-date">{move || clock.get()}</p>
            </div>
            <div class="dashboard-header__actions">{children()}</div>
        </header>
    }
}

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::domain::a001_order::ui::list::OrderList;
use crate::shared::components::page_header::PageHeader;
use crate::shared::config::use_config;
use crate::shared::date_utils::local_clock;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;

/// `/admin`: order dashboard for the shop owner.
#[component]
pub fn AdminPage() -> impl IntoView {
    let config = use_config();
    let clock_ms = config.timing.clock_interval_ms;
    let clock = RwSignal::new(local_clock());

    Effect::new(move |_| {
        Interval::new(clock_ms, move || clock.set(local_clock())).forget();
    });

    view! {
        <div class="admin-page">
            <PageHeader title="Order Dashboard" clock=clock>
                <ThemeToggle />
                <a class="logout-link" href=config.endpoints.logout.clone()>
                    {icon("logout")}
                    " Logout"
                </a>
            </PageHeader>
            <OrderList />
        </div>
    }
}

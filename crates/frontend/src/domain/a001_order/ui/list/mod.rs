pub mod card;
pub mod state;

use self::card::OrderCard;
use self::state::{ConsoleEffect, ConsoleEvent, ListView, OrderAction, OrderConsole};
use crate::domain::a001_order::api;
use crate::shared::browser;
use crate::shared::components::stat_card::StatCard;
use crate::shared::config::{use_config, Endpoints};
use contracts::domain::a001_order::Order;
use gloo_timers::callback::Interval;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const SKELETON_CARDS: usize = 5;

/// Dispatches console events and executes the effects they produce.
#[derive(Clone, Copy)]
struct ConsoleHandle {
    console: RwSignal<OrderConsole>,
    endpoints: StoredValue<Endpoints>,
}

impl ConsoleHandle {
    fn dispatch(&self, event: ConsoleEvent) {
        let effects = self
            .console
            .try_update(|c| c.handle(event))
            .unwrap_or_default();
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&self, effect: ConsoleEffect) {
        let handle = *self;
        let Some(endpoints) = self.endpoints.try_get_value() else {
            return;
        };
        match effect {
            ConsoleEffect::FetchOrders => {
                spawn_local(async move {
                    let result = api::fetch_orders(&endpoints).await;
                    if let Err(e) = &result {
                        log!("Failed to fetch orders: {}", e);
                    }
                    handle.dispatch(ConsoleEvent::FetchCompleted(result));
                });
            }
            ConsoleEffect::SendAction { action, position } => {
                spawn_local(async move {
                    let result = match action {
                        OrderAction::Complete => api::complete_order(&endpoints, position).await,
                        OrderAction::Delete => api::delete_order(&endpoints, position).await,
                    };
                    handle.dispatch(ConsoleEvent::ActionCompleted {
                        action,
                        position,
                        result,
                    });
                });
            }
            ConsoleEffect::ConfirmDelete { position, prompt } => {
                if browser::confirm(prompt) {
                    self.dispatch(ConsoleEvent::DeleteConfirmed { position });
                }
            }
            ConsoleEffect::Alert(message) => browser::alert(&message),
            ConsoleEffect::RedirectToLogin => browser::navigate(&endpoints.login),
        }
    }
}

/// Owned copy of the list view. Busy-state changes leave it equal, so the
/// cards are only rebuilt when the visible orders change.
#[derive(Clone, PartialEq)]
enum Rendered {
    Skeleton,
    Nothing,
    Failed(String),
    Message(&'static str),
    Cards(Vec<(usize, Order)>),
}

impl From<ListView<'_>> for Rendered {
    fn from(view: ListView<'_>) -> Self {
        match view {
            ListView::Loading => Rendered::Skeleton,
            ListView::Redirecting => Rendered::Nothing,
            ListView::Failed(msg) => Rendered::Failed(msg.to_string()),
            ListView::Empty => Rendered::Message("No orders found."),
            ListView::NoMatch => Rendered::Message("No orders match your search."),
            ListView::Cards(cards) => Rendered::Cards(
                cards
                    .into_iter()
                    .map(|(position, order)| (position, order.clone()))
                    .collect(),
            ),
        }
    }
}

/// Admin order console: summary counters, search and the order cards.
#[component]
pub fn OrderList() -> impl IntoView {
    let config = use_config();
    let refresh_ms = config.timing.refresh_interval_ms;
    let login_path = config.endpoints.login.clone();

    let console = RwSignal::new(OrderConsole::new());
    let handle = ConsoleHandle {
        console,
        endpoints: StoredValue::new(config.endpoints),
    };

    // Load on mount, then poll for the lifetime of the page.
    Effect::new(move |_| {
        handle.dispatch(ConsoleEvent::Refresh);
        Interval::new(refresh_ms, move || handle.dispatch(ConsoleEvent::Refresh)).forget();
    });

    let search = RwSignal::new(String::new());
    Effect::new(move |_| {
        let query = search.get();
        handle.dispatch(ConsoleEvent::QueryChanged(query));
    });

    let on_action = Callback::new(move |(action, position): (OrderAction, usize)| {
        handle.dispatch(ConsoleEvent::ActionClicked { action, position });
    });

    // Memos, so searching or a busy card does not restart the counters.
    let total = Memo::new(move |_| console.with(|c| c.summary().total));
    let pending = Memo::new(move |_| console.with(|c| c.summary().pending));
    let completed = Memo::new(move |_| console.with(|c| c.summary().completed));

    let rendered = Memo::new(move |_| console.with(|c| Rendered::from(c.view())));

    let list = move || {
        match rendered.get() {
            Rendered::Skeleton => (0..SKELETON_CARDS)
                .map(|_| view! { <div class="skeleton skeleton-card"></div> })
                .collect_view()
                .into_any(),
            Rendered::Nothing => view! { <></> }.into_any(),
            Rendered::Failed(detail) => view! {
                <div class="orders-error">
                    <p class="error">
                        "Failed to load orders. Please "
                        <a href=login_path.clone()>"login again"</a>
                        "."
                    </p>
                    <p class="orders-error__detail">{detail}</p>
                </div>
            }
            .into_any(),
            Rendered::Message(text) => view! { <p class="orders-empty">{text}</p> }.into_any(),
            Rendered::Cards(cards) => cards
                .into_iter()
                .enumerate()
                .map(|(rank, (position, order))| {
                    let busy = Signal::derive(move || console.with(|c| c.busy_action(position)));
                    view! {
                        <OrderCard
                            position=position
                            order=order
                            rank=rank
                            busy=busy
                            on_action=on_action
                        />
                    }
                })
                .collect_view()
                .into_any(),
        }
    };

    view! {
        <div class="order-console">
            <div class="summary-cards">
                <StatCard label="Total Orders" icon_name="orders" value=total />
                <StatCard label="Pending" icon_name="pending" value=pending modifier="pending" />
                <StatCard label="Completed" icon_name="completed" value=completed modifier="completed" />
            </div>

            <div class="order-console__toolbar">
                <Input
                    value=search
                    placeholder="Search by name or phone..."
                    attr:id="search-bar"
                />
            </div>

            <div id="orders-container" class="orders-container">
                {list}
            </div>
        </div>
    }
}

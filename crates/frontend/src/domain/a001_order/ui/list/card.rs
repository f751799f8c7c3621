use contracts::domain::a001_order::{display_name, FileKind, Order, OrderStatus};
use leptos::prelude::*;
use thaw::*;

use super::state::{OrderAction, NO_FILES_PLACEHOLDER};
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::config::{use_config, Endpoints};
use crate::shared::icons::icon;

fn file_item(endpoints: &Endpoints, stored: &str) -> impl IntoView {
    let kind = FileKind::classify(stored);
    let href = endpoints.stored_file_url(stored);
    let name = display_name(stored).to_string();

    view! {
        <li>
            <a href=href target="_blank" download="">
                {icon(kind.icon_name())}
                <div class="file-info">
                    <span class="file-name">{name}</span>
                    <span class="file-type">{kind.label()}</span>
                </div>
                <span class="download-icon">{icon("download")}</span>
            </a>
        </li>
    }
}

/// One order with its files and the complete/delete controls.
///
/// Expansion is local to the card and resets whenever the list is rebuilt.
#[component]
pub fn OrderCard(
    /// Position in the fetched list; the action key sent to the backend.
    position: usize,
    order: Order,
    /// Rank among the rendered cards, drives the entrance stagger.
    rank: usize,
    #[prop(into)] busy: Signal<Option<OrderAction>>,
    on_action: Callback<(OrderAction, usize)>,
) -> impl IntoView {
    let config = use_config();
    let delay_ms = rank as u32 * config.timing.reveal_stagger_ms;
    let expanded = RwSignal::new(false);

    let Order {
        name,
        phone,
        timestamp,
        status,
        files,
    } = order;
    let is_completed = status == OrderStatus::Completed;
    let files_title = format!("Files ({}):", files.len());

    let files_view = if files.is_empty() {
        view! { <p class="order-files__empty">{NO_FILES_PLACEHOLDER}</p> }.into_any()
    } else {
        view! {
            <ul class="order-files">
                {files.iter().map(|stored| file_item(&config.endpoints, stored)).collect_view()}
            </ul>
        }
        .into_any()
    };

    let badge_color = if is_completed { BadgeColor::Success } else { BadgeColor::Brand };

    let label_for = move |action: OrderAction| {
        if busy.get() == Some(action) {
            action.busy_label()
        } else {
            action.idle_label()
        }
    };

    view! {
        <CardAnimated class=format!("order-card {}", status.as_str()) delay_ms=delay_ms>
            <div class="order-card__body" class:expanded=move || expanded.get()>
                <div class="order-header" on:click=move |_| expanded.update(|e| *e = !*e)>
                    <div class="order-header-main">
                        <div class=format!("status-dot {}", status.as_str())></div>
                        <div>
                            <h3>{name}</h3>
                            <span class="order-timestamp">{timestamp}</span>
                        </div>
                    </div>
                    <Badge appearance=BadgeAppearance::Tint color=badge_color>
                        {status.display_name()}
                    </Badge>
                    <span class="expand-icon">{icon("chevron-down")}</span>
                </div>

                <div class="order-details">
                    <p><strong>"Phone: "</strong>{phone}</p>
                    <p><strong>{files_title}</strong></p>
                    {files_view}
                    <div class="order-actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            class="status-btn complete"
                            disabled=Signal::derive(move || is_completed || busy.get().is_some())
                            on_click=move |_| on_action.run((OrderAction::Complete, position))
                        >
                            {move || label_for(OrderAction::Complete)}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            class="delete-btn"
                            disabled=Signal::derive(move || busy.get().is_some())
                            on_click=move |_| on_action.run((OrderAction::Delete, position))
                        >
                            {move || label_for(OrderAction::Delete)}
                        </Button>
                    </div>
                </div>
            </div>
        </CardAnimated>
    }
}

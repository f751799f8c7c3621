use std::collections::HashMap;

use contracts::domain::a001_order::{filter_orders, Order, OrderSummary, SearchQuery};
use contracts::shared::ActionResponse;

use crate::shared::error::ApiError;

pub const CONFIRM_DELETE_PROMPT: &str = "Delete this order and files?";
/// Shown on cards of orders that carry no files.
pub const NO_FILES_PLACEHOLDER: &str = "No files uploaded";

/// Per-order commands offered on each card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderAction {
    Complete,
    Delete,
}

impl OrderAction {
    pub fn idle_label(&self) -> &'static str {
        match self {
            OrderAction::Complete => "✅ Mark Completed",
            OrderAction::Delete => "❌ Delete",
        }
    }

    pub fn busy_label(&self) -> &'static str {
        match self {
            OrderAction::Complete => "Updating...",
            OrderAction::Delete => "Deleting...",
        }
    }

    fn failure_prefix(&self) -> &'static str {
        match self {
            OrderAction::Complete => "Mark as complete failed",
            OrderAction::Delete => "Delete failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
    /// Session lost; the page is navigating to the login view.
    Redirecting,
}

/// Triggers handled by the console, in dispatch order.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleEvent {
    /// Page load or auto-refresh tick.
    Refresh,
    FetchCompleted(Result<Vec<Order>, ApiError>),
    QueryChanged(String),
    ActionClicked {
        action: OrderAction,
        position: usize,
    },
    DeleteConfirmed {
        position: usize,
    },
    ActionCompleted {
        action: OrderAction,
        position: usize,
        result: Result<ActionResponse, ApiError>,
    },
}

/// Side effects requested by the console; executed by the page component.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleEffect {
    FetchOrders,
    SendAction { action: OrderAction, position: usize },
    ConfirmDelete { position: usize, prompt: &'static str },
    Alert(String),
    RedirectToLogin,
}

/// What the order list area shows.
#[derive(Debug, PartialEq)]
pub enum ListView<'a> {
    Loading,
    Redirecting,
    Failed(&'a str),
    /// No orders exist at all.
    Empty,
    /// Orders exist, none matches the search.
    NoMatch,
    /// Matching orders with their position in the fetched list.
    Cards(Vec<(usize, &'a Order)>),
}

/// State of the admin order console.
///
/// Orders are addressed by their position in `all_orders`, the index space
/// the backend uses. A refresh that lands between rendering and an action
/// can shift positions; the backend offers no stable identifier.
#[derive(Debug, Clone)]
pub struct OrderConsole {
    all_orders: Vec<Order>,
    query: SearchQuery,
    load: LoadState,
    in_flight: HashMap<usize, OrderAction>,
    summary: OrderSummary,
}

impl Default for OrderConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderConsole {
    pub fn new() -> Self {
        Self {
            all_orders: Vec::new(),
            query: SearchQuery::default(),
            load: LoadState::Loading,
            in_flight: HashMap::new(),
            summary: OrderSummary::default(),
        }
    }

    pub fn all_orders(&self) -> &[Order] {
        &self.all_orders
    }

    pub fn summary(&self) -> OrderSummary {
        self.summary
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// Action currently running for the order at `position`.
    pub fn busy_action(&self, position: usize) -> Option<OrderAction> {
        self.in_flight.get(&position).copied()
    }

    pub fn view(&self) -> ListView<'_> {
        match &self.load {
            LoadState::Loading => ListView::Loading,
            LoadState::Redirecting => ListView::Redirecting,
            LoadState::Failed(msg) => ListView::Failed(msg),
            LoadState::Ready => {
                let visible = filter_orders(&self.all_orders, &self.query);
                if self.all_orders.is_empty() {
                    ListView::Empty
                } else if visible.is_empty() {
                    ListView::NoMatch
                } else {
                    ListView::Cards(visible)
                }
            }
        }
    }

    pub fn handle(&mut self, event: ConsoleEvent) -> Vec<ConsoleEffect> {
        match event {
            ConsoleEvent::Refresh => self.begin_fetch(),
            ConsoleEvent::FetchCompleted(result) => self.on_fetch_completed(result),
            ConsoleEvent::QueryChanged(raw) => {
                self.query = SearchQuery::new(&raw);
                Vec::new()
            }
            ConsoleEvent::ActionClicked { action, position } => self.on_action_clicked(action, position),
            ConsoleEvent::DeleteConfirmed { position } => self.start_action(OrderAction::Delete, position),
            ConsoleEvent::ActionCompleted {
                action,
                position,
                result,
            } => self.on_action_completed(action, position, result),
        }
    }

    fn begin_fetch(&mut self) -> Vec<ConsoleEffect> {
        if self.load != LoadState::Redirecting {
            self.load = LoadState::Loading;
        }
        vec![ConsoleEffect::FetchOrders]
    }

    fn on_fetch_completed(&mut self, result: Result<Vec<Order>, ApiError>) -> Vec<ConsoleEffect> {
        match result {
            Ok(orders) => {
                log::debug!("Fetched {} orders", orders.len());
                self.summary = OrderSummary::from_orders(&orders);
                self.all_orders = orders;
                self.in_flight.clear();
                if self.load != LoadState::Redirecting {
                    self.load = LoadState::Ready;
                }
                Vec::new()
            }
            Err(ApiError::Unauthenticated) => self.redirect_to_login(),
            Err(e) => {
                log::warn!("Failed to fetch orders: {}", e);
                self.in_flight.clear();
                if self.load != LoadState::Redirecting {
                    self.load = LoadState::Failed(e.to_string());
                }
                Vec::new()
            }
        }
    }

    fn on_action_clicked(&mut self, action: OrderAction, position: usize) -> Vec<ConsoleEffect> {
        let Some(order) = self.all_orders.get(position) else {
            return Vec::new();
        };
        if self.in_flight.contains_key(&position) {
            return Vec::new();
        }
        match action {
            OrderAction::Complete if order.is_completed() => Vec::new(),
            OrderAction::Complete => self.start_action(action, position),
            OrderAction::Delete => vec![ConsoleEffect::ConfirmDelete {
                position,
                prompt: CONFIRM_DELETE_PROMPT,
            }],
        }
    }

    fn start_action(&mut self, action: OrderAction, position: usize) -> Vec<ConsoleEffect> {
        if position >= self.all_orders.len() || self.in_flight.contains_key(&position) {
            return Vec::new();
        }
        self.in_flight.insert(position, action);
        vec![ConsoleEffect::SendAction { action, position }]
    }

    fn on_action_completed(
        &mut self,
        action: OrderAction,
        position: usize,
        result: Result<ActionResponse, ApiError>,
    ) -> Vec<ConsoleEffect> {
        match result {
            // The control stays busy until the refetched list replaces it.
            Ok(resp) if resp.success => self.begin_fetch(),
            Ok(resp) => {
                self.in_flight.remove(&position);
                vec![ConsoleEffect::Alert(format!(
                    "{}: {}",
                    action.failure_prefix(),
                    resp.message_or_default()
                ))]
            }
            Err(ApiError::Unauthenticated) => self.redirect_to_login(),
            Err(e) => {
                log::warn!("{:?} of order {} failed: {}", action, position, e);
                self.in_flight.remove(&position);
                vec![ConsoleEffect::Alert(format!("{}: {}", action.failure_prefix(), e))]
            }
        }
    }

    fn redirect_to_login(&mut self) -> Vec<ConsoleEffect> {
        self.load = LoadState::Redirecting;
        vec![ConsoleEffect::RedirectToLogin]
    }
}

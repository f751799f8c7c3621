pub mod aggregate;
pub mod search;
pub mod stored_file;
pub mod summary;

pub use aggregate::{parse_order_list, Order, OrderStatus};
pub use search::{filter_orders, SearchQuery};
pub use stored_file::{display_name, FileKind};
pub use summary::OrderSummary;

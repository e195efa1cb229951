//! Order handlers - the order-history profile view.

mod order_history;

pub use order_history::{OrderHistoryHandler, OrderHistoryQuery, OrderHistoryResult};

//! Cart handlers - staging items and reading the staged cart.

mod add_item;
mod get_cart;

pub use add_item::{AddItemCommand, AddItemHandler, AddItemResult};
pub use get_cart::{GetCartHandler, GetCartQuery, GetCartResult};

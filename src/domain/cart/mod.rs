//! Cart module - the staged, not-yet-committed set of line items.

mod aggregate;
mod errors;

pub use aggregate::{Cart, LineItem};
pub use errors::CartError;

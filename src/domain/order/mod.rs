//! Order module - checkout pricing and committed orders.
//!
//! Pricing is a pure domain service; an [`Order`] is the immutable snapshot
//! appended to the ledger when a checkout commits.

mod aggregate;
mod errors;
mod pricing;
mod values;

pub use aggregate::Order;
pub use errors::CheckoutError;
pub use pricing::Quote;
pub use values::{DeliveryAddress, PaymentMethod};

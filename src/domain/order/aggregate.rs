//! Order aggregate entity.
//!
//! An order is the immutable record appended to the ledger when a checkout
//! commits: the cart snapshot, the pricing results, and the delivery
//! metadata. Orders are never mutated or deleted.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::cart::{Cart, LineItem};
use crate::domain::foundation::{OrderId, Timestamp, Username};

use super::{DeliveryAddress, PaymentMethod, Quote};

/// Loyalty points divisor: one point per 100 spent on goods.
const POINTS_DIVISOR: Decimal = Decimal::ONE_HUNDRED;

/// Committed order.
///
/// # Invariants
///
/// - `id` is strictly increasing and unique across the ledger
/// - immutable once created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Sequential ledger id.
    id: OrderId,

    /// Account that placed the order.
    username: Username,

    /// Snapshot of the cart at commit time.
    items: Vec<LineItem>,

    /// Sum of line totals.
    subtotal: Decimal,

    /// Shipping charged.
    shipping: Decimal,

    /// Subtotal plus shipping.
    total: Decimal,

    /// Where to deliver.
    delivery_address: DeliveryAddress,

    /// How the order is paid.
    payment_method: PaymentMethod,

    /// When the order was committed.
    placed_at: Timestamp,
}

impl Order {
    /// Commits a priced cart into an immutable order record.
    pub fn commit(
        id: OrderId,
        username: Username,
        cart: Cart,
        quote: Quote,
        delivery_address: DeliveryAddress,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            id,
            username,
            items: cart.items().to_vec(),
            subtotal: quote.subtotal(),
            shipping: quote.shipping(),
            total: quote.total(),
            delivery_address,
            payment_method,
            placed_at: Timestamp::now(),
        }
    }

    /// Returns the ledger id.
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Returns the owning username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the line items snapshotted at commit.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the goods subtotal.
    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    /// Returns the shipping charged.
    pub fn shipping(&self) -> Decimal {
        self.shipping
    }

    /// Returns the order total.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Returns the delivery address.
    pub fn delivery_address(&self) -> &DeliveryAddress {
        &self.delivery_address
    }

    /// Returns the payment method.
    pub fn payment_method(&self) -> &PaymentMethod {
        &self.payment_method
    }

    /// Returns when the order was committed.
    pub fn placed_at(&self) -> &Timestamp {
        &self.placed_at
    }

    /// Loyalty points earned by this order.
    ///
    /// One point per 100 spent on goods (total minus shipping), rounded
    /// down. Shipping never earns points.
    pub fn points_earned(&self) -> u64 {
        ((self.total - self.shipping) / POINTS_DIVISOR)
            .floor()
            .to_u64()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ProductId;
    use crate::domain::membership::MembershipTier;

    fn staged_cart(entries: &[(u64, &str, u32)]) -> Cart {
        let mut cart = Cart::new();
        for (id, price, quantity) in entries {
            cart.add(
                LineItem::new(
                    ProductId::new(*id),
                    format!("Product {id}"),
                    price.parse().unwrap(),
                    *quantity,
                )
                .unwrap(),
            );
        }
        cart
    }

    fn commit(cart: Cart, tier: MembershipTier) -> Order {
        let quote = Quote::price(&cart, tier).unwrap();
        Order::commit(
            OrderId::new(1),
            Username::new("alice").unwrap(),
            cart,
            quote,
            DeliveryAddress::new("1 High Street").unwrap(),
            PaymentMethod::new("credit-card").unwrap(),
        )
    }

    #[test]
    fn commit_snapshots_pricing() {
        let order = commit(
            staged_cart(&[(1, "10.00", 2), (2, "5.00", 1)]),
            MembershipTier::Silver,
        );

        assert_eq!(order.subtotal(), "25.00".parse().unwrap());
        assert_eq!(order.shipping(), "2.25".parse().unwrap());
        assert_eq!(order.total(), "27.25".parse().unwrap());
        assert_eq!(order.items().len(), 2);
    }

    #[test]
    fn points_are_one_per_hundred_on_goods() {
        // total 127.25, shipping 2.25 -> goods 125.00 -> 1 point
        let order = commit(
            staged_cart(&[(1, "125.00", 1), (2, "0.00", 2)]),
            MembershipTier::Silver,
        );
        assert_eq!(order.total(), "127.25".parse().unwrap());
        assert_eq!(order.shipping(), "2.25".parse().unwrap());
        assert_eq!(order.points_earned(), 1);
    }

    #[test]
    fn small_orders_earn_no_points() {
        let order = commit(staged_cart(&[(1, "10.00", 2)]), MembershipTier::Bronze);
        assert_eq!(order.points_earned(), 0);
    }

    #[test]
    fn points_round_down() {
        let order = commit(staged_cart(&[(1, "199.99", 1)]), MembershipTier::Platinum);
        assert_eq!(order.points_earned(), 1);
    }

    #[test]
    fn order_roundtrips_through_json() {
        let order = commit(staged_cart(&[(1, "10.00", 1)]), MembershipTier::Gold);
        let json = serde_json::to_string(&order).unwrap();
        let loaded: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, order);
    }
}

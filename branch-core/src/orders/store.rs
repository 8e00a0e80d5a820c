//! OrderStore - Order lifecycle state and named mutations (订单存储)
//!
//! All writes funnel through a single transition routine:
//!
//! ```text
//! accept_order / reject_order / deliver_order / update_order_status
//!     └─ transition(id, to)
//!         ├─ 1. Find order by id (write lock held throughout)
//!         ├─ 2. Check the lifecycle table
//!         ├─ 3. Apply status; a rejection also refunds payment
//!         └─ 4. Return the updated order (clone)
//! ```
//!
//! A refused write returns an error, logs a warning, and leaves the list
//! exactly as it was. Readers get detached clones, never live references.

use parking_lot::RwLock;
use shared::order::{Order, OrderStatus, PaymentStatus};
use thiserror::Error;
use tracing::{info, warn};

/// Store errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Order not found: {0}")]
    NotFound(u64),

    #[error("Invalid transition: {} -> {}", .from.as_str(), .to.as_str())]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("Duplicate order: {0}")]
    DuplicateOrder(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// In-memory order store.
///
/// Orders are kept in insertion order; every query hands out clones so
/// callers never observe a half-applied write.
pub struct OrderStore {
    orders: RwLock<Vec<Order>>,
}

impl std::fmt::Debug for OrderStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderStore")
            .field("orders", &self.orders.read().len())
            .finish()
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(Vec::new()),
        }
    }

    /// Create a store pre-populated with `orders`.
    ///
    /// Fails on the first duplicate id or order number.
    pub fn with_orders(orders: Vec<Order>) -> StoreResult<Self> {
        let store = Self::new();
        for order in orders {
            store.add_order(order)?;
        }
        Ok(store)
    }

    /// Append a new order.
    ///
    /// Both the numeric id and the order number must be unused.
    pub fn add_order(&self, order: Order) -> StoreResult<()> {
        let mut orders = self.orders.write();
        if orders
            .iter()
            .any(|existing| existing.id == order.id || existing.order_id == order.order_id)
        {
            warn!(order = order.id, number = %order.order_id, "Add refused: duplicate order");
            return Err(StoreError::DuplicateOrder(order.order_id.clone()));
        }

        info!(order = order.id, number = %order.order_id, "Order added");
        orders.push(order);
        Ok(())
    }

    /// Accept a pending order.
    pub fn accept_order(&self, id: u64) -> StoreResult<Order> {
        self.transition(id, OrderStatus::Accepted)
    }

    /// Reject a pending order, refunding its payment.
    pub fn reject_order(&self, id: u64) -> StoreResult<Order> {
        self.transition(id, OrderStatus::Rejected)
    }

    /// Mark an accepted order delivered.
    pub fn deliver_order(&self, id: u64) -> StoreResult<Order> {
        self.transition(id, OrderStatus::Delivered)
    }

    /// Move an order to an arbitrary target state.
    ///
    /// Same rules as the named mutations; exists for callers that carry
    /// the target state as data.
    pub fn update_order_status(&self, id: u64, status: OrderStatus) -> StoreResult<Order> {
        self.transition(id, status)
    }

    /// The one place state actually changes.
    fn transition(&self, id: u64, to: OrderStatus) -> StoreResult<Order> {
        let mut orders = self.orders.write();
        let order = match orders.iter_mut().find(|order| order.id == id) {
            Some(order) => order,
            None => {
                warn!(order = id, to = to.as_str(), "Transition refused: order not found");
                return Err(StoreError::NotFound(id));
            }
        };

        let from = order.status;
        if !from.can_transition_to(to) {
            warn!(
                order = id,
                from = from.as_str(),
                to = to.as_str(),
                "Transition refused: not in lifecycle table"
            );
            return Err(StoreError::InvalidTransition { from, to });
        }

        order.status = to;
        // Rejection refunds in the same write, so no caller can observe
        // a rejected-but-paid order.
        if to == OrderStatus::Rejected {
            order.payment_status = PaymentStatus::Refunded;
        }

        info!(
            order = id,
            from = from.as_str(),
            to = to.as_str(),
            "Order transitioned"
        );
        Ok(order.clone())
    }

    /// Detached copy of the full order list, in insertion order.
    pub fn snapshot(&self) -> Vec<Order> {
        self.orders.read().clone()
    }

    /// Look up one order by id.
    pub fn get(&self, id: u64) -> Option<Order> {
        self.orders.read().iter().find(|order| order.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.orders.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::order::OrderItem;

    fn test_order(id: u64, status: OrderStatus) -> Order {
        Order {
            id,
            order_id: format!("ORD-{:03}", id),
            customer_name: format!("Customer {}", id),
            customer_phone: format!("+1555000{:04}", id),
            customer_address: "1 Test Lane".to_string(),
            items: vec![OrderItem {
                name: "Burger".to_string(),
                quantity: 1,
                price: 8.99,
            }],
            total: 8.99,
            status,
            payment_status: PaymentStatus::Paid,
            payment_method: "Cash".to_string(),
            branch: "Downtown Branch".to_string(),
            timestamp: 1_700_000_000_000 + id as i64,
            special_instructions: None,
            delivery_time: None,
        }
    }

    fn store_with(statuses: &[OrderStatus]) -> OrderStore {
        let orders = statuses
            .iter()
            .enumerate()
            .map(|(i, &status)| test_order(i as u64 + 1, status))
            .collect();
        OrderStore::with_orders(orders).unwrap()
    }

    // ========================================================================
    // Lifecycle mutations
    // ========================================================================

    #[test]
    fn test_accept_pending_order() {
        let store = store_with(&[OrderStatus::Pending]);

        let updated = store.accept_order(1).unwrap();
        assert_eq!(updated.status, OrderStatus::Accepted);
        // Payment untouched by acceptance.
        assert_eq!(updated.payment_status, PaymentStatus::Paid);
        assert_eq!(store.get(1).unwrap().status, OrderStatus::Accepted);
    }

    #[test]
    fn test_reject_refunds_payment() {
        let store = store_with(&[OrderStatus::Pending]);

        let updated = store.reject_order(1).unwrap();
        assert_eq!(updated.status, OrderStatus::Rejected);
        assert_eq!(updated.payment_status, PaymentStatus::Refunded);

        // The refund landed in the store itself, not just the returned copy.
        let stored = store.get(1).unwrap();
        assert_eq!(stored.payment_status, PaymentStatus::Refunded);
    }

    #[test]
    fn test_deliver_accepted_order() {
        let store = store_with(&[OrderStatus::Accepted]);

        let updated = store.deliver_order(1).unwrap();
        assert_eq!(updated.status, OrderStatus::Delivered);
        // Delivery does not touch payment.
        assert_eq!(updated.payment_status, PaymentStatus::Paid);
    }

    #[test]
    fn test_update_order_status_same_rules() {
        let store = store_with(&[OrderStatus::Pending, OrderStatus::Pending]);

        assert!(store.update_order_status(1, OrderStatus::Accepted).is_ok());
        assert_eq!(
            store.update_order_status(2, OrderStatus::Delivered),
            Err(StoreError::InvalidTransition {
                from: OrderStatus::Pending,
                to: OrderStatus::Delivered,
            })
        );
    }

    // ========================================================================
    // Refused writes leave state untouched
    // ========================================================================

    #[test]
    fn test_unknown_id_is_not_found() {
        let store = store_with(&[OrderStatus::Pending]);
        let before = store.snapshot();

        assert_eq!(store.accept_order(99), Err(StoreError::NotFound(99)));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_deliver_pending_refused() {
        let store = store_with(&[OrderStatus::Pending]);
        let before = store.snapshot();

        let err = store.deliver_order(1).unwrap_err();
        assert_eq!(
            err,
            StoreError::InvalidTransition {
                from: OrderStatus::Pending,
                to: OrderStatus::Delivered,
            }
        );
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_terminal_states_stay_terminal() {
        let store = store_with(&[OrderStatus::Delivered, OrderStatus::Rejected]);
        let before = store.snapshot();

        // Delivering twice changes nothing and reports the refusal.
        assert!(store.deliver_order(1).is_err());
        assert!(store.accept_order(1).is_err());
        assert!(store.accept_order(2).is_err());
        assert!(store.reject_order(2).is_err());
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_self_transition_refused() {
        let store = store_with(&[OrderStatus::Pending]);
        assert!(store.update_order_status(1, OrderStatus::Pending).is_err());
    }

    // ========================================================================
    // Insertion and snapshots
    // ========================================================================

    #[test]
    fn test_duplicate_add_refused() {
        let store = store_with(&[OrderStatus::Pending]);

        let dup_id = test_order(1, OrderStatus::Pending);
        assert_eq!(
            store.add_order(dup_id),
            Err(StoreError::DuplicateOrder("ORD-001".to_string()))
        );

        // Same order number under a fresh id is refused too.
        let mut dup_number = test_order(7, OrderStatus::Pending);
        dup_number.order_id = "ORD-001".to_string();
        assert!(store.add_order(dup_number).is_err());

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_with_orders_rejects_duplicates() {
        let orders = vec![
            test_order(1, OrderStatus::Pending),
            test_order(1, OrderStatus::Accepted),
        ];
        assert!(OrderStore::with_orders(orders).is_err());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = store_with(&[OrderStatus::Pending]);

        let mut snapshot = store.snapshot();
        snapshot[0].status = OrderStatus::Delivered;
        snapshot.clear();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(1).unwrap().status, OrderStatus::Pending);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let store = store_with(&[
            OrderStatus::Pending,
            OrderStatus::Accepted,
            OrderStatus::Delivered,
        ]);

        let ids: Vec<u64> = store.snapshot().iter().map(|order| order.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}

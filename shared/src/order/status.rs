//! Order lifecycle and payment states

use serde::{Deserialize, Serialize};

/// Lifecycle state of an order.
///
/// Every order moves through a fixed pipeline:
///
/// ```text
/// PENDING ──> ACCEPTED ──> DELIVERED
///    │
///    └──────> REJECTED
/// ```
///
/// `DELIVERED` and `REJECTED` are terminal. Any step outside the three
/// arrows above is invalid and must be refused.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Accepted,
    Delivered,
    Rejected,
}

impl OrderStatus {
    /// All states, in pipeline order.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Accepted,
        OrderStatus::Delivered,
        OrderStatus::Rejected,
    ];

    /// Whether `self -> to` is an allowed lifecycle step.
    pub fn can_transition_to(self, to: OrderStatus) -> bool {
        matches!(
            (self, to),
            (OrderStatus::Pending, OrderStatus::Accepted)
                | (OrderStatus::Pending, OrderStatus::Rejected)
                | (OrderStatus::Accepted, OrderStatus::Delivered)
        )
    }

    /// Check if no further transition is possible
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Rejected)
    }

    /// Stored name, matching the serialized representation.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Accepted => "ACCEPTED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Rejected => "REJECTED",
        }
    }

    /// Label shown in the dashboard UI.
    pub fn display_label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Accepted => "In Progress",
            OrderStatus::Delivered => "Completed",
            OrderStatus::Rejected => "Cancelled",
        }
    }
}

/// Payment state of an order.
///
/// Independent of the lifecycle except for one coupling: rejecting an
/// order always refunds it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Paid,
    #[default]
    Unpaid,
    Refunded,
}

impl PaymentStatus {
    /// Stored name, matching the serialized representation.
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Paid => "PAID",
            PaymentStatus::Unpaid => "UNPAID",
            PaymentStatus::Refunded => "REFUNDED",
        }
    }

    /// Label shown in the dashboard UI.
    pub fn display_label(self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Unpaid => "Unpaid",
            PaymentStatus::Refunded => "Refunded",
        }
    }
}

//! Order data model (订单数据模型)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{OrderStatus, PaymentStatus};

/// One line of an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    /// Menu item name
    pub name: String,
    /// Quantity ordered
    pub quantity: i32,
    /// Unit price
    pub price: f64,
}

impl OrderItem {
    /// Quantity times unit price, as an exact decimal.
    pub fn line_total(&self) -> Decimal {
        Decimal::try_from(self.price).unwrap_or_default() * Decimal::from(self.quantity)
    }
}

/// A customer order as tracked by the branch dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Internal numeric ID, unique within the store
    pub id: u64,
    /// Human-facing order number, e.g. "ORD-001"
    pub order_id: String,
    /// Customer name
    pub customer_name: String,
    /// Customer phone (also the customer identity key)
    pub customer_phone: String,
    /// Delivery address
    pub customer_address: String,
    /// Line items
    pub items: Vec<OrderItem>,
    /// Total charged; quoted by the ordering channel, not recomputed here
    pub total: f64,
    /// Lifecycle state
    #[serde(default)]
    pub status: OrderStatus,
    /// Payment state
    #[serde(default)]
    pub payment_status: PaymentStatus,
    /// Payment method label, e.g. "Credit Card"
    pub payment_method: String,
    /// Branch that took the order
    pub branch: String,
    /// Placement time (UTC millis)
    pub timestamp: i64,
    /// Free-form kitchen notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    /// Quoted delivery window, e.g. "30-40 mins"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<String>,
}

impl Order {
    /// Check if the order has been delivered
    pub fn is_delivered(&self) -> bool {
        self.status == OrderStatus::Delivered
    }

    /// Check if the order still needs attention (not yet terminal)
    pub fn is_open(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Sum of line items as an exact decimal.
    ///
    /// May differ from `total` when the ordering channel applied fees or
    /// discounts this model does not track.
    pub fn items_total(&self) -> Decimal {
        let mut sum = Decimal::ZERO;
        for item in &self.items {
            sum += item.line_total();
        }
        sum
    }

    /// Compact one-line item listing, e.g. "2x Burger; 1x Fries".
    pub fn item_summary(&self) -> String {
        self.items
            .iter()
            .map(|item| format!("{}x {}", item.quantity, item.name))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

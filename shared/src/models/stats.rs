//! Derived statistics payloads

use serde::{Deserialize, Serialize};

/// Order count per lifecycle state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub accepted: usize,
    pub delivered: usize,
    pub rejected: usize,
}

impl StatusCounts {
    /// Total orders across all states.
    pub fn total(&self) -> usize {
        self.pending + self.accepted + self.delivered + self.rejected
    }
}

/// Headline numbers for the dashboard cards.
///
/// Revenue counts delivered orders only; `pending_orders` counts
/// everything still open (pending or accepted).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    pub total_orders: usize,
    pub completed_orders: usize,
    pub pending_orders: usize,
    pub total_revenue: f64,
    pub avg_order_value: f64,
    pub unique_customers: usize,
}

/// One row of the top-selling items board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemSales {
    /// Menu item name
    pub name: String,
    /// Units sold across delivered orders
    pub quantity: i64,
    /// Revenue attributed to the item, rounded to cents
    pub revenue: f64,
    /// 1-based rank; items with equal quantity share a rank
    pub rank: usize,
}

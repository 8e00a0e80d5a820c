//! Filter and sort configuration for order list views

use serde::{Deserialize, Serialize};

use super::{OrderStatus, PaymentStatus};

/// Time window applied to the order timestamp, relative to an
/// evaluation instant supplied by the caller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeRange {
    #[default]
    All,
    /// Same UTC calendar day as the evaluation instant
    Today,
    /// The UTC calendar day before the evaluation instant
    Yesterday,
    /// Rolling window, last 7 days
    Week,
    /// Rolling window, last 30 days
    Month,
}

/// Sort key for order lists.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortBy {
    #[default]
    OrderDate,
    TotalAmount,
    CustomerName,
    Status,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortDir {
    Asc,
    #[default]
    Desc,
}

/// Filter and sort configuration for the order list view.
///
/// Filters are conjunctive; `None` means "no restriction". The default
/// configuration matches every order, newest first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FilterConfig {
    /// Case-insensitive search across order number and customer name,
    /// plus raw substring match on phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Restrict to one lifecycle state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    /// Restrict to one payment state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    /// Restrict to one payment method (exact match)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    /// Time window on the order timestamp
    #[serde(default)]
    pub time_range: TimeRange,
    /// Sort key
    #[serde(default)]
    pub sort_by: SortBy,
    /// Sort direction
    #[serde(default)]
    pub sort_dir: SortDir,
}

impl FilterConfig {
    /// Configuration that matches every order, newest first.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_payment(mut self, payment: PaymentStatus) -> Self {
        self.payment_status = Some(payment);
        self
    }

    pub fn with_payment_method(mut self, method: impl Into<String>) -> Self {
        self.payment_method = Some(method.into());
        self
    }

    pub fn in_range(mut self, range: TimeRange) -> Self {
        self.time_range = range;
        self
    }

    pub fn order_by(mut self, key: SortBy, dir: SortDir) -> Self {
        self.sort_by = key;
        self.sort_dir = dir;
        self
    }
}

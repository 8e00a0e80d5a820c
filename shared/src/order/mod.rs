//! Order Model Module
//!
//! This module provides the order types shared across the dashboard:
//! - Model: orders and their line items
//! - Status: lifecycle and payment state machines
//! - Filter: filter/sort configuration consumed by the view engine

pub mod filter;
pub mod model;
pub mod status;

// Re-exports
pub use filter::{FilterConfig, SortBy, SortDir, TimeRange};
pub use model::{Order, OrderItem};
pub use status::{OrderStatus, PaymentStatus};

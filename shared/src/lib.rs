//! Shared types for the branch dashboard
//!
//! Common types used across multiple crates including the order data
//! model, filter configuration, branch profile, and derived statistics.

pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Order re-exports (for convenient access)
pub use order::{FilterConfig, Order, OrderItem, OrderStatus, PaymentStatus, SortBy, SortDir, TimeRange};

// Model re-exports
pub use models::{BranchInfo, BranchInfoUpdate, DashboardStats, ItemSales, SessionUser, StatusCounts};

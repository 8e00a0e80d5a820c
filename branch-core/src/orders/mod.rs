//! Order domain: store, views, statistics, export
//!
//! # Data Flow
//!
//! ```text
//! OrderStore (single write path)
//!     └─ snapshot()
//!         ├─ view::filter_orders     -> order management list
//!         ├─ view::recent_orders     -> dashboard activity feed
//!         ├─ stats::*                -> headline cards, top sellers
//!         └─ export::orders_to_csv   -> downloads
//! ```
//!
//! Everything downstream of `snapshot()` is pure; only the store mutates.

pub mod export;
pub mod seed;
pub mod stats;
pub mod store;
pub mod view;

// Re-exports
pub use export::{CSV_HEADERS, orders_to_csv};
pub use seed::{demo_branch, demo_orders};
pub use stats::{
    average_order_value, count_by_status, dashboard_stats, dashboard_stats_at, top_items_by_sales,
    total_revenue, unique_customer_count,
};
pub use store::{OrderStore, StoreError, StoreResult};
pub use view::{filter_orders, filter_orders_at, recent_orders};

//! Data models
//!
//! Shared between the core services and the dashboard frontend.

pub mod branch_info;
pub mod session;
pub mod stats;

// Re-exports
pub use branch_info::*;
pub use session::*;
pub use stats::*;

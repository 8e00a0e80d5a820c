//! Application state (应用状态)

use std::sync::Arc;

use crate::auth::AuthService;
use crate::branch::BranchStore;
use crate::config::CoreConfig;
use crate::orders::{OrderStore, demo_branch, demo_orders};

/// Bundle of the dashboard's long-lived services.
///
/// Cheap to clone; every frontend-facing surface gets one of these.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: CoreConfig,
    pub orders: Arc<OrderStore>,
    pub branch: Arc<BranchStore>,
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(
        config: CoreConfig,
        orders: Arc<OrderStore>,
        branch: Arc<BranchStore>,
        auth: Arc<AuthService>,
    ) -> Self {
        Self {
            config,
            orders,
            branch,
            auth,
        }
    }

    /// Build the state, seeding demo data when configured.
    pub fn initialize(config: CoreConfig) -> Self {
        let orders = if config.seed_demo_data {
            // The demo set carries unique keys; its tests prove it.
            OrderStore::with_orders(demo_orders()).expect("Failed to seed demo orders")
        } else {
            OrderStore::new()
        };
        let branch = if config.seed_demo_data {
            BranchStore::with_info(demo_branch())
        } else {
            BranchStore::new()
        };
        let auth = AuthService::with_latency(config.login_latency());

        tracing::info!(
            orders = orders.len(),
            seeded = config.seed_demo_data,
            "AppState initialized"
        );

        Self::new(config, Arc::new(orders), Arc::new(branch), Arc::new(auth))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::initialize(CoreConfig::default())
    }
}

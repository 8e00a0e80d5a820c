/// Runtime configuration for the dashboard core
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Load the built-in demo orders and branch profile at startup
    pub seed_demo_data: bool,
    /// Simulated login round-trip in milliseconds
    pub login_latency_ms: u64,
}

impl CoreConfig {
    pub fn from_env() -> Self {
        Self {
            seed_demo_data: std::env::var("SEED_DEMO_DATA")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            login_latency_ms: std::env::var("LOGIN_LATENCY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1500),
        }
    }

    pub fn login_latency(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.login_latency_ms)
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            login_latency_ms: 1500,
        }
    }
}

//! Branch Core - 分店管理仪表盘核心
//!
//! State and derived-view engine behind the branch admin dashboard:
//!
//! - **订单** (`orders`): lifecycle store, filter/sort views, statistics,
//!   CSV export
//! - **分店** (`branch`): singleton branch profile with merge updates
//! - **登录** (`auth`): mock session service
//!
//! # 模块结构
//!
//! ```text
//! branch-core/src/
//! ├── config.rs      # 环境变量配置
//! ├── logging.rs     # tracing 初始化
//! ├── state.rs       # AppState 服务聚合
//! ├── auth/          # 模拟登录会话
//! ├── branch/        # 分店资料
//! └── orders/        # 订单存储、视图、统计、导出
//! ```

pub mod auth;
pub mod branch;
pub mod config;
pub mod logging;
pub mod orders;
pub mod state;

// Re-export 公共类型
pub use auth::{AuthError, AuthService, Session};
pub use branch::BranchStore;
pub use config::CoreConfig;
pub use orders::{OrderStore, StoreError, StoreResult};
pub use state::AppState;

// Re-export logger functions
pub use logging::{init_logger, init_logger_with_level};

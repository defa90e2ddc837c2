//! Seating Server - 活动座位管理服务
//!
//! # 架构概述
//!
//! - **座位账本** (`ledger`): 桌台容量、邀请名单、到场客人，单锁保证原子性
//! - **HTTP API** (`api`): RESTful 接口，只做请求/响应转换
//! - **路由** (`routes`): 路由汇总和 tower 中间件
//!
//! # 模块结构
//!
//! ```text
//! seating-server/src/
//! ├── core/          # 配置、状态、服务器、错误
//! ├── ledger/        # 座位账本
//! ├── api/           # HTTP 处理器
//! ├── routes/        # 路由和中间件
//! └── utils/         # 日志、校验
//! ```

pub mod api;
pub mod core;
pub mod ledger;
pub mod routes;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use ledger::{LedgerError, LedgerResult, LedgerStats, SeatingLedger};
pub use routes::{build_app, build_router};
pub use utils::{AppError, AppResult, ErrorBody, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境: 加载 `.env`、读取配置、初始化日志
pub fn setup_environment() -> crate::core::Result<Config> {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json),
        config.log_dir.as_deref(),
    )?;
    api::health::mark_started();
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
   _____            __  _
  / ___/___  ____ _/ /_(_)___  ____ _
  \__ \/ _ \/ __ `/ __/ / __ \/ __ `/
 ___/ /  __/ /_/ / /_/ / / / / /_/ /
/____/\___/\__,_/\__/_/_/ /_/\__, /
                            /____/
    "#
    );
}

//! 服务骨架: 配置 → 状态 → HTTP 服务
//!
//! `main` 依次调用 [`Config::from_env`]、[`ServerState::initialize`]、
//! [`Server::run`]；启动失败统一返回 [`ServerError`]。

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;

//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`tables`] - 桌台管理接口
//! - [`guest_list`] - 邀请名单接口
//! - [`guests`] - 到场/离场接口
//! - [`seats`] - 空位统计接口
//! - [`extract`] - JSON 请求体提取器

pub mod extract;

pub mod health;

pub mod guest_list;
pub mod guests;
pub mod seats;
pub mod tables;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

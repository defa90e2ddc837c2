//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型 (from shared::error)
//! - [`logger`] - 日志初始化
//! - [`validation`] - 请求参数校验

pub mod logger;
pub mod validation;

// Re-export unified error types from shared
pub use shared::error::{AppError, AppResult, ErrorBody, ErrorCategory, ErrorCode};

//! 请求提取器
//!
//! 包装 `axum::Json` 和 `axum::extract::Path`，把解析失败统一转成 [`AppError`]：
//! - 缺少/错误的 `Content-Type` → 415
//! - 语法错误、字段缺失、未知字段 → 400
//! - 路径参数无法解析 (如 `/tables/abc`) → 400

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::utils::AppError;

/// JSON 请求体
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::MissingJsonContentType(e)) => {
                Err(AppError::unsupported_media_type(e.body_text()))
            }
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Rejected request body");
                Err(AppError::invalid_request(rejection.body_text()))
            }
        }
    }
}

/// 路径参数
pub struct PathParam<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Rejected path parameter");
                Err(AppError::invalid_request(rejection.body_text()))
            }
        }
    }
}

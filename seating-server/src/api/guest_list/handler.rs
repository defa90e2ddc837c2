//! Guest List API Handlers

use axum::{
    Json,
    extract::State,
};
use shared::models::{GuestListAdd, GuestListResponse, GuestName};

use crate::api::extract::{JsonBody, PathParam};
use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::validate_guest_name;

/// POST /guest_list/{name} - 加入邀请名单 (桌台不存在则创建，座位不足则扩容)
pub async fn add(
    State(state): State<ServerState>,
    PathParam(name): PathParam<String>,
    JsonBody(payload): JsonBody<GuestListAdd>,
) -> AppResult<Json<GuestName>> {
    validate_guest_name(&name)?;
    let (entry, table) =
        state
            .ledger
            .reserve_guest(&name, payload.table, payload.accompanying_guests)?;

    tracing::debug!(
        guest = %entry.name,
        table_id = table.id,
        capacity = table.capacity,
        "Guest listed"
    );
    Ok(Json(GuestName { name: entry.name }))
}

/// GET /guest_list - 获取邀请名单
pub async fn list(State(state): State<ServerState>) -> Json<GuestListResponse> {
    Json(GuestListResponse {
        guests: state.ledger.list_guest_list_entries(),
    })
}

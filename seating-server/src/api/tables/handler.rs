//! Table API Handlers

use axum::{
    Json,
    extract::State,
};
use shared::models::{Table, TableCreate, TableUpdate};

use crate::api::extract::{JsonBody, PathParam};
use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /tables - 获取所有桌台
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Table>> {
    Json(state.ledger.list_tables())
}

/// GET /tables/{id} - 获取单个桌台
pub async fn get_by_id(
    State(state): State<ServerState>,
    PathParam(id): PathParam<i64>,
) -> AppResult<Json<Table>> {
    let table = state.ledger.get_table(id)?;
    Ok(Json(table))
}

/// POST /tables - 创建桌台 (同 id 覆盖容量，保留已入座人数)
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<TableCreate>,
) -> AppResult<Json<Table>> {
    let table = state.ledger.create_table(payload.id, payload.capacity)?;
    Ok(Json(table))
}

/// PUT /tables/{id} - 修改桌台容量
pub async fn update(
    State(state): State<ServerState>,
    PathParam(id): PathParam<i64>,
    JsonBody(payload): JsonBody<TableUpdate>,
) -> AppResult<Json<Table>> {
    let table = state.ledger.update_table_capacity(id, payload.capacity)?;
    Ok(Json(table))
}

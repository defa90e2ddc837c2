//! Arrived Guest API Handlers

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use shared::models::{ArrivedGuest, ArrivedGuestsResponse, GuestArrival, GuestName};

use crate::api::extract::{JsonBody, PathParam};
use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::validate_guest_name;

/// PUT /guests/{name} - 客人到场入座
pub async fn arrive(
    State(state): State<ServerState>,
    PathParam(name): PathParam<String>,
    JsonBody(payload): JsonBody<GuestArrival>,
) -> AppResult<Json<GuestName>> {
    validate_guest_name(&name)?;
    let guest = state
        .ledger
        .seat_arriving_guest(&name, payload.accompanying_guests)?;
    Ok(Json(GuestName { name: guest.name }))
}

/// DELETE /guests/{name} - 客人离场，释放座位
pub async fn leave(
    State(state): State<ServerState>,
    PathParam(name): PathParam<String>,
) -> AppResult<StatusCode> {
    state.ledger.remove_guest(&name)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /guests - 获取所有已入座客人
pub async fn list(State(state): State<ServerState>) -> Json<ArrivedGuestsResponse> {
    Json(ArrivedGuestsResponse {
        guests: state.ledger.list_arrived_guests(),
    })
}

/// GET /guests/{name} - 获取单个已入座客人
pub async fn get_by_name(
    State(state): State<ServerState>,
    PathParam(name): PathParam<String>,
) -> AppResult<Json<ArrivedGuest>> {
    let guest = state.ledger.get_guest(&name)?;
    Ok(Json(guest))
}

//! Empty Seats API

use axum::{Json, Router, extract::State, routing::get};
use shared::models::EmptySeatsResponse;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/seats_empty", get(empty))
}

/// GET /seats_empty - 所有桌台剩余空位总数
pub async fn empty(State(state): State<ServerState>) -> Json<EmptySeatsResponse> {
    Json(EmptySeatsResponse {
        seats_empty: state.ledger.total_empty_seats(),
    })
}

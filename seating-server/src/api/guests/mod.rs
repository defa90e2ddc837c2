//! Arrived Guest API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/guests", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::list)).route(
        "/{name}",
        get(handler::get_by_name)
            .put(handler::arrive)
            .delete(handler::leave),
    )
}

//! Cupcake API routes, mounted under `/api`.

use crate::handlers::cupcake::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/cupcakes", get(list).post(create))
        .route(
            "/cupcakes/:id",
            get(read).patch(update).delete(delete_handler),
        )
        .with_state(state)
}

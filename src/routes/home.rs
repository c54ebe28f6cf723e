//! Homepage routes.

use crate::handlers::home::{index, script};
use axum::{routing::get, Router};

pub fn home_routes() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/static/cupcakes.js", get(script))
}

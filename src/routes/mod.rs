//! Router assembly.

pub mod common;
pub mod cupcake;
pub mod home;

pub use common::common_routes;
pub use cupcake::api_routes;
pub use home::home_routes;

use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Full application: homepage, `/api` cupcake routes and common routes, with request
/// tracing. JSON bodies over `body_limit` bytes are rejected with 413.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(home_routes())
        .merge(common_routes(state.clone()))
        .nest("/api", api_routes(state))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
}

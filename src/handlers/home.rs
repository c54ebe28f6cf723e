//! Homepage and its script. Both are compiled into the binary.

use axum::http::header;
use axum::response::{Html, IntoResponse};

const INDEX_HTML: &str = include_str!("../../templates/index.html");
const CUPCAKES_JS: &str = include_str!("../../static/cupcakes.js");

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /static/cupcakes.js
pub async fn script() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/javascript; charset=utf-8")], CUPCAKES_JS)
}

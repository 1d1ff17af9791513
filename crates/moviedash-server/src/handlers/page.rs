//! Embedded HTML dashboard.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Serve the single-page dashboard.
#[utoipa::path(
    get,
    path = "/",
    tag = "page",
    responses(
        (status = 200, description = "Dashboard page", body = String, content_type = "text/html")
    )
)]
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

use axum::response::Html;

/// Serve the single-page analyzer UI.
pub async fn home_handler() -> Html<&'static str> {
    Html(include_str!("../../../static/index.html"))
}

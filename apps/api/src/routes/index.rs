use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../templates/index.html");

/// GET /
/// Upload form that posts to `/predict` and shows the JSON it gets back.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

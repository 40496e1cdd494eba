use axum::response::Html;

pub const WELCOME_PAGE: &str = "<h1>Welcome to Mikrotik Bandwidth-Monitor data exporter.</h1>\
Metrics are available: <a href='/metrics'>here</a>.";

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(WELCOME_PAGE)
}

use axum::http::StatusCode;
use axum::response::IntoResponse;

pub async fn page_not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "No such endpoint, try /location, /weather, /movies, /yelp, /meetups or /trails")
}

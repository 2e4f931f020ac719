use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::extract::Query;
use axum::response::IntoResponse;
use axum::routing::get;
use tracing::warn;
use crate::controller::{AppState, CoordinatesQuery};
use crate::providers::ProviderClient;

pub fn router(app_state: AppState) -> Router {
    let provider_client = Arc::new(ProviderClient::new(
        app_state.http_client,
        app_state.config,
    ));

    Router::new()
        .route("/meetups", get(get_upcoming_meetups))
        .route_layer(Extension(provider_client))
}

pub async fn get_upcoming_meetups(
    Extension(provider_client): Extension<Arc<ProviderClient>>,
    Query(query): Query<CoordinatesQuery>,
) -> impl IntoResponse {
    let meetups_res = provider_client
        .upcoming_meetups(
            query.latitude,
            query.longitude,
        ).await;

    return match meetups_res {
        Ok(meetups) => Json(meetups).into_response(),
        Err(e) => {
            warn!("Something went wrong retrieving upcoming meetups due to: {:#}", e);
            e.into_response()
        }
    };
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use crate::controller::test_support::{get, test_app};
    use crate::helpers::error::FAILURE_MESSAGE;

    #[tokio::test]
    async fn maps_events_with_group_host() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/find/upcoming_events"))
            .and(query_param("lat", "47.6"))
            .and(query_param("lon", "-122.3"))
            .and(query_param("key", "meetups-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "city": { "city": "Seattle" },
                "events": [{
                    "link": "https://www.meetup.com/seattle-rust/events/1/",
                    "name": "Rust Hack Night",
                    "created": 1541523600000i64,
                    "group": { "name": "Seattle Rust Meetup" }
                }]
            })))
            .mount(&mock_server)
            .await;

        let (status, _, body) = get(
            test_app(&mock_server.uri()),
            "/meetups?data%5Blatitude%5D=47.6&data%5Blongitude%5D=-122.3",
        ).await;

        assert_eq!(status, StatusCode::OK);
        let meetups: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(meetups, json!([{
            "link": "https://www.meetup.com/seattle-rust/events/1/",
            "name": "Rust Hack Night",
            "host": "Seattle Rust Meetup",
            "creation_date": "Tue Nov 06 2018"
        }]));
    }

    #[tokio::test]
    async fn event_missing_group_is_500() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "events": [{ "link": "l", "name": "n", "created": 0 }]
            })))
            .mount(&mock_server)
            .await;

        let (status, _, body) = get(
            test_app(&mock_server.uri()),
            "/meetups?data%5Blatitude%5D=47.6&data%5Blongitude%5D=-122.3",
        ).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(&body[..], FAILURE_MESSAGE.as_bytes());
    }

    #[tokio::test]
    async fn upstream_server_error_is_generic_500() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/find/upcoming_events"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .mount(&mock_server)
            .await;

        let (status, _, body) = get(
            test_app(&mock_server.uri()),
            "/meetups?data%5Blatitude%5D=47.6&data%5Blongitude%5D=-122.3",
        ).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(&body[..], FAILURE_MESSAGE.as_bytes());
    }
}

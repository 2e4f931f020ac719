use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::extract::Query;
use axum::response::IntoResponse;
use axum::routing::get;
use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::controller::AppState;
use crate::providers::ProviderClient;

pub fn router(app_state: AppState) -> Router {
    let provider_client = Arc::new(ProviderClient::new(
        app_state.http_client,
        app_state.config,
    ));

    Router::new()
        .route("/location", get(search_to_lat_long))
        .route_layer(Extension(provider_client))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct LocationSearchParam {
    pub data: String,
}

/// Geocodes a free-text address. Answers with a single object, not an array.
pub async fn search_to_lat_long(
    Extension(provider_client): Extension<Arc<ProviderClient>>,
    Query(query): Query<LocationSearchParam>,
) -> impl IntoResponse {
    let location_res = provider_client
        .geocode(
            &query.data
        ).await;

    return match location_res {
        Ok(location) => Json(location).into_response(),
        Err(e) => {
            warn!("Something went wrong geocoding {:?} due to: {:#}", query.data, e);
            e.into_response()
        }
    };
}

use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::extract::Query;
use axum::response::IntoResponse;
use axum::routing::get;
use tracing::{debug, warn};
use crate::controller::{AppState, CoordinatesQuery};
use crate::providers::ProviderClient;

pub fn router(app_state: AppState) -> Router {
    let provider_client = Arc::new(ProviderClient::new(
        app_state.http_client,
        app_state.config,
    ));

    Router::new()
        .route("/trails", get(get_nearby_trails))
        .route_layer(Extension(provider_client))
}

pub async fn get_nearby_trails(
    Extension(provider_client): Extension<Arc<ProviderClient>>,
    Query(query): Query<CoordinatesQuery>,
) -> impl IntoResponse {
    let trails_res = provider_client
        .nearby_trails(
            query.latitude,
            query.longitude,
        ).await;

    return match trails_res {
        Ok(trails) => {
            debug!("Constructed {} trails", trails.len());
            Json(trails).into_response()
        }
        Err(e) => {
            warn!("Something went wrong retrieving nearby trails due to: {:#}", e);
            e.into_response()
        }
    };
}

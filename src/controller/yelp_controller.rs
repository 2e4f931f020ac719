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
        .route("/yelp", get(search_businesses))
        .route_layer(Extension(provider_client))
}

pub async fn search_businesses(
    Extension(provider_client): Extension<Arc<ProviderClient>>,
    Query(query): Query<CoordinatesQuery>,
) -> impl IntoResponse {
    let businesses_res = provider_client
        .search_businesses(
            query.latitude,
            query.longitude,
        ).await;

    return match businesses_res {
        Ok(businesses) => Json(businesses).into_response(),
        Err(e) => {
            warn!("Something went wrong searching nearby businesses due to: {:#}", e);
            e.into_response()
        }
    };
}

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
        .route("/weather", get(get_weather))
        .route_layer(Extension(provider_client))
}

pub async fn get_weather(
    Extension(provider_client): Extension<Arc<ProviderClient>>,
    Query(query): Query<CoordinatesQuery>,
) -> impl IntoResponse {
    let forecast_res = provider_client
        .daily_forecast(
            query.latitude,
            query.longitude,
        ).await;

    return match forecast_res {
        Ok(days) => Json(days).into_response(),
        Err(e) => {
            warn!("Something went wrong retrieving the weather forecast due to: {:#}", e);
            e.into_response()
        }
    };
}

use std::sync::Arc;
use std::time::Duration;
use anyhow::Context;
use axum::Router;
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::info;
use crate::config::Config;
use crate::helpers::handler_404::page_not_found_handler;

pub mod location_controller;
pub mod meetups_controller;
pub mod movies_controller;
pub mod trails_controller;
pub mod weather_controller;
pub mod yelp_controller;

/// Shared by every router. Both fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub http_client: reqwest::Client,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Error building the outbound HTTP client")?;

        Ok(Self {
            http_client,
            config: Arc::new(config),
        })
    }
}

/// `data[latitude]` / `data[longitude]` query pair shared by the coordinate routes.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct CoordinatesQuery {
    #[serde(rename = "data[latitude]")]
    pub latitude: f64,
    #[serde(rename = "data[longitude]")]
    pub longitude: f64,
}

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let addr = config.listen_addr();
    let application = application(AppState::new(config)?);

    info!("Listening on {}", addr);
    axum::Server::bind(&addr)
        .serve(application.into_make_service())
        .await
        .context("Error spinning up the API server")
}

/// All routes plus the 404 fallback, wrapped in a permissive CORS layer.
pub fn application(app_state: AppState) -> Router {
    router_endpoints(app_state)
        .fallback(page_not_found_handler)
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
        )
}

pub fn router_endpoints(app_state: AppState) -> Router {
    Router::new()
        .merge(location_controller::router(app_state.clone()))
        .merge(weather_controller::router(app_state.clone()))
        .merge(movies_controller::router(app_state.clone()))
        .merge(yelp_controller::router(app_state.clone()))
        .merge(meetups_controller::router(app_state.clone()))
        .merge(trails_controller::router(app_state))
}

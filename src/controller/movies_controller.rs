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
        .route("/movies", get(search_movies))
        .route_layer(Extension(provider_client))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct MovieSearchParam {
    #[serde(rename = "data[search_query]")]
    pub search_query: String,
}

pub async fn search_movies(
    Extension(provider_client): Extension<Arc<ProviderClient>>,
    Query(query): Query<MovieSearchParam>,
) -> impl IntoResponse {
    let movies_res = provider_client
        .search_movies(
            &query.search_query
        ).await;

    return match movies_res {
        Ok(movies) => Json(movies).into_response(),
        Err(e) => {
            warn!("Something went wrong searching movies for {:?} due to: {:#}", query.search_query, e);
            e.into_response()
        }
    };
}

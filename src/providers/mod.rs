use std::sync::Arc;
use anyhow::{anyhow, Context};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;
use crate::config::Config;
use crate::helpers::error::ApiError;
use crate::models::business::{BusinessListing, BusinessSearchResponse};
use crate::models::location::{GeocodeResponse, Location};
use crate::models::meetup::{Meetup, UpcomingEventsResponse};
use crate::models::movie::{Movie, MovieSearchResponse};
use crate::models::trail::{Trail, TrailSearchResponse};
use crate::models::weather::{ForecastResponse, WeatherDay};
use crate::models::Envelope;

const MAX_ERROR_BODY: usize = 200;
const TRAIL_SEARCH_RADIUS_MILES: &str = "10";

/// Outbound side of every route: holds the shared HTTP client and the provider credentials.
pub struct ProviderClient {
    http_client: Client,
    config: Arc<Config>,
}

impl ProviderClient {
    pub fn new(
        http_client: Client,
        config: Arc<Config>,
    ) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Sends `request`, decodes the body as `E` and maps each item of its collection into `T`.
    /// A single item that fails to map fails the whole call.
    pub async fn relay<E, T>(
        &self,
        request: RequestBuilder,
    ) -> anyhow::Result<Vec<T>>
    where
        E: DeserializeOwned + Envelope,
        T: TryFrom<E::Item, Error = anyhow::Error>,
    {
        let envelope: E = self.fetch(request).await?;
        let records = envelope
            .into_items()
            .into_iter()
            .map(T::try_from)
            .collect::<anyhow::Result<Vec<T>>>()
            .context("Failed to map provider records")?;

        debug!("Mapped {} provider records", records.len());
        Ok(records)
    }

    async fn fetch<E: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> anyhow::Result<E> {
        let res = request
            .send()
            .await
            .map_err(|e| e.without_url())
            .context("Failed to send request to provider")?;

        // the path can carry a credential, so only the host is reported
        let provider_host = res.url().host_str().unwrap_or("provider").to_string();
        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| e.without_url())
            .context("Failed to read provider response body")?;
        debug!("{} answered {}", provider_host, status);

        if !status.is_success() {
            return Err(anyhow!(
                "Provider request to {} failed with status {}: {}",
                provider_host,
                status,
                truncate_body(&body),
            ));
        }

        serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse provider response from {}", provider_host))
    }

    pub async fn geocode(
        &self,
        address: &str,
    ) -> Result<Location, ApiError> {
        let key = credential(&self.config.geocode_api_key, "GEOCODE_API_KEY")?;
        let request = self
            .http_client
            .get(format!("{}/maps/api/geocode/json", self.config.geocode_base_url))
            .query(&[("address", address), ("key", key)]);

        let response: GeocodeResponse = self.fetch(request).await?;
        let first = response
            .into_items()
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::NoResults(address.to_string()))?;

        Ok(Location::new(address, first))
    }

    pub async fn daily_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<WeatherDay>, ApiError> {
        let key = credential(&self.config.weather_api_key, "WEATHER_API_KEY")?;
        let request = self.http_client.get(format!(
            "{}/forecast/{}/{},{}",
            self.config.weather_base_url, key, latitude, longitude,
        ));

        Ok(self.relay::<ForecastResponse, WeatherDay>(request).await?)
    }

    pub async fn search_movies(
        &self,
        search_query: &str,
    ) -> Result<Vec<Movie>, ApiError> {
        let key = credential(&self.config.themoviedb_api_key, "THEMOVIEDB_API_KEY")?;
        let request = self
            .http_client
            .get(format!("{}/3/search/movie", self.config.themoviedb_base_url))
            .query(&[("api_key", key), ("language", "en-US"), ("query", search_query)]);

        Ok(self.relay::<MovieSearchResponse, Movie>(request).await?)
    }

    pub async fn search_businesses(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<BusinessListing>, ApiError> {
        let key = credential(&self.config.yelp_api_key, "YELP_API_KEY")?;
        let request = self
            .http_client
            .get(format!("{}/v3/businesses/search", self.config.yelp_base_url))
            .query(&[("latitude", latitude), ("longitude", longitude)])
            .bearer_auth(key);

        Ok(self.relay::<BusinessSearchResponse, BusinessListing>(request).await?)
    }

    pub async fn upcoming_meetups(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<Meetup>, ApiError> {
        let key = credential(&self.config.meetups_api_key, "MEETUPS_API_KEY")?;
        let request = self
            .http_client
            .get(format!("{}/find/upcoming_events", self.config.meetups_base_url))
            .query(&[("lon", longitude), ("lat", latitude)])
            .query(&[("key", key)]);

        Ok(self.relay::<UpcomingEventsResponse, Meetup>(request).await?)
    }

    pub async fn nearby_trails(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<Trail>, ApiError> {
        let key = credential(&self.config.hiking_api_key, "HIKING_API_KEY")?;
        let request = self
            .http_client
            .get(format!("{}/data/get-trails", self.config.hiking_base_url))
            .query(&[("lat", latitude)])
            .query(&[("key", key), ("maxDistance", TRAIL_SEARCH_RADIUS_MILES)])
            .query(&[("lon", longitude)]);

        Ok(self.relay::<TrailSearchResponse, Trail>(request).await?)
    }
}

fn credential<'a>(
    value: &'a Option<String>,
    env_name: &'static str,
) -> Result<&'a str, ApiError> {
    value
        .as_deref()
        .ok_or(ApiError::MissingCredential(env_name))
}

fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider_client(base_url: &str) -> ProviderClient {
        ProviderClient::new(Client::new(), Arc::new(Config::with_base_url(base_url)))
    }

    #[test]
    fn truncates_long_bodies_on_char_boundaries() {
        let short = "upstream down";
        assert_eq!(truncate_body(short), short);

        let long = "é".repeat(MAX_ERROR_BODY + 10);
        let truncated = truncate_body(&long);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), MAX_ERROR_BODY + 3);
    }

    #[tokio::test]
    async fn missing_credential_fails_before_any_request() {
        let mock_server = MockServer::start().await;
        let mut config = Config::with_base_url(&mock_server.uri());
        config.hiking_api_key = None;
        let client = ProviderClient::new(Client::new(), Arc::new(config));

        let err = client.nearby_trails(47.6, -122.3).await.unwrap_err();

        assert!(matches!(err, ApiError::MissingCredential("HIKING_API_KEY")));
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn relay_reports_upstream_status() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/search/movie"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
            .mount(&mock_server)
            .await;

        let err = provider_client(&mock_server.uri())
            .search_movies("seattle")
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("401"), "{}", message);
        assert!(message.contains("Invalid API key"), "{}", message);
    }

    #[tokio::test]
    async fn relay_fails_whole_batch_on_one_bad_record() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/get-trails"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "trails": [
                    {
                        "url": "u", "name": "good", "location": "l", "length": 1.0,
                        "conditionDate": "2018-07-21 00:37:00", "conditionStatus": "All Clear",
                        "stars": 4.0, "starVotes": 2, "summary": "s"
                    },
                    {
                        "url": "u", "name": "bad", "location": "l", "length": 1.0,
                        "conditionDate": "yesterday", "conditionStatus": "Muddy",
                        "stars": 4.0, "starVotes": 2, "summary": "s"
                    }
                ]
            })))
            .mount(&mock_server)
            .await;

        let res = provider_client(&mock_server.uri()).nearby_trails(47.6, -122.3).await;
        assert!(matches!(res, Err(ApiError::Upstream(_))));
    }

    #[tokio::test]
    async fn geocode_encodes_free_text_address() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/maps/api/geocode/json"))
            .and(query_param("address", "1600 Amphitheatre Pkwy & Co"))
            .and(query_param("key", "geocode-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{
                    "formatted_address": "1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA",
                    "geometry": { "location": { "lat": 37.422, "lng": -122.084 } }
                }]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let location = provider_client(&mock_server.uri())
            .geocode("1600 Amphitheatre Pkwy & Co")
            .await
            .unwrap();

        assert_eq!(location.search_query, "1600 Amphitheatre Pkwy & Co");
        assert_eq!(location.latitude, 37.422);
    }
}

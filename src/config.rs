use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use clap::Parser;

/// Process configuration. Every field is read from the environment (after `.env` is loaded)
/// and can be overridden by the matching long flag.
#[derive(Parser, Clone)]
#[command(name = "city-explorer-backend", about = "Relays location queries to third-party data providers")]
pub struct Config {
    #[clap(env, long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,
    #[clap(env, long, default_value_t = 3000)]
    pub port: u16,

    #[clap(env, long)]
    pub geocode_api_key: Option<String>,
    #[clap(env, long)]
    pub weather_api_key: Option<String>,
    #[clap(env, long)]
    pub themoviedb_api_key: Option<String>,
    #[clap(env, long)]
    pub yelp_api_key: Option<String>,
    #[clap(env, long)]
    pub meetups_api_key: Option<String>,
    #[clap(env, long)]
    pub hiking_api_key: Option<String>,

    #[clap(env, long, default_value = "https://maps.googleapis.com")]
    pub geocode_base_url: String,
    #[clap(env, long, default_value = "https://api.darksky.net")]
    pub weather_base_url: String,
    #[clap(env, long, default_value = "https://api.themoviedb.org")]
    pub themoviedb_base_url: String,
    #[clap(env, long, default_value = "https://api.yelp.com")]
    pub yelp_base_url: String,
    #[clap(env, long, default_value = "https://api.meetup.com")]
    pub meetups_base_url: String,
    #[clap(env, long, default_value = "https://www.hikingproject.com")]
    pub hiking_base_url: String,

    /// Upper bound on a single outbound provider call.
    #[clap(env, long, default_value_t = 10)]
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Configuration with every credential set and every provider pointed at `base_url`.
    #[cfg(test)]
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            geocode_api_key: Some("geocode-key".to_string()),
            weather_api_key: Some("weather-key".to_string()),
            themoviedb_api_key: Some("tmdb-key".to_string()),
            yelp_api_key: Some("yelp-key".to_string()),
            meetups_api_key: Some("meetups-key".to_string()),
            hiking_api_key: Some("hiking-key".to_string()),
            geocode_base_url: base_url.to_string(),
            weather_base_url: base_url.to_string(),
            themoviedb_base_url: base_url.to_string(),
            yelp_base_url: base_url.to_string(),
            meetups_base_url: base_url.to_string(),
            hiking_base_url: base_url.to_string(),
            request_timeout_secs: 5,
        }
    }
}

use serde::{Deserialize, Serialize};
use crate::models::Envelope;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Location {
    pub search_query: String,
    pub formatted_query: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Deserialize, Debug)]
pub struct GeocodeResponse {
    pub results: Vec<GeocodeResult>,
}

#[derive(Deserialize, Debug)]
pub struct GeocodeResult {
    pub formatted_address: String,
    pub geometry: Geometry,
}

#[derive(Deserialize, Debug)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Deserialize, Debug)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl Envelope for GeocodeResponse {
    type Item = GeocodeResult;

    fn into_items(self) -> Vec<GeocodeResult> {
        self.results
    }
}

impl Location {
    pub fn new(search_query: &str, result: GeocodeResult) -> Self {
        Self {
            search_query: search_query.to_string(),
            formatted_query: result.formatted_address,
            latitude: result.geometry.location.lat,
            longitude: result.geometry.location.lng,
        }
    }
}

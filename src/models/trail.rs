use serde::{Deserialize, Serialize};
use crate::helpers::date_format::split_date_time;
use crate::models::Envelope;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Trail {
    pub trail_url: String,
    pub name: String,
    pub location: String,
    pub length: f64,
    pub condition_date: String,
    pub condition_time: String,
    pub conditions: String,
    pub stars: f64,
    pub star_votes: u64,
    pub summary: String,
}

#[derive(Deserialize, Debug)]
pub struct TrailSearchResponse {
    pub trails: Vec<TrailResult>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TrailResult {
    pub url: String,
    pub name: String,
    pub location: String,
    pub length: f64,
    pub condition_date: String,
    pub condition_status: String,
    pub stars: f64,
    pub star_votes: u64,
    pub summary: String,
}

impl Envelope for TrailSearchResponse {
    type Item = TrailResult;

    fn into_items(self) -> Vec<TrailResult> {
        self.trails
    }
}

impl TryFrom<TrailResult> for Trail {
    type Error = anyhow::Error;

    fn try_from(trail: TrailResult) -> anyhow::Result<Self> {
        let (condition_date, condition_time) = split_date_time(&trail.condition_date)?;
        Ok(Self {
            trail_url: trail.url,
            name: trail.name,
            location: trail.location,
            length: trail.length,
            condition_date,
            condition_time,
            conditions: trail.condition_status,
            stars: trail.stars,
            star_votes: trail.star_votes,
            summary: trail.summary,
        })
    }
}

use serde::{Deserialize, Serialize};
use crate::models::Envelope;

pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w600_and_h900_bestv2";

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Movie {
    pub title: String,
    pub released_on: String,
    pub total_votes: u64,
    pub average_votes: f64,
    pub popularity: f64,
    pub image_url: String,
    pub overview: String,
}

#[derive(Deserialize, Debug)]
pub struct MovieSearchResponse {
    pub results: Vec<MovieResult>,
}

#[derive(Deserialize, Debug)]
pub struct MovieResult {
    pub title: String,
    pub release_date: String,
    pub vote_count: u64,
    pub vote_average: f64,
    pub popularity: f64,
    // TMDB sends null for titles without artwork
    #[serde(default)]
    pub poster_path: Option<String>,
    pub overview: String,
}

impl Envelope for MovieSearchResponse {
    type Item = MovieResult;

    fn into_items(self) -> Vec<MovieResult> {
        self.results
    }
}

impl TryFrom<MovieResult> for Movie {
    type Error = anyhow::Error;

    fn try_from(movie: MovieResult) -> anyhow::Result<Self> {
        let image_url = format!("{}{}", POSTER_BASE_URL, movie.poster_path.unwrap_or_default());
        Ok(Self {
            title: movie.title,
            released_on: movie.release_date,
            total_votes: movie.vote_count,
            average_votes: movie.vote_average,
            popularity: movie.popularity,
            image_url,
            overview: movie.overview,
        })
    }
}

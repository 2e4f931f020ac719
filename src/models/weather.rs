use serde::{Deserialize, Serialize};
use crate::helpers::date_format::day_label_from_unix_seconds;
use crate::models::Envelope;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct WeatherDay {
    pub forecast: String,
    pub time: String,
}

#[derive(Deserialize, Debug)]
pub struct ForecastResponse {
    pub daily: DailyForecast,
}

#[derive(Deserialize, Debug)]
pub struct DailyForecast {
    pub data: Vec<ForecastDay>,
}

#[derive(Deserialize, Debug)]
pub struct ForecastDay {
    pub summary: String,
    /// Unix seconds.
    pub time: i64,
}

impl Envelope for ForecastResponse {
    type Item = ForecastDay;

    fn into_items(self) -> Vec<ForecastDay> {
        self.daily.data
    }
}

impl TryFrom<ForecastDay> for WeatherDay {
    type Error = anyhow::Error;

    fn try_from(day: ForecastDay) -> anyhow::Result<Self> {
        Ok(Self {
            forecast: day.summary,
            time: day_label_from_unix_seconds(day.time)?,
        })
    }
}

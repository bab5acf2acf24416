use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::{
    coordinate::Coordinate,
    model::{ConditionsResponse, ForecastResponse},
};

use super::{WeatherError, WeatherProvider};

pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1";

/// Fields requested for the current conditions table.
pub const CURRENT_FIELDS: [&str; 15] = [
    "temperature_2m",
    "relative_humidity_2m",
    "apparent_temperature",
    "is_day",
    "precipitation",
    "rain",
    "snowfall",
    "showers",
    "weather_code",
    "cloud_cover",
    "pressure_msl",
    "surface_pressure",
    "wind_speed_10m",
    "wind_direction_10m",
    "wind_gusts_10m",
];

/// Field requested for the hourly forecast.
pub const HOURLY_FIELD: &str = "temperature_2m";

/// Open-Meteo client. One GET per call; no timeout, no retry.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    base_url: String,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let base_url = base_url.into();
        Url::parse(&base_url)
            .with_context(|| format!("Invalid weather API base URL '{base_url}'"))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        })
    }

    pub fn conditions_url(&self, coord: Coordinate) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&current={}",
            self.base_url,
            coord.latitude,
            coord.longitude,
            CURRENT_FIELDS.join(",")
        )
    }

    pub fn forecast_url(&self, coord: Coordinate) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&hourly={}",
            self.base_url, coord.latitude, coord.longitude, HOURLY_FIELD
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, WeatherError> {
        debug!(url, "Fetching weather data");

        let res = self.http.get(url).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    #[instrument(skip(self), fields(lat = coord.latitude, lon = coord.longitude))]
    async fn fetch_current_conditions(
        &self,
        coord: Coordinate,
    ) -> Result<ConditionsResponse, WeatherError> {
        let response: ConditionsResponse = self.get_json(&self.conditions_url(coord)).await?;
        debug!(fields = response.len(), "Received current conditions");
        Ok(response)
    }

    #[instrument(skip(self), fields(lat = coord.latitude, lon = coord.longitude))]
    async fn fetch_forecast(&self, coord: Coordinate) -> Result<ForecastResponse, WeatherError> {
        let response: ForecastResponse = self.get_json(&self.forecast_url(coord)).await?;
        debug!(hours = response.len(), "Received hourly forecast");
        Ok(response)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> OpenMeteoProvider {
        OpenMeteoProvider::new(DEFAULT_BASE_URL).unwrap()
    }

    #[test]
    fn conditions_url_requests_all_fields() {
        let url = provider().conditions_url(Coordinate::DEFAULT);

        assert_eq!(
            url,
            "https://api.open-meteo.com/v1/forecast?latitude=52.52&longitude=13.41&current=\
             temperature_2m,relative_humidity_2m,apparent_temperature,is_day,precipitation,\
             rain,snowfall,showers,weather_code,cloud_cover,pressure_msl,surface_pressure,\
             wind_speed_10m,wind_direction_10m,wind_gusts_10m"
        );
    }

    #[test]
    fn forecast_url_requests_hourly_temperature() {
        let url = provider().forecast_url(Coordinate::new(-33.87, 151.21));

        assert_eq!(
            url,
            "https://api.open-meteo.com/v1/forecast\
             ?latitude=-33.87&longitude=151.21&hourly=temperature_2m"
        );
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let provider = OpenMeteoProvider::new("http://localhost:8080/v1/").unwrap();
        assert!(
            provider
                .forecast_url(Coordinate::DEFAULT)
                .starts_with("http://localhost:8080/v1/forecast?")
        );
    }

    #[test]
    fn truncate_body_limits_length() {
        let long = "é".repeat(300);
        let truncated = truncate_body(&long);
        assert_eq!(truncated.chars().count(), 203);
        assert!(truncated.ends_with("..."));

        assert_eq!(truncate_body("short"), "short");
    }
}

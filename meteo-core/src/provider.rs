use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

use crate::{
    Config,
    coordinate::Coordinate,
    model::{ConditionsResponse, ForecastResponse},
};

pub mod open_meteo;

pub use open_meteo::OpenMeteoProvider;

/// Failure while fetching or decoding a weather response.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("request to weather API failed")]
    Request(#[from] reqwest::Error),

    #[error("weather API returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to parse weather API response")]
    Parse(#[from] serde_json::Error),

    #[error("malformed weather API response: {0}")]
    Shape(String),
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_current_conditions(
        &self,
        coord: Coordinate,
    ) -> Result<ConditionsResponse, WeatherError>;

    async fn fetch_forecast(&self, coord: Coordinate) -> Result<ForecastResponse, WeatherError>;
}

/// Construct the provider configured in `config`.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let provider = OpenMeteoProvider::new(config.api_base_url.clone())?;
    Ok(Box::new(provider))
}

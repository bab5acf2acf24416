use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::provider::WeatherError;

/// Snapshot of current conditions.
///
/// `values` keeps the field order declared by the API in the response body;
/// the conditions table is rendered in exactly that order.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionsResponse {
    units: Map<String, Value>,
    values: Map<String, Value>,
}

impl ConditionsResponse {
    /// Build a response, rejecting it if a value has no unit entry.
    pub fn new(
        units: Map<String, Value>,
        values: Map<String, Value>,
    ) -> Result<Self, WeatherError> {
        if let Some(key) = values.keys().find(|key| !units.contains_key(*key)) {
            return Err(WeatherError::Shape(format!(
                "no unit for current condition '{key}'"
            )));
        }

        Ok(Self { units, values })
    }

    /// Iterate `(key, value, unit)` in API-declared order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value, &Value)> {
        self.values
            .iter()
            .map(|(key, value)| (key.as_str(), value, &self.units[key]))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn unit(&self, key: &str) -> Option<&Value> {
        self.units.get(key)
    }
}

#[derive(Debug, Deserialize)]
struct RawConditions {
    current_units: Map<String, Value>,
    current: Map<String, Value>,
}

impl<'de> Deserialize<'de> for ConditionsResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawConditions::deserialize(deserializer)?;
        ConditionsResponse::new(raw.current_units, raw.current)
            .map_err(serde::de::Error::custom)
    }
}

/// One hourly temperature prediction.
///
/// `label` is the timestamp exactly as the API sent it; labels shown to the
/// user are derived from it, `time` only proves it is a valid local time.
/// A missing reading (`null` in the API) is kept as `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyTemperature {
    pub label: String,
    pub time: NaiveDateTime,
    pub temperature_c: Option<f64>,
}

/// Hourly temperature series, index-aligned by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResponse {
    points: Vec<HourlyTemperature>,
}

impl ForecastResponse {
    pub fn new(times: &[String], temperatures: &[Option<f64>]) -> Result<Self, WeatherError> {
        if times.len() != temperatures.len() {
            return Err(WeatherError::Shape(format!(
                "hourly series length mismatch: {} timestamps, {} temperatures",
                times.len(),
                temperatures.len()
            )));
        }

        let points = times
            .iter()
            .zip(temperatures)
            .map(|(label, &temperature_c)| {
                Ok(HourlyTemperature {
                    label: label.clone(),
                    time: parse_local_time(label)?,
                    temperature_c,
                })
            })
            .collect::<Result<Vec<_>, WeatherError>>()?;

        Ok(Self { points })
    }

    pub fn points(&self) -> &[HourlyTemperature] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct RawHourly {
    time: Vec<String>,
    temperature_2m: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct RawForecast {
    hourly: RawHourly,
}

impl<'de> Deserialize<'de> for ForecastResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawForecast::deserialize(deserializer)?;
        ForecastResponse::new(&raw.hourly.time, &raw.hourly.temperature_2m)
            .map_err(serde::de::Error::custom)
    }
}

/// Open-Meteo returns local times without offset, minutes precision by default.
fn parse_local_time(s: &str) -> Result<NaiveDateTime, WeatherError> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| WeatherError::Shape(format!("invalid hourly timestamp '{s}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn conditions_keep_declared_order() {
        let body = json!({
            "current_units": {
                "time": "iso8601",
                "wind_speed_10m": "km/h",
                "is_day": "",
                "apparent_temperature": "°C"
            },
            "current": {
                "time": "2024-01-15T12:00",
                "wind_speed_10m": 12.5,
                "is_day": 0,
                "apparent_temperature": 2.0
            }
        });

        let parsed: ConditionsResponse = serde_json::from_value(body).unwrap();
        let keys: Vec<_> = parsed.iter().map(|(key, _, _)| key).collect();

        assert_eq!(
            keys,
            ["time", "wind_speed_10m", "is_day", "apparent_temperature"]
        );
        assert_eq!(parsed.unit("wind_speed_10m"), Some(&json!("km/h")));
    }

    #[test]
    fn conditions_without_unit_are_rejected() {
        let body = json!({
            "current_units": {"temperature_2m": "°C"},
            "current": {"temperature_2m": 1.0, "rain": 0.0}
        });

        let err = serde_json::from_value::<ConditionsResponse>(body).unwrap_err();
        assert!(err.to_string().contains("no unit for current condition 'rain'"));
    }

    #[test]
    fn conditions_missing_section_is_rejected() {
        let body = json!({"current": {"temperature_2m": 1.0}});
        assert!(serde_json::from_value::<ConditionsResponse>(body).is_err());
    }

    #[test]
    fn forecast_parses_aligned_series() {
        let body = json!({
            "hourly": {
                "time": ["2024-01-01T00:00", "2024-01-01T01:00:00"],
                "temperature_2m": [1.0, 1.5]
            }
        });

        let parsed: ForecastResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.points()[1].temperature_c, Some(1.5));
        assert_eq!(parsed.points()[1].label, "2024-01-01T01:00:00");
        assert_eq!(parsed.points()[1].time.to_string(), "2024-01-01 01:00:00");
    }

    #[test]
    fn forecast_keeps_missing_readings() {
        let body = json!({
            "hourly": {
                "time": ["2024-01-01T00:00", "2024-01-01T01:00"],
                "temperature_2m": [null, -0.4]
            }
        });

        let parsed: ForecastResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.points()[0].temperature_c, None);
        assert_eq!(parsed.points()[1].temperature_c, Some(-0.4));
    }

    #[test]
    fn forecast_length_mismatch_is_rejected() {
        let times = ["2024-01-01T00:00".to_string()];
        let err = ForecastResponse::new(&times, &[Some(1.0), Some(2.0)])
            .unwrap_err();
        assert!(err.to_string().contains("length mismatch"));
    }

    #[test]
    fn forecast_bad_timestamp_is_rejected() {
        let err = ForecastResponse::new(&["yesterday".to_string()], &[Some(1.0)])
            .unwrap_err();
        assert!(err.to_string().contains("invalid hourly timestamp"));
    }
}

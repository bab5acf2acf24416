//! Core library for the `meteo` weather pages.
//!
//! This crate defines:
//! - Coordinate resolution from session state
//! - The Open-Meteo provider and response models
//! - Renderers for the current conditions and hourly forecast pages
//! - Submit/reset handlers and the page pipeline that ties it together
//!
//! It is used by `meteo-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod controller;
pub mod coordinate;
pub mod model;
pub mod pipeline;
pub mod provider;
pub mod render;
pub mod session;

pub use config::Config;
pub use controller::{Action, InputController, Reload, SubmitForm};
pub use coordinate::{Coordinate, resolve_coordinate};
pub use model::{ConditionsResponse, ForecastResponse, HourlyTemperature};
pub use pipeline::{run_conditions_page, run_forecast_page, run_page};
pub use provider::{OpenMeteoProvider, WeatherError, WeatherProvider};
pub use render::{Page, PageKind, PageTemplate};
pub use session::{FileStore, MemoryStore, SessionStore};

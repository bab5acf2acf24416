use std::fmt;
use tracing::warn;

use crate::session::{LAT_KEY, LON_KEY, SessionStore};

pub const DEFAULT_LATITUDE: f64 = 52.52;
pub const DEFAULT_LONGITUDE: f64 = 13.41;

/// Stored-form defaults, written by the reset handler.
pub const DEFAULT_LATITUDE_STR: &str = "52.52";
pub const DEFAULT_LONGITUDE_STR: &str = "13.41";

const MAX_LATITUDE: f64 = 90.0;
const MAX_LONGITUDE: f64 = 180.0;

/// Query location in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Berlin.
    pub const DEFAULT: Coordinate = Coordinate {
        latitude: DEFAULT_LATITUDE,
        longitude: DEFAULT_LONGITUDE,
    };

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Prints the parsed values, so `+40.50` shows as `40.5`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// Read the coordinate from session state.
///
/// Never fails: a missing, unparsable or out-of-range axis is replaced by the
/// default for that axis alone.
pub fn resolve_coordinate(store: &dyn SessionStore) -> Coordinate {
    let latitude = resolve_axis(store, LAT_KEY, DEFAULT_LATITUDE, MAX_LATITUDE);
    let longitude = resolve_axis(store, LON_KEY, DEFAULT_LONGITUDE, MAX_LONGITUDE);

    Coordinate {
        latitude,
        longitude,
    }
}

fn resolve_axis(store: &dyn SessionStore, key: &str, default: f64, bound: f64) -> f64 {
    let Some(raw) = store.get(key) else {
        return default;
    };

    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value.abs() <= bound => value,
        Ok(value) => {
            warn!(key, value, bound, "Coordinate out of range, using default {default}");
            default
        }
        Err(_) => {
            warn!(key, raw = %raw, "Coordinate is not a number, using default {default}");
            default
        }
    }
}

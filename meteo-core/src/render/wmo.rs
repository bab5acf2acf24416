use serde_json::Value;

pub const UNAVAILABLE: &str = "Classification Unavailable";

/// Description of a WMO weather interpretation code.
///
/// See <https://open-meteo.com/en/docs> for the code list.
pub const fn describe(code: u16) -> &'static str {
    match code {
        0 => "Clear Sky",
        1 => "Mostly Clear Sky",
        2 => "Partly Cloudy",
        3 => "Overcast",
        45 => "Foggy",
        48 => "Foggy with Rime Fog",
        51 => "Light Drizzle",
        53 => "Moderate Drizzle",
        55 => "Dense Drizzle",
        56 => "Light Freezing Drizzle",
        57 => "Dense Freezing Drizzle",
        61 => "Light Rain",
        63 => "Moderate Rain",
        65 => "Heavy Rain",
        66 => "Light Freezing Rain",
        67 => "Heavy Freezing Rain",
        71 => "Light Snow",
        73 => "Moderate Snow",
        75 => "Heavy Snow",
        77 => "Snow Grains",
        80 => "Light Rain Showers",
        81 => "Moderate Rain Showers",
        82 => "Violent Rain Showers",
        85 => "Light Snow Showers",
        86 => "Heavy Snow Showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with Light Hail",
        99 => "Thunderstorm with Heavy Hail",
        _ => UNAVAILABLE,
    }
}

/// Like [`describe`], for a raw JSON value. Anything that is not an integral
/// number in code range is unavailable.
pub fn describe_value(value: &Value) -> &'static str {
    value
        .as_f64()
        .filter(|n| n.fract() == 0.0 && (0.0..=f64::from(u16::MAX)).contains(n))
        .map_or(UNAVAILABLE, |n| describe(n as u16))
}

use serde_json::Value;

use crate::model::ConditionsResponse;

use super::{Table, TableRow, display_value, wmo};

const ISO8601_UNIT: &str = "iso8601";
const UTC_SUFFIX: &str = "(UTC)";

/// Append one row per current condition, in the order the API declared them.
pub fn render_conditions(response: &ConditionsResponse, table: &mut Table) {
    for (key, value, unit) in response.iter() {
        table.push_row(TableRow::new(format_key(key), format_condition(key, value, unit)));
    }
}

/// `wind_speed_10m` -> `Wind Speed 10m`.
pub fn format_key(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut out = String::with_capacity(spaced.len());
    let mut prev_is_word = false;

    for ch in spaced.chars() {
        let is_word = ch.is_ascii_alphanumeric() || ch == '_';
        if is_word && !prev_is_word {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
        prev_is_word = is_word;
    }

    out
}

/// Value text with every `T` turned into a space, followed by the unit.
pub fn format_value(value: &Value, unit: &str) -> String {
    format!("{} {}", display_value(value).replace('T', " "), unit)
}

fn format_condition(key: &str, value: &Value, unit: &Value) -> String {
    let unit = unit_text(unit);
    let mut text = format_value(value, &unit);

    if unit == ISO8601_UNIT {
        text = format_value(value, UTC_SUFFIX);
    }

    if key == "is_day" {
        text = if value.as_f64() == Some(1.0) { "Yes" } else { "No" }.to_string();
    }

    if key == "weather_code" {
        text = format!("{} ({})", display_value(value), wmo::describe_value(value));
    }

    text
}

fn unit_text(unit: &Value) -> String {
    match unit {
        Value::String(s) => s.clone(),
        other => display_value(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn conditions(body: Value) -> ConditionsResponse {
        serde_json::from_value(body).unwrap()
    }

    fn render(body: Value) -> Vec<TableRow> {
        let mut table = Table::new("Current Conditions");
        render_conditions(&conditions(body), &mut table);
        table.rows().to_vec()
    }

    #[test]
    fn temperature_and_is_day_rows() {
        let rows = render(json!({
            "current_units": {"temperature_2m": "°C", "is_day": ""},
            "current": {"temperature_2m": 21.3, "is_day": 1}
        }));

        assert_eq!(
            rows,
            vec![
                TableRow::new("Temperature 2m", "21.3 °C"),
                TableRow::new("Is Day", "Yes"),
            ]
        );
    }

    #[test]
    fn is_day_zero_is_no() {
        let rows = render(json!({
            "current_units": {"is_day": ""},
            "current": {"is_day": 0}
        }));

        assert_eq!(rows[0].value, "No");
    }

    #[test]
    fn weather_code_gets_description() {
        let rows = render(json!({
            "current_units": {"weather_code": "wmo code"},
            "current": {"weather_code": 3}
        }));
        assert_eq!(rows[0].label, "Weather Code");
        assert_eq!(rows[0].value, "3 (Overcast)");
        assert!(rows[0].value.ends_with("(Overcast)"));

        let rows = render(json!({
            "current_units": {"weather_code": "wmo code"},
            "current": {"weather_code": 17}
        }));
        assert!(rows[0].value.ends_with("(Classification Unavailable)"));
    }

    #[test]
    fn iso8601_unit_becomes_utc() {
        let rows = render(json!({
            "current_units": {"time": "iso8601", "interval": "seconds"},
            "current": {"time": "2024-01-15T12:00", "interval": 900}
        }));

        assert_eq!(rows[0], TableRow::new("Time", "2024-01-15 12:00 (UTC)"));
        assert_eq!(rows[1], TableRow::new("Interval", "900 seconds"));
    }

    #[test]
    fn iso8601_suffix_regardless_of_value() {
        let rows = render(json!({
            "current_units": {"sunrise": "iso8601"},
            "current": {"sunrise": 17}
        }));

        assert!(rows[0].value.ends_with(" (UTC)"));
        assert!(!rows[0].value.contains("iso8601"));
    }

    #[test]
    fn rows_follow_api_order() {
        let rows = render(json!({
            "current_units": {
                "wind_gusts_10m": "km/h",
                "cloud_cover": "%",
                "apparent_temperature": "°C"
            },
            "current": {
                "wind_gusts_10m": 25.0,
                "cloud_cover": 80,
                "apparent_temperature": -1.2
            }
        }));

        let labels: Vec<_> = rows.iter().map(|row| row.label.as_str()).collect();
        assert_eq!(labels, ["Wind Gusts 10m", "Cloud Cover", "Apparent Temperature"]);
        assert_eq!(rows[0].value, "25 km/h");
        assert_eq!(rows[2].value, "-1.2 °C");
    }

    #[test]
    fn format_key_examples() {
        assert_eq!(format_key("wind_speed_10m"), "Wind Speed 10m");
        assert_eq!(format_key("relative_humidity_2m"), "Relative Humidity 2m");
        assert_eq!(format_key("pressure_msl"), "Pressure Msl");
        assert_eq!(format_key("is_day"), "Is Day");
    }

    #[test]
    fn format_key_is_idempotent_without_underscores() {
        assert_eq!(format_key("Pressure"), "Pressure");

        let once = format_key("surface_pressure");
        assert_eq!(format_key(&once), once);
    }

    #[test]
    fn format_value_replaces_t() {
        assert_eq!(
            format_value(&json!("2024-01-15T12:00"), "(UTC)"),
            "2024-01-15 12:00 (UTC)"
        );
        assert_eq!(format_value(&json!(0.0), "mm"), "0 mm");
        assert_eq!(format_value(&json!(5), ""), "5 ");
    }
}

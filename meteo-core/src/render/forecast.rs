use crate::model::ForecastResponse;

use super::{Chart, Dataset, Table, TableRow, format_number};

pub const DATASET_LABEL: &str = "Temperature (°C)";
const DATASET_COLOR: &str = "rgba(1, 164, 205, 0.42)";

/// Length of the `YYYY-` prefix dropped from axis labels.
const YEAR_PREFIX_LEN: usize = 5;

/// Fill `chart` with the hourly series and append one table row per hour.
///
/// Labels come from the timestamp text as sent, so any seconds survive.
pub fn render_forecast(
    response: &ForecastResponse,
    chart: &mut Option<Chart>,
    table: &mut Table,
) {
    let points = response.points();

    let labels = points.iter().map(|p| chart_label(&p.label)).collect();

    let dataset = Dataset {
        label: DATASET_LABEL.to_string(),
        data: points.iter().map(|p| p.temperature_c).collect(),
        background_color: DATASET_COLOR.to_string(),
        border_width: 1,
    };

    *chart = Some(Chart::line(labels, dataset));

    for point in points {
        table.push_row(TableRow::new(
            table_label(&point.label),
            format_temperature(point.temperature_c),
        ));
    }
}

/// `2024-01-01T01:00` -> `01-01\n01:00`.
pub fn chart_label(time: &str) -> String {
    let text = time.replace('T', "\n");
    text.get(YEAR_PREFIX_LEN..).unwrap_or_default().to_string()
}

/// `2024-01-01T01:00` -> `2024-01-01 01:00`.
pub fn table_label(time: &str) -> String {
    time.replace('T', " ")
}

/// A missing reading prints as `null`, like the API sent it.
fn format_temperature(temperature_c: Option<f64>) -> String {
    match temperature_c {
        Some(value) => format!("{} °C", format_number(value)),
        None => "null °C".to_string(),
    }
}

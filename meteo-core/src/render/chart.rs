use serde::Serialize;
use serde_json::{Value, json};

/// X-axis label cap: about one label per day over a week of hourly points.
pub const MAX_X_TICKS: usize = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    /// `None` leaves a gap in the line.
    pub data: Vec<Option<f64>>,
    pub background_color: String,
    pub border_width: u32,
}

/// Line chart handed to the chart library as an opaque configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub labels: Vec<String>,
    pub dataset: Dataset,
    pub max_ticks: usize,
}

impl Chart {
    pub fn line(labels: Vec<String>, dataset: Dataset) -> Self {
        Self {
            labels,
            dataset,
            max_ticks: MAX_X_TICKS,
        }
    }

    /// Chart.js 2.x configuration object.
    pub fn to_config(&self) -> Value {
        json!({
            "type": "line",
            "data": {
                "labels": self.labels,
                "datasets": [self.dataset],
            },
            "options": {
                "scales": {
                    "xAxes": [{
                        "ticks": { "maxTicksLimit": self.max_ticks }
                    }]
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_shape() {
        let chart = Chart::line(
            vec!["01-01\n00:00".to_string()],
            Dataset {
                label: "Temperature (°C)".to_string(),
                data: vec![Some(1.0), None],
                background_color: "rgba(1, 164, 205, 0.42)".to_string(),
                border_width: 1,
            },
        );

        let config = chart.to_config();
        assert_eq!(config["type"], "line");
        assert_eq!(config["data"]["labels"][0], "01-01\n00:00");

        let dataset = &config["data"]["datasets"][0];
        assert_eq!(dataset["backgroundColor"], "rgba(1, 164, 205, 0.42)");
        assert_eq!(dataset["borderWidth"], 1);
        assert_eq!(dataset["data"], json!([1.0, null]));

        let ticks = &config["options"]["scales"]["xAxes"][0]["ticks"];
        assert_eq!(ticks["maxTicksLimit"], 7);
    }
}

//! Turning weather responses into tables, charts and HTML pages.
//!
//! Renderers never fetch and never read session state: they take parsed data
//! plus the output they write into.

use serde_json::{Number, Value};

pub mod chart;
pub mod conditions;
pub mod forecast;
pub mod page;
pub mod table;
pub mod wmo;

pub use chart::{Chart, Dataset};
pub use conditions::render_conditions;
pub use forecast::render_forecast;
pub use page::{Page, PageKind, PageTemplate};
pub use table::{ERROR_MESSAGE, Table, TableBody, TableRow};

/// Render a number the way a browser prints it: integral values drop the
/// fractional part (`1.0` -> `1`), everything else uses the shortest
/// round-trip representation.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        // Covers -0.0 as well.
        "0".to_string()
    } else if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{n:.0}")
    } else if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let sign = if n > 0.0 { "" } else { "-" };
        format!("{sign}Infinity")
    } else {
        n.to_string()
    }
}

fn format_json_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map(format_number).unwrap_or_else(|| n.to_string())
    }
}

/// Display string of a scalar JSON value.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_json_number(n),
        Value::String(s) => s.clone(),
        // Not expected from the API; keep something readable.
        other => other.to_string(),
    }
}

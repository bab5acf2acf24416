use anyhow::{Context, Result};
use std::fmt;
use tera::Tera;

use super::{Chart, Table, TableBody};

const TEMPLATE_NAME: &str = "page.html";
const TEMPLATE: &str = include_str!("../../templates/page.html");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Conditions,
    Forecast,
}

impl PageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Conditions => "conditions",
            PageKind::Forecast => "forecast",
        }
    }

    /// Header text before the coordinate suffix is appended.
    pub fn title(&self) -> &'static str {
        match self {
            PageKind::Conditions => "Current Conditions",
            PageKind::Forecast => "Hourly Temperature Forecast",
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rendered page: header and table, plus a chart on the forecast page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub kind: PageKind,
    pub table: Table,
    pub chart: Option<Chart>,
}

impl Page {
    pub fn new(kind: PageKind) -> Self {
        Self {
            kind,
            table: Table::new(kind.title()),
            chart: None,
        }
    }

    pub fn to_html(&self, template: &PageTemplate) -> Result<String> {
        template.render(self)
    }
}

/// Compiled HTML shell for [`Page`]s. Text is autoescaped.
#[derive(Debug)]
pub struct PageTemplate {
    tera: Tera,
    chart_js_url: String,
}

impl PageTemplate {
    pub fn new(chart_js_url: impl Into<String>) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)
            .context("Failed to compile page template")?;

        Ok(Self {
            tera,
            chart_js_url: chart_js_url.into(),
        })
    }

    pub fn render(&self, page: &Page) -> Result<String> {
        let mut ctx = tera::Context::new();
        ctx.insert("title", page.kind.title());
        ctx.insert("header", page.table.header());
        ctx.insert("chart_js_url", &self.chart_js_url);

        match page.table.body() {
            TableBody::Rows(rows) => {
                ctx.insert("rows", rows);
                ctx.insert("error", &None::<String>);
            }
            TableBody::Error(message) => {
                ctx.insert("rows", &Vec::<super::TableRow>::new());
                ctx.insert("error", message);
            }
        }

        let chart_config = page
            .chart
            .as_ref()
            .map(|chart| script_safe_json(&chart.to_config().to_string()));
        ctx.insert("chart_config", &chart_config);

        self.tera
            .render(TEMPLATE_NAME, &ctx)
            .with_context(|| format!("Failed to render {} page", page.kind))
    }
}

/// Keep a JSON literal from closing the surrounding `<script>` element.
fn script_safe_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

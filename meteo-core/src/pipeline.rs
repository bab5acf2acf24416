//! One page load: resolve the coordinate, fetch, render.
//!
//! Any failure after the header is written ends up as the single error text in
//! the table body. The header keeps its coordinate suffix; rows and chart are
//! only committed once everything has succeeded.

use std::error::Error;
use tracing::{error, info};

use crate::{
    coordinate::{Coordinate, resolve_coordinate},
    provider::{WeatherError, WeatherProvider},
    render::{ERROR_MESSAGE, Page, PageKind, Table, render_conditions, render_forecast},
    session::SessionStore,
};

pub async fn run_page(
    kind: PageKind,
    store: &dyn SessionStore,
    provider: &dyn WeatherProvider,
) -> Page {
    match kind {
        PageKind::Conditions => run_conditions_page(store, provider).await,
        PageKind::Forecast => run_forecast_page(store, provider).await,
    }
}

pub async fn run_conditions_page(store: &dyn SessionStore, provider: &dyn WeatherProvider) -> Page {
    let (mut page, coord) = start_page(PageKind::Conditions, store);

    match provider.fetch_current_conditions(coord).await {
        Ok(response) => {
            let mut table = Table::default();
            render_conditions(&response, &mut table);
            page.table.replace_body(table);
            info!(rows = page.table.rows().len(), "Rendered current conditions");
        }
        Err(err) => fail_page(&mut page, &err),
    }

    page
}

pub async fn run_forecast_page(store: &dyn SessionStore, provider: &dyn WeatherProvider) -> Page {
    let (mut page, coord) = start_page(PageKind::Forecast, store);

    match provider.fetch_forecast(coord).await {
        Ok(response) => {
            let mut chart = None;
            let mut table = Table::default();
            render_forecast(&response, &mut chart, &mut table);
            page.chart = chart;
            page.table.replace_body(table);
            info!(rows = page.table.rows().len(), "Rendered hourly forecast");
        }
        Err(err) => fail_page(&mut page, &err),
    }

    page
}

fn start_page(kind: PageKind, store: &dyn SessionStore) -> (Page, Coordinate) {
    let coord = resolve_coordinate(store);
    let mut page = Page::new(kind);
    page.table.extend_header(&format!(" at {coord}"));
    info!(page = %kind, %coord, "Loading page");
    (page, coord)
}

fn fail_page(page: &mut Page, err: &WeatherError) {
    error!(page = %page.kind, error = %error_chain(err), "Error fetching weather data");
    page.chart = None;
    page.table.set_error(ERROR_MESSAGE);
}

fn error_chain(err: &dyn Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}

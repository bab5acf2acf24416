use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use inquire::Text;
use meteo_core::{
    Action, Config, FileStore, InputController, PageKind, PageTemplate, Reload, SessionStore,
    SubmitForm, provider::provider_from_config, run_page,
    session::{LAT_KEY, LON_KEY},
};
use std::{fs, path::PathBuf};
use tracing::info;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "meteo", version, about = "Open-Meteo conditions and forecast pages")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins if set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the current conditions page.
    Conditions {
        /// Write the HTML page here instead of stdout.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Render the hourly temperature forecast page.
    Forecast {
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Store new coordinates for the following page loads.
    Submit {
        /// Latitude in decimal degrees; empty or absent leaves it unchanged.
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        lat: String,

        /// Longitude in decimal degrees; empty or absent leaves it unchanged.
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        lon: String,
    },

    /// Restore the default location (Berlin) and reload a page.
    Reset {
        /// Page to reload after the reset.
        #[arg(long, value_enum, default_value_t = PageArg::Conditions)]
        page: PageArg,

        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Interactively edit the API and chart library URLs.
    Configure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PageArg {
    Conditions,
    Forecast,
}

impl From<PageArg> for PageKind {
    fn from(value: PageArg) -> Self {
        match value {
            PageArg::Conditions => PageKind::Conditions,
            PageArg::Forecast => PageKind::Forecast,
        }
    }
}

pub fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Conditions { out } => {
                let store = FileStore::open_default()?;
                load_page(PageKind::Conditions, &store, out).await?;
            }
            Command::Forecast { out } => {
                let store = FileStore::open_default()?;
                load_page(PageKind::Forecast, &store, out).await?;
            }
            Command::Submit { lat, lon } => {
                let mut store = FileStore::open_default()?;
                let action = Action::Submit(SubmitForm {
                    latitude: lat,
                    longitude: lon,
                });
                InputController::new(&mut store).dispatch(&action)?;

                println!(
                    "Stored coordinates: lat={}, lon={}",
                    store.get(LAT_KEY).unwrap_or_else(|| "(unset)".to_string()),
                    store.get(LON_KEY).unwrap_or_else(|| "(unset)".to_string()),
                );
            }
            Command::Reset { page, out } => {
                let mut store = FileStore::open_default()?;
                let reload = InputController::new(&mut store).dispatch(&Action::Reset)?;

                if reload == Reload::Yes {
                    load_page(page.into(), &store, out).await?;
                }
            }
            Command::Configure => configure()?,
        }

        Ok(())
    }
}

/// One page load: run the pipeline and write the resulting document.
async fn load_page(kind: PageKind, store: &dyn SessionStore, out: Option<PathBuf>) -> Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;
    let template = PageTemplate::new(config.chart_js_url.as_str())?;

    let page = run_page(kind, store, provider.as_ref()).await;
    let html = page.to_html(&template)?;

    match out {
        Some(path) => {
            fs::write(&path, html)
                .with_context(|| format!("Failed to write page to {}", path.display()))?;
            info!(path = %path.display(), page = %kind, "Wrote page");
        }
        None => print!("{html}"),
    }

    Ok(())
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    config.api_base_url = Text::new("Open-Meteo API base URL:")
        .with_default(&config.api_base_url)
        .prompt()
        .context("Failed to read API base URL")?;

    config.chart_js_url = Text::new("Chart.js script URL:")
        .with_default(&config.chart_js_url)
        .prompt()
        .context("Failed to read Chart.js URL")?;

    // Fail now rather than on the next page load.
    provider_from_config(&config)?;

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn submit_accepts_negative_and_missing_fields() {
        let cli = Cli::parse_from(["meteo", "submit", "--lon", "-74.01"]);

        match cli.command {
            Command::Submit { lat, lon } => {
                assert_eq!(lat, "");
                assert_eq!(lon, "-74.01");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn reset_defaults_to_conditions_page() {
        let cli = Cli::parse_from(["meteo", "reset"]);

        match cli.command {
            Command::Reset { page, out } => {
                assert_eq!(PageKind::from(page), PageKind::Conditions);
                assert!(out.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn verbosity_maps_to_filter() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
        assert_eq!(log_filter_from_verbosity(1), "info");
        assert_eq!(log_filter_from_verbosity(2), "debug");
        assert_eq!(log_filter_from_verbosity(7), "trace");

        let cli = Cli::parse_from(["meteo", "-vv", "forecast"]);
        assert_eq!(cli.verbose, 2);
    }
}

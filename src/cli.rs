#![allow(clippy::missing_errors_doc)]

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

use crate::data::store::SENSOR_COLLECTION;

pub const DEFAULT_PROJECT: &str = "app-clima";

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "clima-tui",
    version,
    about = "Terminal dashboard for browsing daily sensor readings"
)]
pub struct Cli {
    /// Initial date to query, YYYY-MM-DD (default: today)
    pub date: Option<NaiveDate>,

    /// Cloud project holding the sensor collection
    #[arg(long, default_value = DEFAULT_PROJECT)]
    pub project: String,

    /// Full store base URL (overrides --project)
    #[arg(long)]
    pub store_url: Option<String>,

    /// Collection to query
    #[arg(long, default_value = SENSOR_COLLECTION)]
    pub collection: String,

    /// Target FPS (15..60)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u8).range(15..=60))]
    pub fps: u8,

    /// Disable the loading animation
    #[arg(long)]
    pub no_animation: bool,

    /// Color output policy
    #[arg(long, value_enum, default_value_t = ColorArg::Auto, conflicts_with = "no_color")]
    pub color: ColorArg,

    /// Alias for --color never
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,

    /// Only log warnings and errors
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log at debug level
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub fn store_url(&self) -> String {
        self.store_url.clone().unwrap_or_else(|| {
            format!(
                "https://firestore.googleapis.com/v1/projects/{}/databases/(default)",
                self.project
            )
        })
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.collection.is_empty() || self.collection.contains('/') {
            anyhow::bail!("--collection must be a plain collection id")
        }
        Ok(())
    }

    #[must_use]
    pub fn effective_color_mode(&self) -> ColorArg {
        if self.no_color {
            ColorArg::Never
        } else {
            self.color
        }
    }
}

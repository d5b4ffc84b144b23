//! Command line arguments and the optional TOML configuration file

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use courier_core::prelude::PlannerConfig;
use serde::Deserialize;

use crate::CliError;

/// Plan a turn-by-turn delivery route from a street map and delivery requests.
#[derive(Parser, Debug)]
#[command(name = "courier", version)]
pub struct Args {
    /// Street map file.
    pub map: PathBuf,

    /// Delivery request file (depot on the first line, then `lat lon:item`).
    pub deliveries: PathBuf,

    /// TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format, overrides the configuration file.
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Treat coordinates as a flat plane instead of the earth's surface.
    #[arg(long)]
    pub planar: bool,

    /// Deliver in the requested order without reordering.
    #[arg(long)]
    pub keep_order: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Geometry the planner is run with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeometryKind {
    /// Haversine distances in miles on the earth's surface
    #[default]
    GreatCircle,
    /// Coordinates treated as a flat plane
    Planar,
}

/// Contents of the configuration file
///
/// ```toml
/// format = "json"
/// geometry = "great-circle"
///
/// [planner]
/// optimize_order = true
/// straight_tolerance_degrees = 1.0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub format: OutputFormat,
    pub geometry: GeometryKind,
    pub planner: PlannerConfig,
}

impl CliConfig {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("cannot read '{}': {e}", path.display()))
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, CliError> {
        let config: Self = toml::from_str(text)?;
        config.planner.validate()?;
        Ok(config)
    }

    /// Command line flags take precedence over the file
    pub fn apply_args(mut self, args: &Args) -> Self {
        if let Some(format) = args.format {
            self.format = format;
        }
        if args.planar {
            self.geometry = GeometryKind::Planar;
        }
        if args.keep_order {
            self.planner.optimize_order = false;
        }
        self
    }
}

use std::process::ExitCode;

use clap::Parser;
use courier_core::prelude::{
    DeliveryManifest, DeliveryPlan, DeliveryPlanner, Geometry, GreatCircle, Planar, StreetIndex,
    load_deliveries, load_street_map,
};
use thiserror::Error;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod output;

use config::{Args, CliConfig, GeometryKind, OutputFormat};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("{0}")]
    Load(String),
    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Planning(#[from] courier_core::Error),
    #[error("Failed to serialize plan: {0}")]
    Json(#[from] serde_json::Error),
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(rendered) => {
            print!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            println!("{}", failure_message(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String, CliError> {
    let config = match &args.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    }
    .apply_args(args);
    debug!("Using configuration {config:?}");

    let index = load_street_map(&args.map).map_err(|e| {
        CliError::Load(format!(
            "Unable to load map data file {}: {e}",
            args.map.display()
        ))
    })?;
    let manifest = load_deliveries(&args.deliveries).map_err(|e| {
        CliError::Load(format!(
            "Unable to load delivery request file {}: {e}",
            args.deliveries.display()
        ))
    })?;

    info!("Generating route...");
    let plan = match config.geometry {
        GeometryKind::GreatCircle => plan_with(&index, GreatCircle, &config, &manifest)?,
        GeometryKind::Planar => plan_with(&index, Planar, &config, &manifest)?,
    };
    debug!(
        "Crow-flight distance {:.2} miles as requested, {:.2} miles reordered",
        plan.original_crow_distance, plan.optimized_crow_distance
    );

    match config.format {
        OutputFormat::Text => Ok(output::render_text(&plan)),
        OutputFormat::Json => Ok(output::render_json(&plan)? + "\n"),
    }
}

fn plan_with<G: Geometry>(
    index: &StreetIndex,
    geometry: G,
    config: &CliConfig,
    manifest: &DeliveryManifest,
) -> Result<DeliveryPlan, CliError> {
    let planner = DeliveryPlanner::with_config(index, geometry, config.planner.clone())?;
    Ok(planner.plan(&manifest.depot, &manifest.deliveries)?)
}

fn failure_message(err: &CliError) -> String {
    match err {
        CliError::Planning(courier_core::Error::BadCoordinate(_)) => {
            "One or more depot or delivery coordinates are invalid.".to_string()
        }
        CliError::Planning(courier_core::Error::NoRoute { .. }) => {
            "No route can be found to deliver all items.".to_string()
        }
        other => other.to_string(),
    }
}

//! This module is responsible for reading map and delivery data from text
//! sources and for the planner configuration.

mod config;
mod deliveries;
mod map;

pub use config::PlannerConfig;
pub use deliveries::{DeliveryManifest, load_deliveries, parse_deliveries};
pub use map::{load_street_map, parse_street_map};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn open_file(path: &Path) -> Result<BufReader<File>, std::io::Error> {
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;
    Ok(BufReader::new(file))
}

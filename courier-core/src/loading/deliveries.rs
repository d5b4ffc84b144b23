//! Delivery request text format: the depot coordinates on the first line,
//! then one `<lat> <lon>:<item>` line per delivery.

use std::io::BufRead;
use std::path::Path;

use log::{info, warn};

use super::open_file;
use crate::{DeliveryRequest, Error, Position};

/// Depot and deliveries read from a delivery request source
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryManifest {
    pub depot: Position,
    pub deliveries: Vec<DeliveryRequest>,
}

/// Reads a delivery request file
///
/// # Errors
///
/// Returns an error if the file cannot be read or the depot line is invalid
pub fn load_deliveries(path: impl AsRef<Path>) -> Result<DeliveryManifest, Error> {
    let path = path.as_ref();
    info!("Loading delivery requests: {}", path.display());
    parse_deliveries(open_file(path)?)
}

/// Parses delivery request text.
///
/// Malformed delivery lines are skipped with a warning; only a missing or
/// invalid depot line fails the whole parse.
///
/// # Errors
///
/// Returns [`Error::InvalidData`] if the depot line is missing or invalid
pub fn parse_deliveries<R: BufRead>(reader: R) -> Result<DeliveryManifest, Error> {
    let mut lines = reader.lines();

    let depot_line = lines
        .next()
        .transpose()?
        .ok_or_else(|| Error::InvalidData("missing depot line".to_string()))?;
    let depot = parse_coordinates(&depot_line).ok_or_else(|| {
        Error::InvalidData(format!("invalid depot line '{}'", depot_line.trim()))
    })?;

    let mut deliveries = Vec::new();
    for (offset, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_delivery(&line) {
            Ok(delivery) => deliveries.push(delivery),
            Err(reason) => warn!("Skipping deliveries line {}: {reason}: {line}", offset + 2),
        }
    }

    info!("Parsed {} delivery requests", deliveries.len());
    Ok(DeliveryManifest { depot, deliveries })
}

fn parse_delivery(line: &str) -> Result<DeliveryRequest, &'static str> {
    let (coordinates, item) = line.split_once(':').ok_or("missing colon")?;
    let location = parse_coordinates(coordinates).ok_or("bad format")?;

    let item = item.trim();
    if item.is_empty() {
        return Err("missing item");
    }

    Ok(DeliveryRequest::new(item, location))
}

/// First two whitespace separated tokens as latitude and longitude
fn parse_coordinates(text: &str) -> Option<Position> {
    let mut tokens = text.split_whitespace();
    let latitude = tokens.next()?;
    let longitude = tokens.next()?;
    Position::parse(latitude, longitude).ok()
}

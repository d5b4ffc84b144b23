use thiserror::Error;

use crate::Position;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Coordinate {0} is not part of the street map")]
    BadCoordinate(Position),
    #[error("No route from {from} to {to}")]
    NoRoute { from: Position, to: Position },
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

//! Street network model

pub mod components;
pub mod index;

pub use components::{Position, Segment};
pub use index::{StreetIndex, StreetRecord};

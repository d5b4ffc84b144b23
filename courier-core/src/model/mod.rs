//! Data model for delivery routing
//!
//! Contains the street network types and the delivery request/command types.

pub mod delivery;
pub mod streets;

pub use delivery::{CompassDirection, DeliveryCommand, DeliveryRequest, TurnDirection};
pub use streets::{Position, Segment, StreetIndex, StreetRecord};

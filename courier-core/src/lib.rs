//! Delivery route planning over a street-segment graph.
//!
//! A [`StreetIndex`] is built once from map data and shared read-only by the
//! [`PointToPointRouter`] (A* search) and the [`DeliveryPlanner`], which
//! reorders deliveries and turns the routed segments into navigation commands.

pub mod error;
pub mod geometry;
pub mod loading;
pub mod model;
pub mod planning;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use geometry::{Geometry, GreatCircle, Planar};
pub use model::{DeliveryCommand, DeliveryRequest, Position, Segment, StreetIndex, StreetRecord};
pub use planning::{DeliveryOptimizer, DeliveryPlan, DeliveryPlanner};
pub use routing::{PointToPointRouter, Route};

/// Distances throughout the crate are expressed in miles
pub type Miles = f64;

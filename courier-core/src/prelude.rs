// Re-export key components
pub use crate::geometry::{Geometry, GreatCircle, Planar};
pub use crate::loading::{
    DeliveryManifest, PlannerConfig, load_deliveries, load_street_map,
    parse_deliveries, parse_street_map,
};
pub use crate::model::{
    CompassDirection, DeliveryCommand, DeliveryRequest, Position, Segment, StreetIndex,
    StreetRecord, TurnDirection,
};
pub use crate::planning::{DeliveryOptimizer, DeliveryPlan, DeliveryPlanner, OptimizedOrder};
pub use crate::routing::{PointToPointRouter, Route};

pub use crate::Error;
pub use crate::Miles;

//! Delivery planning: ordering stops, routing legs and emitting commands

mod commands;
mod optimizer;
mod planner;

pub use commands::classify_turn;
pub use optimizer::{DeliveryOptimizer, OptimizedOrder};
pub use planner::{DeliveryPlan, DeliveryPlanner};

use std::iter;

use log::{debug, info};
use serde::Serialize;

use super::commands::CommandBuilder;
use super::optimizer::DeliveryOptimizer;
use crate::{
    DeliveryCommand, DeliveryRequest, Error, Geometry, Miles, Position, StreetIndex,
    loading::PlannerConfig, routing::PointToPointRouter,
};

/// Complete turn-by-turn plan for a depot round trip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryPlan {
    pub commands: Vec<DeliveryCommand>,
    /// Road distance over all legs, return to the depot included
    pub total_distance: Miles,
    pub original_crow_distance: Miles,
    pub optimized_crow_distance: Miles,
}

/// Plans a depot -> deliveries -> depot round trip
#[derive(Debug, Clone)]
pub struct DeliveryPlanner<'a, G> {
    router: PointToPointRouter<'a, G>,
    config: PlannerConfig,
}

impl<'a, G: Geometry> DeliveryPlanner<'a, G> {
    pub fn new(index: &'a StreetIndex, geometry: G) -> Self {
        Self {
            router: PointToPointRouter::new(index, geometry),
            config: PlannerConfig::default(),
        }
    }

    /// Creates a planner with custom settings
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] if the configuration is out of range
    pub fn with_config(
        index: &'a StreetIndex,
        geometry: G,
        config: PlannerConfig,
    ) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            router: PointToPointRouter::new(index, geometry),
            config,
        })
    }

    pub fn router(&self) -> &PointToPointRouter<'a, G> {
        &self.router
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Generates the delivery plan.
    ///
    /// Legs are routed in order and the first failing leg aborts the whole
    /// plan; no partial plan is returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadCoordinate`] if the depot or a delivery location is
    /// not on the map, and [`Error::NoRoute`] if a leg cannot be routed
    pub fn plan(
        &self,
        depot: &Position,
        deliveries: &[DeliveryRequest],
    ) -> Result<DeliveryPlan, Error> {
        let geometry = self.router.geometry();
        let optimizer = DeliveryOptimizer::new(geometry);
        let order = if self.config.optimize_order {
            optimizer.optimize(depot, deliveries)
        } else {
            optimizer.unchanged(depot, deliveries)
        };

        let builder = CommandBuilder::new(geometry, self.config.straight_tolerance_degrees);
        let mut commands = Vec::new();
        let mut total_distance = 0.0;

        // Every delivery is a leg destination, the depot closes the loop
        let stops = order
            .deliveries
            .iter()
            .map(|delivery| (&delivery.location, Some(delivery.item.as_str())))
            .chain(iter::once((depot, None)));

        let mut from = depot;
        for (to, item) in stops {
            let route = self.router.route(from, to)?;
            debug!(
                "Leg {from} -> {to}: {} segments, {:.2} miles",
                route.segments.len(),
                route.distance
            );

            total_distance += route.distance;
            builder.extend_leg(&route.segments, &mut commands);
            if let Some(item) = item {
                commands.push(DeliveryCommand::deliver(item));
            }
            from = to;
        }

        info!(
            "Planned {} deliveries: {} commands, {total_distance:.2} miles",
            order.deliveries.len(),
            commands.len()
        );

        Ok(DeliveryPlan {
            commands,
            total_distance,
            original_crow_distance: order.original_crow_distance,
            optimized_crow_distance: order.optimized_crow_distance,
        })
    }
}

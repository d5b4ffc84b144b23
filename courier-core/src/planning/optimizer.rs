//! Greedy reordering of deliveries.
//!
//! The first stop is the delivery furthest from the depot; every following
//! stop is the nearest remaining one. The result is only kept when its
//! straight-line round trip is strictly shorter than the given order.

use std::iter;

use itertools::Itertools;
use log::debug;
use serde::Serialize;

use crate::{DeliveryRequest, Geometry, Miles, Position};

/// Delivery order chosen by the optimizer with both crow-flight totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizedOrder {
    pub deliveries: Vec<DeliveryRequest>,
    /// Round trip in the requested order
    pub original_crow_distance: Miles,
    /// Round trip in the greedy candidate order
    pub optimized_crow_distance: Miles,
}

impl OptimizedOrder {
    /// `true` if the candidate order replaced the requested one
    pub fn reordered(&self) -> bool {
        self.optimized_crow_distance < self.original_crow_distance
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DeliveryOptimizer<G> {
    geometry: G,
}

impl<G: Geometry> DeliveryOptimizer<G> {
    pub fn new(geometry: G) -> Self {
        Self { geometry }
    }

    /// Straight-line length of depot -> deliveries... -> depot
    pub fn crow_distance(&self, depot: &Position, deliveries: &[DeliveryRequest]) -> Miles {
        iter::once(depot)
            .chain(deliveries.iter().map(|delivery| &delivery.location))
            .chain(iter::once(depot))
            .tuple_windows()
            .map(|(from, to)| self.geometry.distance(from, to))
            .sum()
    }

    /// Reorders `deliveries` if the greedy candidate is strictly shorter
    pub fn optimize(&self, depot: &Position, deliveries: &[DeliveryRequest]) -> OptimizedOrder {
        let original_crow_distance = self.crow_distance(depot, deliveries);
        let candidate = self.candidate_order(depot, deliveries);
        let optimized_crow_distance = self.crow_distance(depot, &candidate);

        let deliveries = if optimized_crow_distance < original_crow_distance {
            debug!(
                "Reordered {} deliveries: {original_crow_distance:.2} -> {optimized_crow_distance:.2} miles",
                candidate.len()
            );
            candidate
        } else {
            debug!("Keeping requested delivery order ({original_crow_distance:.2} miles)");
            deliveries.to_vec()
        };

        OptimizedOrder {
            deliveries,
            original_crow_distance,
            optimized_crow_distance,
        }
    }

    /// Requested order with both totals set to its own crow-flight length
    pub fn unchanged(&self, depot: &Position, deliveries: &[DeliveryRequest]) -> OptimizedOrder {
        let distance = self.crow_distance(depot, deliveries);
        OptimizedOrder {
            deliveries: deliveries.to_vec(),
            original_crow_distance: distance,
            optimized_crow_distance: distance,
        }
    }

    fn candidate_order(
        &self,
        depot: &Position,
        deliveries: &[DeliveryRequest],
    ) -> Vec<DeliveryRequest> {
        let mut pool: Vec<&DeliveryRequest> = deliveries.iter().collect();
        let mut order = Vec::with_capacity(pool.len());

        let Some(furthest) = self.pick(&pool, depot, |distance, best| distance > best) else {
            return order;
        };
        let mut current = pool.remove(furthest);
        order.push(current.clone());

        while let Some(nearest) = self.pick(&pool, &current.location, |distance, best| distance < best) {
            current = pool.remove(nearest);
            order.push(current.clone());
        }

        order
    }

    /// Index of the first delivery whose distance from `from` beats every
    /// earlier one according to `better`
    fn pick<F>(&self, pool: &[&DeliveryRequest], from: &Position, better: F) -> Option<usize>
    where
        F: Fn(Miles, Miles) -> bool,
    {
        let mut best: Option<(usize, Miles)> = None;
        for (index, delivery) in pool.iter().enumerate() {
            let distance = self.geometry.distance(from, &delivery.location);
            match best {
                Some((_, best_distance)) if !better(distance, best_distance) => {}
                _ => best = Some((index, distance)),
            }
        }
        best.map(|(index, _)| index)
    }
}

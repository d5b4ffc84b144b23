//! Point-to-point routing over the street index

mod astar;

use serde::Serialize;

use crate::{Error, Geometry, Miles, Position, Segment, StreetIndex};

/// Ordered segments from a start to an end position
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Route {
    pub segments: Vec<Segment>,
    /// Sum of segment lengths
    pub distance: Miles,
}

impl Route {
    /// `true` if start and end are the same position
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Shortest-path router backed by an A* search
#[derive(Debug, Clone)]
pub struct PointToPointRouter<'a, G> {
    index: &'a StreetIndex,
    geometry: G,
}

impl<'a, G: Geometry> PointToPointRouter<'a, G> {
    pub fn new(index: &'a StreetIndex, geometry: G) -> Self {
        Self { index, geometry }
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Finds a route from `start` to `end`
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadCoordinate`] if either position is not in the
    /// street index, and [`Error::NoRoute`] if the two are not connected
    pub fn route(&self, start: &Position, end: &Position) -> Result<Route, Error> {
        for position in [start, end] {
            if !self.index.contains(position) {
                return Err(Error::BadCoordinate(position.clone()));
            }
        }

        if start == end {
            return Ok(Route::default());
        }

        let path = astar::astar(self.index, &self.geometry, start, end).ok_or_else(|| {
            Error::NoRoute {
                from: start.clone(),
                to: end.clone(),
            }
        })?;

        let distance = path.iter().map(|segment| self.geometry.length(segment)).sum();
        let segments = path.into_iter().cloned().collect();

        Ok(Route { segments, distance })
    }
}

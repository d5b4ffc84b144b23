//! Geometry capability used by routing and planning.
//!
//! Bearings follow the mathematical convention: degrees in `[0, 360)`,
//! 0 = east, increasing counter-clockwise (90 = north). A turn angle in
//! `(0, 180)` is a left turn and `[180, 360)` a right turn.

use geo::{Bearing, Distance, Euclidean, Haversine, Point};

use crate::{Miles, Position, Segment};

const METERS_PER_MILE: f64 = 1609.344;

/// Distance and direction primitives over positions and segments.
///
/// `distance` must never exceed the road distance between two positions,
/// since the router uses it as its A* heuristic.
pub trait Geometry {
    /// Straight-line distance between two positions
    fn distance(&self, from: &Position, to: &Position) -> Miles;

    /// Heading of a segment, degrees in `[0, 360)`
    fn bearing(&self, segment: &Segment) -> f64;

    /// Angular change from heading along `from` to heading along `to`,
    /// degrees in `[0, 360)`
    fn turn_angle(&self, from: &Segment, to: &Segment) -> f64 {
        (self.bearing(to) - self.bearing(from)).rem_euclid(360.0)
    }

    /// Length of a segment
    fn length(&self, segment: &Segment) -> Miles {
        self.distance(&segment.start, &segment.end)
    }
}

impl<G: Geometry + ?Sized> Geometry for &G {
    fn distance(&self, from: &Position, to: &Position) -> Miles {
        (**self).distance(from, to)
    }

    fn bearing(&self, segment: &Segment) -> f64 {
        (**self).bearing(segment)
    }

    fn turn_angle(&self, from: &Segment, to: &Segment) -> f64 {
        (**self).turn_angle(from, to)
    }

    fn length(&self, segment: &Segment) -> Miles {
        (**self).length(segment)
    }
}

/// Great-circle geometry on the earth's surface
#[derive(Debug, Clone, Copy, Default)]
pub struct GreatCircle;

impl Geometry for GreatCircle {
    fn distance(&self, from: &Position, to: &Position) -> Miles {
        Haversine.distance(from.point(), to.point()) / METERS_PER_MILE
    }

    fn bearing(&self, segment: &Segment) -> f64 {
        // geo reports compass bearings (0 = north, clockwise)
        let compass = Haversine.bearing(segment.start.point(), segment.end.point());
        (90.0 - compass).rem_euclid(360.0)
    }
}

/// Flat geometry treating (longitude, latitude) as plane coordinates.
///
/// Distances are in plane units reported as miles; useful for synthetic maps.
#[derive(Debug, Clone, Copy, Default)]
pub struct Planar;

impl Geometry for Planar {
    fn distance(&self, from: &Position, to: &Position) -> Miles {
        Euclidean.distance(from.point(), to.point())
    }

    fn bearing(&self, segment: &Segment) -> f64 {
        let delta: Point<f64> = segment.end.point() - segment.start.point();
        delta.y().atan2(delta.x()).to_degrees().rem_euclid(360.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(start: (f64, f64), end: (f64, f64)) -> Segment {
        Segment::new(
            Position::from_degrees(start.0, start.1),
            Position::from_degrees(end.0, end.1),
            "Test St",
        )
    }

    #[test]
    fn planar_bearings() {
        assert!((Planar.bearing(&seg((0.0, 0.0), (0.0, 1.0))) - 0.0).abs() < 1e-9);
        assert!((Planar.bearing(&seg((0.0, 0.0), (1.0, 0.0))) - 90.0).abs() < 1e-9);
        assert!((Planar.bearing(&seg((0.0, 0.0), (0.0, -1.0))) - 180.0).abs() < 1e-9);
        assert!((Planar.bearing(&seg((0.0, 0.0), (-1.0, 0.0))) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn planar_distance() {
        let a = Position::from_degrees(0.0, 0.0);
        let b = Position::from_degrees(3.0, 4.0);
        assert!((Planar.distance(&a, &b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn turn_angles() {
        let east = seg((0.0, 0.0), (0.0, 1.0));
        let north = seg((0.0, 1.0), (1.0, 1.0));
        let south = seg((0.0, 1.0), (-1.0, 1.0));

        assert!((Planar.turn_angle(&east, &north) - 90.0).abs() < 1e-9);
        assert!((Planar.turn_angle(&east, &south) - 270.0).abs() < 1e-9);
        assert!(Planar.turn_angle(&east, &east) < 1e-9);
    }

    #[test]
    fn great_circle_distance_in_miles() {
        // One degree of latitude is roughly 69 miles
        let a = Position::from_degrees(34.0, -118.0);
        let b = Position::from_degrees(35.0, -118.0);
        let miles = GreatCircle.distance(&a, &b);
        assert!((miles - 69.1).abs() < 0.5, "got {miles}");
    }

    #[test]
    fn great_circle_bearing_uses_east_counter_clockwise() {
        let north = seg((34.0, -118.0), (34.01, -118.0));
        let east = seg((34.0, -118.0), (34.0, -117.99));

        assert!((GreatCircle.bearing(&north) - 90.0).abs() < 0.01);
        let east_bearing = GreatCircle.bearing(&east);
        assert!(east_bearing < 0.01 || east_bearing > 359.99);
    }
}

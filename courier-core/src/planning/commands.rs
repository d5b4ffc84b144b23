//! Compression of routed segments into navigation commands

use crate::model::{CompassDirection, DeliveryCommand, TurnDirection};
use crate::{Geometry, Miles, Segment};

/// Classifies the angle between two headings.
///
/// Angles within `tolerance` degrees of straight ahead are a continuation
/// (for example a street renaming) and produce no turn. Exactly straight
/// ahead is never a turn, even with a zero tolerance.
pub fn classify_turn(angle: f64, tolerance: f64) -> Option<TurnDirection> {
    let angle = angle.rem_euclid(360.0);
    if angle > 0.0 && angle >= tolerance && angle < 180.0 {
        Some(TurnDirection::Left)
    } else if angle >= 180.0 && angle <= 360.0 - tolerance {
        Some(TurnDirection::Right)
    } else {
        None
    }
}

/// Turns the segments of routed legs into proceed/turn commands
#[derive(Debug, Clone, Copy)]
pub(crate) struct CommandBuilder<G> {
    geometry: G,
    straight_tolerance: f64,
}

impl<G: Geometry> CommandBuilder<G> {
    pub(crate) fn new(geometry: G, straight_tolerance: f64) -> Self {
        Self {
            geometry,
            straight_tolerance,
        }
    }

    /// Appends one proceed command per run of same-named segments, with a
    /// turn command in between runs unless the road continues straight
    pub(crate) fn extend_leg(&self, segments: &[Segment], commands: &mut Vec<DeliveryCommand>) {
        let mut previous: Option<&Segment> = None;

        for run in segments.chunk_by(|a, b| a.street == b.street) {
            let (Some(first), Some(last)) = (run.first(), run.last()) else {
                continue;
            };

            if let Some(previous) = previous {
                let angle = self.geometry.turn_angle(previous, first);
                if let Some(direction) = classify_turn(angle, self.straight_tolerance) {
                    commands.push(DeliveryCommand::turn(direction, first.street.as_str()));
                }
            }

            let distance: Miles = run.iter().map(|segment| self.geometry.length(segment)).sum();
            commands.push(DeliveryCommand::proceed(
                CompassDirection::from_bearing(self.geometry.bearing(first)),
                first.street.as_str(),
                distance,
            ));

            previous = Some(last);
        }
    }
}

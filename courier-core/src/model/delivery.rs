//! Delivery requests and the navigation commands of a plan

use std::fmt;

use serde::Serialize;

use super::streets::Position;
use crate::Miles;

/// An item to drop off at a location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryRequest {
    pub item: String,
    pub location: Position,
}

impl DeliveryRequest {
    pub fn new(item: impl Into<String>, location: Position) -> Self {
        Self {
            item: item.into(),
            location,
        }
    }
}

/// Eight-way compass heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompassDirection {
    East,
    Northeast,
    North,
    Northwest,
    West,
    Southwest,
    South,
    Southeast,
}

impl CompassDirection {
    // Counter-clockwise from east, matching the bearing convention
    const SECTORS: [Self; 8] = [
        Self::East,
        Self::Northeast,
        Self::North,
        Self::Northwest,
        Self::West,
        Self::Southwest,
        Self::South,
        Self::Southeast,
    ];

    /// Buckets a bearing (degrees, 0 = east, counter-clockwise) into
    /// 45 degree sectors centered on each direction
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_bearing(bearing: f64) -> Self {
        let shifted = bearing.rem_euclid(360.0) + 22.5;
        let sector = (shifted / 45.0).floor() as usize % Self::SECTORS.len();
        Self::SECTORS[sector]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::East => "east",
            Self::Northeast => "northeast",
            Self::North => "north",
            Self::Northwest => "northwest",
            Self::West => "west",
            Self::Southwest => "southwest",
            Self::South => "south",
            Self::Southeast => "southeast",
        }
    }
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnDirection {
    Left,
    Right,
}

impl fmt::Display for TurnDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Single navigation instruction of a delivery plan
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DeliveryCommand {
    Proceed {
        direction: CompassDirection,
        street: String,
        distance: Miles,
    },
    Turn {
        direction: TurnDirection,
        street: String,
    },
    Deliver {
        item: String,
    },
}

impl DeliveryCommand {
    pub fn proceed(direction: CompassDirection, street: impl Into<String>, distance: Miles) -> Self {
        Self::Proceed {
            direction,
            street: street.into(),
            distance,
        }
    }

    pub fn turn(direction: TurnDirection, street: impl Into<String>) -> Self {
        Self::Turn {
            direction,
            street: street.into(),
        }
    }

    pub fn deliver(item: impl Into<String>) -> Self {
        Self::Deliver { item: item.into() }
    }

    /// Human readable instruction, e.g. `Proceed 0.21 miles north on Broxton Avenue`
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DeliveryCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Proceed {
                direction,
                street,
                distance,
            } => write!(f, "Proceed {distance:.2} miles {direction} on {street}"),
            Self::Turn { direction, street } => write!(f, "Turn {direction} on {street}"),
            Self::Deliver { item } => write!(f, "Deliver {item}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bearings_bucket_into_compass_sectors() {
        let expected = [
            (0.0, CompassDirection::East),
            (45.0, CompassDirection::Northeast),
            (90.0, CompassDirection::North),
            (135.0, CompassDirection::Northwest),
            (180.0, CompassDirection::West),
            (225.0, CompassDirection::Southwest),
            (270.0, CompassDirection::South),
            (315.0, CompassDirection::Southeast),
            (359.9, CompassDirection::East),
        ];

        for (bearing, direction) in expected {
            assert_eq!(
                CompassDirection::from_bearing(bearing),
                direction,
                "bearing {bearing}"
            );
        }
    }

    #[test]
    fn sector_boundaries() {
        assert_eq!(CompassDirection::from_bearing(22.4), CompassDirection::East);
        assert_eq!(
            CompassDirection::from_bearing(22.5),
            CompassDirection::Northeast
        );
        assert_eq!(
            CompassDirection::from_bearing(337.4),
            CompassDirection::Southeast
        );
        assert_eq!(CompassDirection::from_bearing(337.5), CompassDirection::East);
        assert_eq!(CompassDirection::from_bearing(-90.0), CompassDirection::South);
    }

    #[test]
    fn descriptions() {
        assert_eq!(
            DeliveryCommand::proceed(CompassDirection::North, "Broxton Avenue", 0.2071)
                .description(),
            "Proceed 0.21 miles north on Broxton Avenue"
        );
        assert_eq!(
            DeliveryCommand::turn(TurnDirection::Left, "Weyburn Avenue").description(),
            "Turn left on Weyburn Avenue"
        );
        assert_eq!(
            DeliveryCommand::deliver("Chicken tenders").description(),
            "Deliver Chicken tenders"
        );
    }

    #[test]
    fn commands_serialize_with_kind_tag() {
        let value = serde_json::to_value(DeliveryCommand::turn(TurnDirection::Right, "Oak Ave"))
            .unwrap();
        assert_eq!(
            value,
            json!({"kind": "turn", "direction": "right", "street": "Oak Ave"})
        );

        let value = serde_json::to_value(DeliveryCommand::proceed(
            CompassDirection::Southwest,
            "Main St",
            1.5,
        ))
        .unwrap();
        assert_eq!(value["direction"], "southwest");
        assert_eq!(value["distance"], 1.5);
    }
}

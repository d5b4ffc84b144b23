//! Street network components - positions and directed segments

use std::fmt;
use std::hash::{Hash, Hasher};

use geo::Point;
use serde::Serialize;

use crate::Error;

/// Geographic coordinate keyed by its textual representation.
///
/// The same literal coordinate appears verbatim at many places in map data,
/// so equality and hashing use the original text only. The parsed numbers are
/// kept alongside for distance and bearing computations.
#[derive(Debug, Clone, Serialize)]
pub struct Position {
    #[serde(rename = "latitude")]
    latitude_text: String,
    #[serde(rename = "longitude")]
    longitude_text: String,
    #[serde(skip)]
    latitude: f64,
    #[serde(skip)]
    longitude: f64,
}

impl Position {
    /// Parses a position from latitude and longitude text
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] if either value is not a finite number
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, Error> {
        let latitude_text = latitude.trim();
        let longitude_text = longitude.trim();

        let parse = |text: &str| {
            text.parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| {
                    Error::InvalidData(format!(
                        "invalid coordinate '{latitude_text} {longitude_text}'"
                    ))
                })
        };

        Ok(Self {
            latitude: parse(latitude_text)?,
            longitude: parse(longitude_text)?,
            latitude_text: latitude_text.to_string(),
            longitude_text: longitude_text.to_string(),
        })
    }

    /// Creates a position from numeric degrees, using their shortest decimal
    /// formatting as the identity text
    pub fn from_degrees(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude_text: latitude.to_string(),
            longitude_text: longitude.to_string(),
            latitude,
            longitude,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude_text(&self) -> &str {
        &self.latitude_text
    }

    pub fn longitude_text(&self) -> &str {
        &self.longitude_text
    }

    /// Position as a `geo` point (x = longitude, y = latitude)
    pub fn point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.latitude_text == other.latitude_text && self.longitude_text == other.longitude_text
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.latitude_text.hash(state);
        self.longitude_text.hash(state);
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude_text, self.longitude_text)
    }
}

/// Directed street segment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Segment {
    pub start: Position,
    pub end: Position,
    /// Street name, shared by every segment of the same street
    pub street: String,
}

impl Segment {
    pub fn new(start: Position, end: Position, street: impl Into<String>) -> Self {
        Self {
            start,
            end,
            street: street.into(),
        }
    }

    /// Same street traversed in the opposite direction
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end.clone(),
            end: self.start.clone(),
            street: self.street.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashSet;

    #[test]
    fn equality_uses_text_not_value() {
        let a = Position::parse("34.0625329", "-118.4470263").unwrap();
        let b = Position::parse("34.0625329", "-118.4470263").unwrap();
        let c = Position::parse("34.06253290", "-118.4470263").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.latitude(), c.latitude());

        let set: HashSet<Position> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn parse_trims_and_rejects_garbage() {
        let p = Position::parse(" 1.5 ", "2").unwrap();
        assert_eq!(p.latitude_text(), "1.5");
        assert_eq!(p.point(), Point::new(2.0, 1.5));

        assert!(matches!(
            Position::parse("north", "2"),
            Err(Error::InvalidData(_))
        ));
        assert!(Position::parse("inf", "2").is_err());
    }

    #[test]
    fn from_degrees_matches_parsed_text() {
        assert_eq!(
            Position::from_degrees(0.5, -1.0),
            Position::parse("0.5", "-1").unwrap()
        );
    }

    #[test]
    fn reversed_segment_swaps_endpoints() {
        let a = Position::from_degrees(0.0, 0.0);
        let b = Position::from_degrees(0.0, 1.0);
        let segment = Segment::new(a.clone(), b.clone(), "Main St");
        let reversed = segment.reversed();

        assert_eq!(reversed.start, b);
        assert_eq!(reversed.end, a);
        assert_eq!(reversed.street, "Main St");
        assert_eq!(reversed.reversed(), segment);
    }
}

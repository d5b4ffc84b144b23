//! Spatial adjacency index over street segments

use hashbrown::HashMap;
use log::info;

use super::components::{Position, Segment};

/// One street of the map: its name and the coordinate pairs of its segments
#[derive(Debug, Clone, PartialEq)]
pub struct StreetRecord {
    pub name: String,
    pub segments: Vec<(Position, Position)>,
}

impl StreetRecord {
    pub fn new(name: impl Into<String>, segments: Vec<(Position, Position)>) -> Self {
        Self {
            name: name.into(),
            segments,
        }
    }
}

/// Mapping from a position to the segments departing from it.
///
/// Streets are implicitly two-way: every record segment is stored forward
/// at its start and reversed at its end. Segments keep insertion order.
/// The index is read-only once built.
#[derive(Debug, Clone, Default)]
pub struct StreetIndex {
    departures: HashMap<Position, Vec<Segment>>,
    segment_count: usize,
}

impl StreetIndex {
    /// Builds the index from street records
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = StreetRecord>,
    {
        let mut index = Self::default();

        for record in records {
            for (start, end) in record.segments {
                let forward = Segment::new(start, end, record.name.as_str());
                let reverse = forward.reversed();

                index.insert(forward);
                index.insert(reverse);
            }
        }

        info!(
            "Built street index with {} positions and {} segments",
            index.position_count(),
            index.segment_count()
        );

        index
    }

    fn insert(&mut self, segment: Segment) {
        self.segment_count += 1;
        self.departures
            .entry(segment.start.clone())
            .or_default()
            .push(segment);
    }

    /// Segments starting at `position`, or `None` for an unknown location
    pub fn segments_from(&self, position: &Position) -> Option<&[Segment]> {
        self.departures.get(position).map(Vec::as_slice)
    }

    pub fn contains(&self, position: &Position) -> bool {
        self.departures.contains_key(position)
    }

    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.departures.keys()
    }

    /// Number of distinct positions with at least one departing segment
    pub fn position_count(&self) -> usize {
        self.departures.len()
    }

    /// Number of directed segments, reverse segments included
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    pub fn is_empty(&self) -> bool {
        self.departures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(lat: &str, lon: &str) -> Position {
        Position::parse(lat, lon).unwrap()
    }

    fn sample_index() -> StreetIndex {
        StreetIndex::build([
            StreetRecord::new(
                "Main St",
                vec![(pos("0", "0"), pos("0", "1")), (pos("0", "1"), pos("0", "2"))],
            ),
            StreetRecord::new("Oak Ave", vec![(pos("0", "1"), pos("1", "1"))]),
        ])
    }

    #[test]
    fn stores_forward_and_reverse_segments() {
        let index = sample_index();

        assert_eq!(index.position_count(), 4);
        assert_eq!(index.segment_count(), 6);

        let from_origin = index.segments_from(&pos("0", "0")).unwrap();
        assert_eq!(from_origin.len(), 1);
        assert_eq!(from_origin[0].end, pos("0", "1"));

        let from_end = index.segments_from(&pos("1", "1")).unwrap();
        assert_eq!(from_end.len(), 1);
        assert_eq!(from_end[0].end, pos("0", "1"));
        assert_eq!(from_end[0].street, "Oak Ave");
    }

    #[test]
    fn keeps_insertion_order_at_shared_positions() {
        let index = sample_index();
        let streets: Vec<(&str, &Position)> = index
            .segments_from(&pos("0", "1"))
            .unwrap()
            .iter()
            .map(|s| (s.street.as_str(), &s.end))
            .collect();

        assert_eq!(
            streets,
            vec![
                ("Main St", &pos("0", "0")),
                ("Main St", &pos("0", "2")),
                ("Oak Ave", &pos("1", "1")),
            ]
        );
    }

    #[test]
    fn lookup_is_by_exact_text() {
        let index = sample_index();

        assert!(index.contains(&pos("0", "1")));
        assert!(!index.contains(&pos("0.0", "1")));
        assert!(index.segments_from(&pos("0", "1.0")).is_none());
    }

    #[test]
    fn empty_index() {
        let index = StreetIndex::build(Vec::new());
        assert!(index.is_empty());
        assert_eq!(index.positions().count(), 0);
    }
}

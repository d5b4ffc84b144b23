//! Street map text format:
//!
//! ```text
//! <street name>
//! <number of segments>
//! <start lat> <start lon> <end lat> <end lon>
//! ...
//! ```
//!
//! Blocks repeat until the end of input. Coordinate text is kept verbatim
//! since positions are identified by it.

use std::io::BufRead;
use std::path::Path;

use log::info;

use super::open_file;
use crate::{Error, Position, StreetIndex, model::StreetRecord};

/// Reads a street map file and builds its index
///
/// # Errors
///
/// Returns an error if the file cannot be read or is malformed
pub fn load_street_map(path: impl AsRef<Path>) -> Result<StreetIndex, Error> {
    let path = path.as_ref();
    info!("Loading street map: {}", path.display());
    parse_street_map(open_file(path)?)
}

/// Parses street map text and builds its index
///
/// # Errors
///
/// Returns [`Error::InvalidData`] with the offending line number if a segment
/// count or coordinate line is malformed or missing
pub fn parse_street_map<R: BufRead>(reader: R) -> Result<StreetIndex, Error> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(offset, line)| line.map(|text| (offset + 1, text)));
    let mut records = Vec::new();

    while let Some(line) = lines.next() {
        let (number, name) = line?;
        let name = name.trim();
        if name.is_empty() {
            continue;
        }

        let (count_number, count_text) = lines.next().transpose()?.ok_or_else(|| {
            Error::InvalidData(format!("line {number}: street '{name}' has no segment count"))
        })?;
        let count: usize = count_text.trim().parse().map_err(|_| {
            Error::InvalidData(format!(
                "line {count_number}: invalid segment count '{}'",
                count_text.trim()
            ))
        })?;

        let mut segments = Vec::with_capacity(count);
        for _ in 0..count {
            let (segment_number, text) = lines.next().transpose()?.ok_or_else(|| {
                Error::InvalidData(format!(
                    "street '{name}' ends before its {count} segments"
                ))
            })?;
            segments.push(parse_segment(segment_number, &text)?);
        }

        records.push(StreetRecord::new(name, segments));
    }

    info!("Parsed {} streets", records.len());
    Ok(StreetIndex::build(records))
}

fn parse_segment(number: usize, text: &str) -> Result<(Position, Position), Error> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let [start_lat, start_lon, end_lat, end_lon] = tokens[..] else {
        return Err(Error::InvalidData(format!(
            "line {number}: expected 4 coordinates, found {}",
            tokens.len()
        )));
    };

    let position = |lat: &str, lon: &str| {
        Position::parse(lat, lon).map_err(|_| {
            Error::InvalidData(format!("line {number}: invalid coordinate '{lat} {lon}'"))
        })
    };

    Ok((position(start_lat, start_lon)?, position(end_lat, end_lon)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
10th Helena Drive
1
34.0547000 -118.4794734 34.0544590 -118.4801137
12th Helena Drive
2
34.0549190 -118.4795303 34.0548286 -118.4797560
34.0548286 -118.4797560 34.0547000 -118.4794734
";

    #[test]
    fn parses_streets_in_both_directions() {
        let index = parse_street_map(SAMPLE.as_bytes()).unwrap();

        assert_eq!(index.segment_count(), 6);
        assert_eq!(index.position_count(), 4);

        let shared = Position::parse("34.0547000", "-118.4794734").unwrap();
        let departures = index.segments_from(&shared).unwrap();
        let streets: Vec<&str> = departures.iter().map(|s| s.street.as_str()).collect();
        assert_eq!(streets, vec!["10th Helena Drive", "12th Helena Drive"]);
        assert_eq!(
            departures[1].end,
            Position::parse("34.0548286", "-118.4797560").unwrap()
        );
    }

    #[test]
    fn coordinate_text_is_kept_verbatim() {
        let index = parse_street_map(SAMPLE.as_bytes()).unwrap();

        assert!(index.contains(&Position::parse("34.0547000", "-118.4794734").unwrap()));
        assert!(!index.contains(&Position::parse("34.0547", "-118.4794734").unwrap()));
    }

    #[test]
    fn tolerates_blank_lines_and_crlf() {
        let text = "Main St\r\n1\r\n0 0 0 1\r\n\r\nOak Ave\r\n1\r\n0 1 1 1\r\n";
        let index = parse_street_map(text.as_bytes()).unwrap();

        let corner = Position::parse("0", "1").unwrap();
        let departures = index.segments_from(&corner).unwrap();
        assert_eq!(departures.len(), 2);
        assert_eq!(departures[1].street, "Oak Ave");
    }

    #[test]
    fn empty_map() {
        let index = parse_street_map("".as_bytes()).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn malformed_input_reports_line() {
        let cases = [
            ("Main St\n", "no segment count"),
            ("Main St\nmany\n", "line 2: invalid segment count"),
            ("Main St\n2\n0 0 0 1\n", "ends before its 2 segments"),
            ("Main St\n1\n0 0 0\n", "line 3: expected 4 coordinates, found 3"),
            ("Main St\n1\n0 0 x 1\n", "line 3: invalid coordinate 'x 1'"),
        ];

        for (text, expected) in cases {
            match parse_street_map(text.as_bytes()) {
                Err(Error::InvalidData(message)) => {
                    assert!(message.contains(expected), "{message:?} vs {expected:?}");
                }
                other => panic!("expected invalid data for {text:?}, got {other:?}"),
            }
        }
    }
}

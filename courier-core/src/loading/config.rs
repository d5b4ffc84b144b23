use serde::{Deserialize, Serialize};

use crate::Error;

/// Settings for delivery planning.
///
/// The geometry is not part of the settings: it is the `G` the planner is
/// constructed with.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Reorder deliveries with the greedy optimizer before routing
    pub optimize_order: bool,
    /// Heading changes closer than this to straight ahead emit no turn
    pub straight_tolerance_degrees: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            optimize_order: true,
            straight_tolerance_degrees: 1.0,
        }
    }
}

impl PlannerConfig {
    /// Checks that settings are in range
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] if the straight tolerance is not within `[0, 90)`
    pub fn validate(&self) -> Result<(), Error> {
        let tolerance = self.straight_tolerance_degrees;
        if !(0.0..90.0).contains(&tolerance) {
            return Err(Error::InvalidData(format!(
                "straight_tolerance_degrees must be within [0, 90), got {tolerance}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PlannerConfig::default();
        assert!(config.optimize_order);
        assert_eq!(config.straight_tolerance_degrees, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: PlannerConfig =
            serde_json::from_str(r#"{"optimize_order": false}"#).unwrap();
        assert!(!config.optimize_order);
        assert_eq!(config.straight_tolerance_degrees, 1.0);
    }

    #[test]
    fn out_of_range_tolerance() {
        for tolerance in [-1.0, 90.0, f64::NAN] {
            let config = PlannerConfig {
                straight_tolerance_degrees: tolerance,
                ..PlannerConfig::default()
            };
            assert!(config.validate().is_err(), "tolerance {tolerance}");
        }
    }
}

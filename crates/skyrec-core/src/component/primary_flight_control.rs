//! Primary flight controls

use serde::{Deserialize, Serialize};

use crate::interpolation;
use crate::sample::{SampleData, Timestamp};

/// Rudder, elevator and aileron positions at one instant, normalized
/// [-1.0, 1.0].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrimaryFlightControlData {
    /// Timestamp [ms] since recording start.
    pub timestamp: Timestamp,
    /// Rudder position.
    pub rudder_position: f64,
    /// Elevator position.
    pub elevator_position: f64,
    /// Aileron position.
    pub aileron_position: f64,
}

impl SampleData for PrimaryFlightControlData {
    fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    fn set_timestamp(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    fn blend(_p0: &Self, p1: &Self, p2: &Self, _p3: &Self, mu: f64) -> Self {
        Self {
            timestamp: p1.timestamp,
            rudder_position: interpolation::linear(p1.rudder_position, p2.rudder_position, mu),
            elevator_position: interpolation::linear(
                p1.elevator_position,
                p2.elevator_position,
                mu,
            ),
            aileron_position: interpolation::linear(p1.aileron_position, p2.aileron_position, mu),
        }
    }
}

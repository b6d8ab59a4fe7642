//! Secondary flight controls

use serde::{Deserialize, Serialize};

use crate::interpolation;
use crate::sample::{SampleData, Timestamp};

/// Flaps and spoilers at one instant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecondaryFlightControlData {
    /// Timestamp [ms] since recording start.
    pub timestamp: Timestamp,
    /// Left leading edge flaps position [percent].
    pub left_leading_edge_flaps_position: f64,
    /// Right leading edge flaps position [percent].
    pub right_leading_edge_flaps_position: f64,
    /// Left trailing edge flaps position [percent].
    pub left_trailing_edge_flaps_position: f64,
    /// Right trailing edge flaps position [percent].
    pub right_trailing_edge_flaps_position: f64,
    /// Spoilers handle position [percent].
    pub spoilers_handle_percent: f64,
    /// Flaps handle detent index.
    pub flaps_handle_index: i32,
    /// Whether the spoilers are armed.
    pub spoilers_armed: bool,
}

impl SampleData for SecondaryFlightControlData {
    fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    fn set_timestamp(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    fn blend(_p0: &Self, p1: &Self, p2: &Self, _p3: &Self, mu: f64) -> Self {
        Self {
            timestamp: p1.timestamp,
            left_leading_edge_flaps_position: interpolation::linear(
                p1.left_leading_edge_flaps_position,
                p2.left_leading_edge_flaps_position,
                mu,
            ),
            right_leading_edge_flaps_position: interpolation::linear(
                p1.right_leading_edge_flaps_position,
                p2.right_leading_edge_flaps_position,
                mu,
            ),
            left_trailing_edge_flaps_position: interpolation::linear(
                p1.left_trailing_edge_flaps_position,
                p2.left_trailing_edge_flaps_position,
                mu,
            ),
            right_trailing_edge_flaps_position: interpolation::linear(
                p1.right_trailing_edge_flaps_position,
                p2.right_trailing_edge_flaps_position,
                mu,
            ),
            spoilers_handle_percent: interpolation::linear(
                p1.spoilers_handle_percent,
                p2.spoilers_handle_percent,
                mu,
            ),
            // The handle index and armed state are discrete
            flaps_handle_index: p1.flaps_handle_index,
            spoilers_armed: p1.spoilers_armed,
        }
    }
}

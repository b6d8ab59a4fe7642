//! Handles, brakes and similar levers

use serde::{Deserialize, Serialize};

use crate::interpolation;
use crate::sample::{SampleData, Timestamp};

/// Gear handle, brakes, water rudder, tailhook and canopy at one instant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AircraftHandleData {
    /// Timestamp [ms] since recording start.
    pub timestamp: Timestamp,
    /// Left brake position, normalized [-1.0, 1.0].
    pub brake_left_position: f64,
    /// Right brake position, normalized [-1.0, 1.0].
    pub brake_right_position: f64,
    /// Water rudder handle position, normalized [-1.0, 1.0].
    pub water_rudder_handle_position: f64,
    /// Tailhook extension [percent].
    pub tailhook_position: f64,
    /// Canopy opening [percent].
    pub canopy_open: f64,
    /// Whether the gear handle is down.
    pub gear_handle_position: bool,
    /// Whether the smoke system is enabled.
    pub smoke_enabled: bool,
}

impl SampleData for AircraftHandleData {
    fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    fn set_timestamp(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    fn blend(_p0: &Self, p1: &Self, p2: &Self, _p3: &Self, mu: f64) -> Self {
        Self {
            timestamp: p1.timestamp,
            brake_left_position: interpolation::linear(
                p1.brake_left_position,
                p2.brake_left_position,
                mu,
            ),
            brake_right_position: interpolation::linear(
                p1.brake_right_position,
                p2.brake_right_position,
                mu,
            ),
            water_rudder_handle_position: interpolation::linear(
                p1.water_rudder_handle_position,
                p2.water_rudder_handle_position,
                mu,
            ),
            tailhook_position: interpolation::linear(
                p1.tailhook_position,
                p2.tailhook_position,
                mu,
            ),
            canopy_open: interpolation::linear(p1.canopy_open, p2.canopy_open, mu),
            // Handle states are discrete
            gear_handle_position: p1.gear_handle_position,
            smoke_enabled: p1.smoke_enabled,
        }
    }
}

//! Aircraft position and attitude

use serde::{Deserialize, Serialize};

use crate::interpolation;
use crate::sample::{SampleData, Timestamp};

const TENSION: f64 = 0.0;

/// Position and attitude of the aircraft at one instant.
///
/// Position timelines are interpolated within an infinite window, in order
/// to take imported sparse flight plans into account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionData {
    /// Timestamp [ms] since recording start.
    pub timestamp: Timestamp,
    /// Latitude [degrees], no discontinuity at ±90.
    pub latitude: f64,
    /// Longitude [degrees], discontinuity at the ±180 meridian.
    pub longitude: f64,
    /// True altitude above mean sea level [feet].
    pub altitude: f64,
    /// Altimeter reading [feet]; display-only, so linear is sufficient.
    pub indicated_altitude: f64,
    /// Pitch [degrees].
    pub pitch: f64,
    /// Bank [degrees], circular over ±180.
    pub bank: f64,
    /// True heading [degrees], circular over [0, 360).
    pub true_heading: f64,
    /// Body velocity X (lateral) [feet/s].
    pub velocity_body_x: f64,
    /// Body velocity Y (vertical) [feet/s].
    pub velocity_body_y: f64,
    /// Body velocity Z (longitudinal) [feet/s].
    pub velocity_body_z: f64,
    /// Whether the aircraft is on the ground.
    pub on_ground: bool,
}

impl SampleData for PositionData {
    fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    fn set_timestamp(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    fn blend(p0: &Self, p1: &Self, p2: &Self, p3: &Self, mu: f64) -> Self {
        Self {
            timestamp: p1.timestamp,
            latitude: interpolation::hermite(
                p0.latitude,
                p1.latitude,
                p2.latitude,
                p3.latitude,
                mu,
                TENSION,
            ),
            longitude: interpolation::hermite180(
                p0.longitude,
                p1.longitude,
                p2.longitude,
                p3.longitude,
                mu,
                TENSION,
            ),
            altitude: interpolation::hermite(
                p0.altitude,
                p1.altitude,
                p2.altitude,
                p3.altitude,
                mu,
                TENSION,
            ),
            indicated_altitude: interpolation::linear(
                p1.indicated_altitude,
                p2.indicated_altitude,
                mu,
            ),
            pitch: interpolation::hermite(p0.pitch, p1.pitch, p2.pitch, p3.pitch, mu, TENSION),
            bank: interpolation::hermite180(p0.bank, p1.bank, p2.bank, p3.bank, mu, TENSION),
            true_heading: interpolation::hermite360(
                p0.true_heading,
                p1.true_heading,
                p2.true_heading,
                p3.true_heading,
                mu,
                TENSION,
            ),
            velocity_body_x: interpolation::linear(p1.velocity_body_x, p2.velocity_body_x, mu),
            velocity_body_y: interpolation::linear(p1.velocity_body_y, p2.velocity_body_y, mu),
            velocity_body_z: interpolation::linear(p1.velocity_body_z, p2.velocity_body_z, mu),
            // Discrete: copied from the earlier bracketing sample
            on_ground: p1.on_ground,
        }
    }
}

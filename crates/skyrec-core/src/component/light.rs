//! Aircraft lights

use serde::{Deserialize, Serialize};

use crate::sample::{SampleData, Timestamp};

/// Bitmask constants for [`LightData::light_states`].
pub mod light_state {
    /// Navigation lights.
    pub const NAVIGATION: u32 = 1 << 0;
    /// Beacon.
    pub const BEACON: u32 = 1 << 1;
    /// Landing lights.
    pub const LANDING: u32 = 1 << 2;
    /// Taxi lights.
    pub const TAXI: u32 = 1 << 3;
    /// Strobes.
    pub const STROBE: u32 = 1 << 4;
    /// Panel lighting.
    pub const PANEL: u32 = 1 << 5;
    /// Recognition lights.
    pub const RECOGNITION: u32 = 1 << 6;
    /// Wing lights.
    pub const WING: u32 = 1 << 7;
    /// Logo lights.
    pub const LOGO: u32 = 1 << 8;
    /// Cabin lighting.
    pub const CABIN: u32 = 1 << 9;
}

/// Light switch states at one instant. All fields are discrete: lights are
/// never interpolated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightData {
    /// Timestamp [ms] since recording start.
    pub timestamp: Timestamp,
    /// Combination of [`light_state`] bitmask values.
    pub light_states: u32,
}

impl LightData {
    /// Whether the given [`light_state`] bits are all set.
    pub fn is_on(&self, mask: u32) -> bool {
        self.light_states & mask == mask
    }
}

impl SampleData for LightData {
    fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    fn set_timestamp(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    fn blend(_p0: &Self, p1: &Self, _p2: &Self, _p3: &Self, _mu: f64) -> Self {
        p1.clone()
    }
}

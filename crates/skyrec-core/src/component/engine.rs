//! Engine levers and states

use std::array;

use serde::{Deserialize, Serialize};

use crate::interpolation;
use crate::sample::{SampleData, Timestamp};

/// Lever positions and engine states for up to four engines at one instant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineData {
    /// Timestamp [ms] since recording start.
    pub timestamp: Timestamp,
    /// Throttle lever positions, one per engine, normalized [-1.0, 1.0].
    pub throttle_lever_position: [f64; 4],
    /// Propeller lever positions, normalized [-1.0, 1.0].
    pub propeller_lever_position: [f64; 4],
    /// Mixture lever positions [percent].
    pub mixture_lever_position: [f64; 4],
    /// Cowl flap positions [percent].
    pub cowl_flap_position: [f64; 4],
    /// Electrical master battery switches.
    pub electrical_master_battery: [bool; 4],
    /// Engine starter switches.
    pub general_engine_starter: [bool; 4],
    /// Engine combustion states.
    pub general_engine_combustion: [bool; 4],
}

fn lerp_each(p1: &[f64; 4], p2: &[f64; 4], mu: f64) -> [f64; 4] {
    array::from_fn(|engine| interpolation::linear(p1[engine], p2[engine], mu))
}

impl SampleData for EngineData {
    fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    fn set_timestamp(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    fn blend(_p0: &Self, p1: &Self, p2: &Self, _p3: &Self, mu: f64) -> Self {
        Self {
            timestamp: p1.timestamp,
            throttle_lever_position: lerp_each(
                &p1.throttle_lever_position,
                &p2.throttle_lever_position,
                mu,
            ),
            propeller_lever_position: lerp_each(
                &p1.propeller_lever_position,
                &p2.propeller_lever_position,
                mu,
            ),
            mixture_lever_position: lerp_each(
                &p1.mixture_lever_position,
                &p2.mixture_lever_position,
                mu,
            ),
            cowl_flap_position: lerp_each(&p1.cowl_flap_position, &p2.cowl_flap_position, mu),
            // No interpolation for battery and starter/combustion states
            electrical_master_battery: p1.electrical_master_battery,
            general_engine_starter: p1.general_engine_starter,
            general_engine_combustion: p1.general_engine_combustion,
        }
    }
}

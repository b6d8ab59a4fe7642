//! Demo flight generator
//!
//! Generates a synthetic recorded flight (a circular pattern with gentle
//! altitude and attitude changes, lightly jittered) for testing replay, UI
//! work and export without a simulator connection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::aircraft::{Aircraft, AircraftInfo};
use crate::component::{light_state, LightData, PositionData, PrimaryFlightControlData};
use crate::flight::Flight;
use crate::sample::Timestamp;

/// Generates a demo flight: one aircraft flying a left-hand circle.
///
/// `duration` is the recording length [ms], sampled at `period` ms. The
/// generator is seeded, so repeated calls produce the same flight.
pub fn demo_flight(duration: Timestamp, period: Timestamp) -> Flight {
    let mut flight = Flight::default();
    flight.set_title("Demo flight");
    flight.set_description("Synthetic left-hand circle for testing");

    let aircraft = flight.user_aircraft();
    aircraft.set_info(AircraftInfo {
        aircraft_type: "Pitts Special".into(),
        tail_number: "N172SK".into(),
        time_offset: 0,
    });
    populate(aircraft, duration, period);
    flight.touch();
    flight
}

fn populate(aircraft: &mut Aircraft, duration: Timestamp, period: Timestamp) {
    let mut rng = StdRng::seed_from_u64(0x5ec0);
    // One full circle over the whole recording, centered near Lake Zurich
    let (center_latitude, center_longitude) = (47.22, 8.75);
    let radius_degrees = 0.05;

    let count = (duration / period.max(1)) as usize + 1;
    aircraft.position().reserve(count);

    let mut timestamp: Timestamp = 0;
    while timestamp <= duration {
        let phase = timestamp as f64 / duration as f64 * std::f64::consts::TAU;
        let jitter = rng.gen_range(-0.1..0.1);

        aircraft.position().upsert_last(PositionData {
            timestamp,
            latitude: center_latitude + radius_degrees * phase.sin(),
            longitude: center_longitude + radius_degrees * phase.cos(),
            altitude: 3500.0 + 500.0 * phase.sin() + jitter * 10.0,
            indicated_altitude: 3400.0 + 500.0 * phase.sin(),
            pitch: 2.0 + jitter,
            bank: -15.0 + jitter,
            true_heading: (360.0 - phase.to_degrees()).rem_euclid(360.0),
            velocity_body_x: 0.0,
            velocity_body_y: jitter,
            velocity_body_z: 120.0 + jitter,
            on_ground: false,
        });
        aircraft.primary_flight_control().upsert_last(PrimaryFlightControlData {
            timestamp,
            rudder_position: 0.02 * jitter,
            elevator_position: 0.1 + 0.01 * jitter,
            aileron_position: -0.05,
        });

        timestamp += period.max(1);
    }

    aircraft.light().upsert_last(LightData {
        timestamp: 0,
        light_states: light_state::NAVIGATION | light_state::BEACON | light_state::STROBE,
    });
}

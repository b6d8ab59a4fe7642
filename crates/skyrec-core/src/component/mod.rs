//! Component payloads
//!
//! One payload type per physical subsystem of an aircraft: position and
//! attitude, engine, primary and secondary flight controls, handles/brakes
//! and lights. The types differ only in their field shape and in the
//! per-field interpolation policy declared in their
//! [`SampleData::blend`](crate::sample::SampleData::blend) implementation.

mod aircraft_handle;
mod engine;
mod light;
mod position;
mod primary_flight_control;
mod secondary_flight_control;

pub use aircraft_handle::AircraftHandleData;
pub use engine::EngineData;
pub use light::{light_state, LightData};
pub use position::PositionData;
pub use primary_flight_control::PrimaryFlightControlData;
pub use secondary_flight_control::SecondaryFlightControlData;

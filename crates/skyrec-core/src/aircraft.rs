//! Aircraft: one timeline per component

use serde::{Deserialize, Serialize};

use crate::component::{
    AircraftHandleData, EngineData, LightData, PositionData, PrimaryFlightControlData,
    SecondaryFlightControlData,
};
use crate::sample::Timestamp;
use crate::timeline::{Access, Timeline, DEFAULT_INTERPOLATION_WINDOW};

/// Descriptive information about an aircraft, including the per-aircraft
/// time offset used to synchronize formation replay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AircraftInfo {
    /// Aircraft type, e.g. "Pitts Special".
    pub aircraft_type: String,
    /// Tail number.
    pub tail_number: String,
    /// Offset [ms] added to query timestamps during replay, to synchronize
    /// this aircraft with the others in the flight.
    pub time_offset: Timestamp,
}

/// One recorded (or imported) aircraft: a timeline per physical subsystem,
/// plus its [`AircraftInfo`].
///
/// All replay queries go through the aircraft so that the time offset is
/// applied uniformly to every component.
#[derive(Debug, Clone)]
pub struct Aircraft {
    info: AircraftInfo,
    position: Timeline<PositionData>,
    engine: Timeline<EngineData>,
    primary_flight_control: Timeline<PrimaryFlightControlData>,
    secondary_flight_control: Timeline<SecondaryFlightControlData>,
    aircraft_handle: Timeline<AircraftHandleData>,
    light: Timeline<LightData>,
}

impl Aircraft {
    /// Creates an aircraft with empty timelines.
    ///
    /// The position timeline uses an infinite interpolation window (sparse
    /// imported flight plans must still interpolate); all other components
    /// use the default window.
    pub fn new(info: AircraftInfo) -> Self {
        Self {
            info,
            position: Timeline::new(),
            engine: Timeline::with_window(DEFAULT_INTERPOLATION_WINDOW),
            primary_flight_control: Timeline::with_window(DEFAULT_INTERPOLATION_WINDOW),
            secondary_flight_control: Timeline::with_window(DEFAULT_INTERPOLATION_WINDOW),
            aircraft_handle: Timeline::with_window(DEFAULT_INTERPOLATION_WINDOW),
            light: Timeline::with_window(DEFAULT_INTERPOLATION_WINDOW),
        }
    }

    /// The aircraft info.
    pub fn info(&self) -> &AircraftInfo {
        &self.info
    }

    /// Replaces the aircraft info.
    pub fn set_info(&mut self, info: AircraftInfo) {
        self.info = info;
    }

    /// Sets the tail number.
    pub fn set_tail_number(&mut self, tail_number: impl Into<String>) {
        self.info.tail_number = tail_number.into();
    }

    /// The time offset [ms] applied to replay queries.
    pub fn time_offset(&self) -> Timestamp {
        self.info.time_offset
    }

    /// Sets the time offset [ms].
    pub fn set_time_offset(&mut self, time_offset: Timestamp) {
        self.info.time_offset = time_offset;
    }

    /// Shifts the time offset by `delta` ms.
    pub fn add_time_offset(&mut self, delta: Timestamp) {
        self.info.time_offset += delta;
    }

    /// The position timeline.
    pub fn position(&mut self) -> &mut Timeline<PositionData> {
        &mut self.position
    }

    /// The engine timeline.
    pub fn engine(&mut self) -> &mut Timeline<EngineData> {
        &mut self.engine
    }

    /// The primary flight control timeline.
    pub fn primary_flight_control(&mut self) -> &mut Timeline<PrimaryFlightControlData> {
        &mut self.primary_flight_control
    }

    /// The secondary flight control timeline.
    pub fn secondary_flight_control(&mut self) -> &mut Timeline<SecondaryFlightControlData> {
        &mut self.secondary_flight_control
    }

    /// The handle/brake timeline.
    pub fn aircraft_handle(&mut self) -> &mut Timeline<AircraftHandleData> {
        &mut self.aircraft_handle
    }

    /// The light timeline.
    pub fn light(&mut self) -> &mut Timeline<LightData> {
        &mut self.light
    }

    /// Synthesizes the position for `timestamp`, honoring the time offset.
    pub fn interpolate_position(
        &mut self,
        timestamp: Timestamp,
        access: Access,
    ) -> Option<PositionData> {
        self.position
            .interpolate(timestamp, access, self.info.time_offset)
    }

    /// Synthesizes the engine state for `timestamp`.
    pub fn interpolate_engine(&mut self, timestamp: Timestamp, access: Access) -> Option<EngineData> {
        self.engine
            .interpolate(timestamp, access, self.info.time_offset)
    }

    /// Synthesizes the primary flight control state for `timestamp`.
    pub fn interpolate_primary_flight_control(
        &mut self,
        timestamp: Timestamp,
        access: Access,
    ) -> Option<PrimaryFlightControlData> {
        self.primary_flight_control
            .interpolate(timestamp, access, self.info.time_offset)
    }

    /// Synthesizes the secondary flight control state for `timestamp`.
    pub fn interpolate_secondary_flight_control(
        &mut self,
        timestamp: Timestamp,
        access: Access,
    ) -> Option<SecondaryFlightControlData> {
        self.secondary_flight_control
            .interpolate(timestamp, access, self.info.time_offset)
    }

    /// Synthesizes the handle/brake state for `timestamp`.
    pub fn interpolate_aircraft_handle(
        &mut self,
        timestamp: Timestamp,
        access: Access,
    ) -> Option<AircraftHandleData> {
        self.aircraft_handle
            .interpolate(timestamp, access, self.info.time_offset)
    }

    /// Synthesizes the light state for `timestamp`.
    pub fn interpolate_light(&mut self, timestamp: Timestamp, access: Access) -> Option<LightData> {
        self.light
            .interpolate(timestamp, access, self.info.time_offset)
    }

    /// The duration [ms] of this aircraft's recording: the largest last
    /// timestamp across all component timelines, shifted by the time offset
    /// and clamped at 0.
    pub fn duration(&self) -> Timestamp {
        let offset = self.info.time_offset;
        let mut duration: Timestamp = 0;
        let mut consider = |timestamp: Option<Timestamp>| {
            if let Some(timestamp) = timestamp {
                duration = duration.max(timestamp - offset);
            }
        };
        consider(self.position.last().map(|sample| sample.timestamp));
        consider(self.engine.last().map(|sample| sample.timestamp));
        consider(
            self.primary_flight_control
                .last()
                .map(|sample| sample.timestamp),
        );
        consider(
            self.secondary_flight_control
                .last()
                .map(|sample| sample.timestamp),
        );
        consider(self.aircraft_handle.last().map(|sample| sample.timestamp));
        consider(self.light.last().map(|sample| sample.timestamp));
        duration.max(0)
    }

    /// Whether this aircraft has at least one sampled position.
    pub fn has_recording(&self) -> bool {
        !self.position.is_empty()
    }

    /// Clears all timelines (resetting every cursor); the aircraft info is
    /// kept.
    pub fn clear(&mut self) {
        self.position.clear();
        self.engine.clear();
        self.primary_flight_control.clear();
        self.secondary_flight_control.clear();
        self.aircraft_handle.clear();
        self.light.clear();
    }
}

impl Default for Aircraft {
    fn default() -> Self {
        Self::new(AircraftInfo::default())
    }
}

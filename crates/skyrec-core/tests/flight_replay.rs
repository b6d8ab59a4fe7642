use pretty_assertions::assert_eq;

use skyrec_core::aircraft::Aircraft;
use skyrec_core::component::{EngineData, PositionData};
use skyrec_core::flight::Flight;
use skyrec_core::recorder::Recorder;
use skyrec_core::sample::Timestamp;
use skyrec_core::timeline::Access;

/// Populates a position timeline flying due north at one degree of latitude
/// per minute.
fn record_northbound(aircraft: &mut Aircraft, duration: Timestamp, period: Timestamp) {
    let recorder = Recorder::default();
    let mut timestamp = 0;
    while timestamp <= duration {
        recorder.record(
            aircraft.position(),
            timestamp,
            PositionData {
                latitude: timestamp as f64 / 60_000.0,
                true_heading: 0.0,
                altitude: 5000.0,
                ..Default::default()
            },
        );
        timestamp += period;
    }
}

#[test]
fn test_linear_replay_between_samples() {
    let mut flight = Flight::default();
    record_northbound(flight.user_aircraft(), 120_000, 1000);
    flight.touch();

    let aircraft = flight.user_aircraft();
    // Playback tick rate differs from the recording rate
    let mut previous = -1.0;
    for timestamp in (0..=120_000).step_by(330) {
        let sample = aircraft
            .interpolate_position(timestamp, Access::Linear)
            .expect("query within the recording");
        assert!(sample.latitude > previous, "latitude not monotonic");
        assert_eq!(sample.timestamp, timestamp);
        previous = sample.latitude;
    }
}

#[test]
fn test_seek_then_resume_linear() {
    let mut flight = Flight::default();
    record_northbound(flight.user_aircraft(), 60_000, 1000);
    let aircraft = flight.user_aircraft();

    // Scrub to the middle, then resume playback ticks
    let seeked = aircraft.interpolate_position(30_500, Access::Seek).unwrap();
    assert_eq!(seeked.timestamp, 30_500);
    assert!((seeked.latitude - 0.5).abs() < 0.01);

    for timestamp in [30_516, 30_532, 30_548] {
        let sample = aircraft
            .interpolate_position(timestamp, Access::Linear)
            .unwrap();
        assert!(sample.latitude >= seeked.latitude);
    }

    // Rewind all the way back
    let rewound = aircraft.interpolate_position(0, Access::Seek).unwrap();
    assert_eq!(rewound.latitude, 0.0);
}

#[test]
fn test_formation_time_offset_synchronization() {
    let mut flight = Flight::default();
    record_northbound(flight.user_aircraft(), 60_000, 1000);

    // A wingman recorded 10 s later in the same time base
    let mut wingman = Aircraft::default();
    record_northbound(&mut wingman, 60_000, 1000);
    wingman.set_time_offset(10_000);
    let wingman_index = flight.add_aircraft(wingman);

    let lead_latitude = flight
        .user_aircraft()
        .interpolate_position(20_000, Access::Linear)
        .unwrap()
        .latitude;
    let wingman_latitude = flight
        .aircraft_mut(wingman_index)
        .unwrap()
        .interpolate_position(20_000, Access::Linear)
        .unwrap()
        .latitude;

    // The wingman reads its own timeline 10 s ahead
    assert!((wingman_latitude - lead_latitude - 10_000.0 / 60_000.0).abs() < 1e-9);

    // The offset shortens the usable duration
    assert_eq!(flight.aircraft()[wingman_index].duration(), 50_000);
    assert_eq!(flight.total_duration(), 60_000);
}

#[test]
fn test_engine_discrete_fields_are_copied() {
    let mut aircraft = Aircraft::default();
    aircraft
        .engine()
        .push_ordered(vec![
            EngineData {
                timestamp: 0,
                throttle_lever_position: [0.2; 4],
                general_engine_combustion: [false; 4],
                ..Default::default()
            },
            EngineData {
                timestamp: 1000,
                throttle_lever_position: [0.8; 4],
                general_engine_combustion: [true; 4],
                ..Default::default()
            },
        ])
        .unwrap();

    let sample = aircraft.interpolate_engine(500, Access::Linear).unwrap();
    // Levers blend linearly, combustion state holds the earlier sample
    assert!((sample.throttle_lever_position[0] - 0.5).abs() < 1e-9);
    assert_eq!(sample.general_engine_combustion, [false; 4]);

    let sample = aircraft.interpolate_engine(1000, Access::Linear).unwrap();
    assert_eq!(sample.general_engine_combustion, [true; 4]);
}

#[test]
fn test_new_recording_after_clear_replays_from_cold_cursor() {
    let mut flight = Flight::default();
    record_northbound(flight.user_aircraft(), 60_000, 1000);
    // Advance the cursor deep into the old recording
    flight
        .user_aircraft()
        .interpolate_position(55_000, Access::Linear)
        .unwrap();

    flight.clear();
    assert!(!flight.has_recording());

    record_northbound(flight.user_aircraft(), 5000, 1000);
    let sample = flight
        .user_aircraft()
        .interpolate_position(0, Access::Seek)
        .expect("cold cursor must resolve at 0");
    assert_eq!(sample.latitude, 0.0);
}

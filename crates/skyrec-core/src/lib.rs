//! # SkyRec Core Library
//!
//! Core functionality for SkyRec flight recording and replay.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//!
//! This library provides:
//! - Timestamped sample timelines with coalescing upsert and bulk ingest
//! - Adaptive interval search (linear forward scan / pivoted binary search)
//! - Cubic Hermite interpolation with angular wraparound variants
//! - One timeline per aircraft component (position, engine, controls,
//!   handles, lights) behind a single generic engine
//! - Flight/aircraft session model with per-aircraft time offsets
//! - Live-capture recording clock and fixed-period export resampling
//!
//! The presentation layer, the simulator connection, persistence and the
//! import/export format parsers are external collaborators: they push raw
//! samples in, call [`Timeline::interpolate`](timeline::Timeline::interpolate)
//! during replay, and read the ordered samples back out.
//!
//! ## Example
//!
//! ```rust
//! use skyrec_core::component::PositionData;
//! use skyrec_core::timeline::{Access, Timeline};
//!
//! let mut timeline: Timeline<PositionData> = Timeline::new();
//! for (timestamp, altitude) in [(0, 1000.0), (100, 1010.0), (200, 1030.0)] {
//!     timeline.upsert_last(PositionData { timestamp, altitude, ..Default::default() });
//! }
//!
//! // Replay at a timestamp that was never recorded
//! let sample = timeline.interpolate(150, Access::Linear, 0).unwrap();
//! assert!(sample.altitude > 1010.0 && sample.altitude < 1030.0);
//! ```

pub mod aircraft;
pub mod component;
pub mod demo;
pub mod error;
pub mod export;
pub mod flight;
pub mod interpolation;
pub mod recorder;
pub mod sample;
pub mod search;
pub mod timeline;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::aircraft::{Aircraft, AircraftInfo};
    pub use crate::component::{
        AircraftHandleData, EngineData, LightData, PositionData, PrimaryFlightControlData,
        SecondaryFlightControlData,
    };
    pub use crate::error::TimelineError;
    pub use crate::export::{resample, ResamplingPeriod};
    pub use crate::flight::{Flight, FlightMetadata};
    pub use crate::recorder::{Recorder, RecordingClock, SampleRate};
    pub use crate::sample::{SampleData, Timestamp};
    pub use crate::timeline::{Access, Cursor, Timeline};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Live capture
//!
//! Drives sample capture while a recording is active: stamps incoming
//! component payloads with a zero-based timestamp and routes them into the
//! aircraft's timelines. A fixed [`SampleRate`] drops ticks that arrive
//! faster than the recording period; `Auto` records event-based, as fast as
//! data arrives.

use std::time::Instant;

use crate::sample::{SampleData, Timestamp};
use crate::timeline::Timeline;

/// Recording sample rates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SampleRate {
    /// Event-based sampling: every tick is recorded.
    #[default]
    Auto,
    /// 1 Hz.
    Hz1,
    /// 2 Hz.
    Hz2,
    /// 5 Hz.
    Hz5,
    /// 10 Hz.
    Hz10,
    /// 15 Hz.
    Hz15,
    /// 20 Hz.
    Hz20,
    /// 25 Hz.
    Hz25,
    /// 30 Hz.
    Hz30,
    /// 45 Hz.
    Hz45,
    /// 60 Hz.
    Hz60,
}

impl SampleRate {
    /// The recording period [ms], or `None` for event-based sampling.
    pub fn period_millis(self) -> Option<Timestamp> {
        match self {
            SampleRate::Auto => None,
            SampleRate::Hz1 => Some(1000),
            SampleRate::Hz2 => Some(500),
            SampleRate::Hz5 => Some(200),
            SampleRate::Hz10 => Some(100),
            SampleRate::Hz15 => Some(1000 / 15),
            SampleRate::Hz20 => Some(50),
            SampleRate::Hz25 => Some(40),
            SampleRate::Hz30 => Some(1000 / 30),
            SampleRate::Hz45 => Some(1000 / 45),
            SampleRate::Hz60 => Some(1000 / 60),
        }
    }
}

/// Zero-based recording clock.
///
/// Timestamps are milliseconds since [`start`](Self::start); the first
/// sample of a recording is therefore stamped 0 (or close to it), and a
/// simulator-supplied time base can be normalized with
/// [`normalize`](Self::normalize) instead.
#[derive(Debug, Clone, Default)]
pub struct RecordingClock {
    started: Option<Instant>,
    origin: Option<Timestamp>,
}

impl RecordingClock {
    /// Starts (or restarts) the clock at 0.
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
        self.origin = None;
    }

    /// Milliseconds since the clock was started; 0 if it never was.
    pub fn elapsed(&self) -> Timestamp {
        self.started
            .map(|started| started.elapsed().as_millis() as Timestamp)
            .unwrap_or(0)
    }

    /// Normalizes a simulator-supplied timestamp: the first raw timestamp
    /// seen after [`start`](Self::start) becomes 0, all subsequent ones are
    /// shifted by the same delta.
    pub fn normalize(&mut self, raw: Timestamp) -> Timestamp {
        let origin = *self.origin.get_or_insert(raw);
        (raw - origin).max(0)
    }
}

/// Capture state machine: owns the recording clock and the sample-rate
/// limiter.
///
/// Per tick, call [`tick`](Self::tick); when it yields a timestamp, stamp
/// and store each component payload with [`record`](Self::record).
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    clock: RecordingClock,
    sample_rate: SampleRate,
    recording: bool,
    last_timestamp: Option<Timestamp>,
}

impl Recorder {
    /// Creates a recorder with the given sample rate.
    pub fn new(sample_rate: SampleRate) -> Self {
        Self {
            sample_rate,
            ..Default::default()
        }
    }

    /// The configured sample rate.
    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    /// Sets the sample rate.
    pub fn set_sample_rate(&mut self, sample_rate: SampleRate) {
        self.sample_rate = sample_rate;
    }

    /// Starts a recording at timestamp 0.
    pub fn start(&mut self) {
        self.clock.start();
        self.last_timestamp = None;
        self.recording = true;
        tracing::debug!(sample_rate = ?self.sample_rate, "recording started");
    }

    /// Stops the recording; already-captured samples are kept.
    pub fn stop(&mut self) {
        self.recording = false;
        tracing::debug!(duration = self.clock.elapsed(), "recording stopped");
    }

    /// Whether a recording is active.
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Milliseconds since the recording started.
    pub fn elapsed(&self) -> Timestamp {
        self.clock.elapsed()
    }

    /// Announces a capture tick. Yields the timestamp to stamp this tick's
    /// samples with, or `None` while not recording or when the tick arrives
    /// faster than the configured sample rate allows.
    pub fn tick(&mut self) -> Option<Timestamp> {
        if !self.recording {
            return None;
        }
        let timestamp = self.clock.elapsed();
        self.tick_at(timestamp)
    }

    /// [`tick`](Self::tick) with an externally supplied timestamp, e.g. a
    /// normalized simulator time base.
    pub fn tick_at(&mut self, timestamp: Timestamp) -> Option<Timestamp> {
        if !self.recording {
            return None;
        }
        if let (Some(period), Some(last)) = (self.sample_rate.period_millis(), self.last_timestamp)
        {
            if timestamp - last < period {
                return None;
            }
        }
        self.last_timestamp = Some(timestamp);
        Some(timestamp)
    }

    /// Stamps `sample` with `timestamp` and upserts it into `timeline`.
    ///
    /// Repeated samples within the same millisecond coalesce: the last one
    /// wins.
    pub fn record<T: SampleData>(
        &self,
        timeline: &mut Timeline<T>,
        timestamp: Timestamp,
        mut sample: T,
    ) {
        sample.set_timestamp(timestamp);
        timeline.upsert_last(sample);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::PositionData;

    #[test]
    fn test_recorder_state() {
        let mut recorder = Recorder::new(SampleRate::Auto);
        assert!(!recorder.is_recording());
        assert_eq!(recorder.tick(), None);

        recorder.start();
        assert!(recorder.is_recording());
        assert!(recorder.tick().is_some());

        recorder.stop();
        assert_eq!(recorder.tick(), None);
    }

    #[test]
    fn test_sample_rate_limits_ticks() {
        let mut recorder = Recorder::new(SampleRate::Hz10);
        recorder.start();
        assert_eq!(recorder.tick_at(0), Some(0));
        // 100 ms period: ticks at 30 and 90 ms are dropped
        assert_eq!(recorder.tick_at(30), None);
        assert_eq!(recorder.tick_at(90), None);
        assert_eq!(recorder.tick_at(120), Some(120));
    }

    #[test]
    fn test_record_stamps_and_coalesces() {
        let recorder = Recorder::default();
        let mut timeline: Timeline<PositionData> = Timeline::new();
        recorder.record(
            &mut timeline,
            10,
            PositionData {
                altitude: 1000.0,
                ..Default::default()
            },
        );
        recorder.record(
            &mut timeline,
            10,
            PositionData {
                altitude: 1001.0,
                ..Default::default()
            },
        );
        assert_eq!(timeline.len(), 1);
        let sample = timeline.last().unwrap();
        assert_eq!(sample.timestamp, 10);
        assert_eq!(sample.altitude, 1001.0);
    }

    #[test]
    fn test_clock_normalizes_raw_time_base() {
        let mut clock = RecordingClock::default();
        clock.start();
        assert_eq!(clock.normalize(5000), 0);
        assert_eq!(clock.normalize(5016), 16);
        assert_eq!(clock.normalize(5033), 33);
    }
}

//! Export resampling
//!
//! Export format writers consume a timeline at a fixed resampling period:
//! the [`Resampler`] iterates query timestamps from 0 to the timeline's last
//! timestamp and synthesizes one sample per step under
//! [`Access::Export`](crate::timeline::Access), ignoring any per-aircraft
//! time offset. Serialization to a target format stays with the caller.

use crate::sample::{SampleData, Timestamp};
use crate::timeline::{Access, Timeline};

/// Resampling period for data export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResamplingPeriod {
    /// No resampling: the recorded samples are exported as they are.
    Original,
    /// 10 Hz.
    TenHz,
    /// 5 Hz.
    FiveHz,
    /// 2 Hz.
    TwoHz,
    /// 1 Hz.
    #[default]
    OneHz,
    /// One sample every 5 seconds.
    AFifthHz,
    /// One sample every 10 seconds.
    ATenthHz,
}

impl ResamplingPeriod {
    /// The resampling period [ms], or `None` for [`Original`].
    ///
    /// [`Original`]: ResamplingPeriod::Original
    pub fn period_millis(self) -> Option<Timestamp> {
        match self {
            ResamplingPeriod::Original => None,
            ResamplingPeriod::TenHz => Some(100),
            ResamplingPeriod::FiveHz => Some(200),
            ResamplingPeriod::TwoHz => Some(500),
            ResamplingPeriod::OneHz => Some(1000),
            ResamplingPeriod::AFifthHz => Some(5000),
            ResamplingPeriod::ATenthHz => Some(10_000),
        }
    }
}

/// Iterator yielding resampled (or original) samples of one timeline for
/// export.
///
/// Timestamps that fall into a data gap larger than the timeline's
/// interpolation window are skipped rather than yielded as garbage.
pub struct Resampler<'a, T: SampleData> {
    timeline: &'a mut Timeline<T>,
    duration: Timestamp,
    mode: Mode,
}

enum Mode {
    Stored(usize),
    Fixed { next: Timestamp, period: Timestamp },
}

/// Resamples `timeline` at the given period for export.
pub fn resample<T: SampleData>(
    timeline: &mut Timeline<T>,
    period: ResamplingPeriod,
) -> Resampler<'_, T> {
    let duration = timeline
        .last()
        .map(|sample| sample.timestamp())
        .unwrap_or(0);
    let mode = match period.period_millis() {
        Some(period) => Mode::Fixed { next: 0, period },
        None => Mode::Stored(0),
    };
    Resampler {
        timeline,
        duration,
        mode,
    }
}

impl<T: SampleData> Iterator for Resampler<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match &mut self.mode {
            Mode::Stored(index) => {
                let sample = self.timeline.iter().nth(*index)?.clone();
                *index += 1;
                Some(sample)
            }
            Mode::Fixed { next, period } => loop {
                if *next > self.duration || self.timeline.is_empty() {
                    return None;
                }
                let timestamp = *next;
                *next += *period;
                if let Some(sample) = self.timeline.interpolate(timestamp, Access::Export, 0) {
                    return Some(sample);
                }
                // Data gap: skip this step
            },
        }
    }
}

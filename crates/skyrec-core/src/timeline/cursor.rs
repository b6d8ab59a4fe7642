//! Search cursor state

use crate::sample::Timestamp;

/// The intent of a timeline query, governing search-strategy selection and
/// time-offset application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Forward, roughly-continuous playback: the cursor is a forward-scan
    /// hint.
    Linear,
    /// A jump to anywhere (scrub, rewind, fast-forward): resolves the latest
    /// sample at or before the timestamp, with no interpolation-window
    /// assumption.
    Seek,
    /// Deterministic sequential traversal for batch resampling; the
    /// per-aircraft time offset is not applied.
    Export,
}

/// Mutable search-acceleration state attached to a timeline: the last
/// resolved bracket index, the last (adjusted) query timestamp and the last
/// access mode.
///
/// Not part of the persisted data; reset whenever the timeline is cleared or
/// replaced wholesale.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cursor {
    /// Last resolved bracket index, `None` while uninitialized.
    pub index: Option<usize>,
    /// Last adjusted query timestamp.
    pub timestamp: Option<Timestamp>,
    /// Last access mode.
    pub access: Option<Access>,
}

impl Cursor {
    /// Resets the cursor to uninitialized.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

//! Sample timeline and interpolation engine
//!
//! A [`Timeline`] owns the ordered samples of one component of one aircraft,
//! together with the [`Cursor`] that accelerates repeated nearby queries and
//! the memoized result of the most recent query. [`Timeline::interpolate`]
//! answers arbitrary-timestamp queries by resolving the four support samples
//! around the query and blending them with the payload's per-field policy.

mod cursor;

pub use cursor::{Access, Cursor};

use crate::error::TimelineError;
use crate::sample::{SampleData, Timestamp};
use crate::search;

/// The default interpolation window [milliseconds]. Only samples within this
/// window around the query timestamp are considered for interpolation; a
/// larger gap in the data yields no output rather than a blend across the
/// gap.
pub const DEFAULT_INTERPOLATION_WINDOW: Timestamp = 2000;

/// An interpolation window that considers all samples, however sparse.
pub const INFINITE_INTERPOLATION_WINDOW: Timestamp = Timestamp::MAX;

/// An ordered, append/upsert-only sequence of samples for one component,
/// plus the cursor and memo used to answer timestamp queries.
#[derive(Debug, Clone)]
pub struct Timeline<T: SampleData> {
    samples: Vec<T>,
    cursor: Cursor,
    /// Memoized result of the most recent query.
    current: Option<T>,
    interpolation_window: Timestamp,
    search_threshold: Timestamp,
}

impl<T: SampleData> Timeline<T> {
    /// Creates an empty timeline with an infinite interpolation window.
    pub fn new() -> Self {
        Self::with_window(INFINITE_INTERPOLATION_WINDOW)
    }

    /// Creates an empty timeline with the given interpolation window
    /// [milliseconds].
    pub fn with_window(interpolation_window: Timestamp) -> Self {
        Self {
            samples: Vec::new(),
            cursor: Cursor::default(),
            current: None,
            interpolation_window,
            search_threshold: search::BINARY_SEARCH_THRESHOLD,
        }
    }

    /// The forward look-ahead [milliseconds] beyond which a query switches
    /// from linear to binary search.
    pub fn search_threshold(&self) -> Timestamp {
        self.search_threshold
    }

    /// Sets the forward search look-ahead [milliseconds].
    pub fn set_search_threshold(&mut self, threshold: Timestamp) {
        self.search_threshold = threshold;
    }

    /// Inserts `sample` at the end, or replaces the last sample (only) if it
    /// has the same timestamp.
    ///
    /// Use case: recorded samples arrive chronologically, but several may
    /// carry the same timestamp within one tick: the last sample wins.
    pub fn upsert_last(&mut self, sample: T) {
        match self.samples.last_mut() {
            Some(last) if last.timestamp() == sample.timestamp() => *last = sample,
            _ => self.samples.push(sample),
        }
    }

    /// Inserts `sample` at its sorted position, or replaces the existing
    /// sample with the same timestamp, keeping the timeline strictly
    /// ascending.
    ///
    /// Use case: samples inserted in random order (flight augmentation);
    /// prefer [`upsert_last`](Self::upsert_last) for sequential insertion.
    pub fn upsert(&mut self, sample: T) {
        let timestamp = sample.timestamp();
        let index = self
            .samples
            .partition_point(|existing| existing.timestamp() < timestamp);
        match self.samples.get_mut(index) {
            Some(existing) if existing.timestamp() == timestamp => *existing = sample,
            _ => self.samples.insert(index, sample),
        }
        // An insertion shifts indices; the cursor and memo are stale
        self.cursor.reset();
        self.current = None;
    }

    /// Appends an already-ordered, already-deduplicated batch of samples.
    ///
    /// The batch must be strictly ascending and start after the current last
    /// sample; on violation nothing is inserted.
    pub fn push_ordered(
        &mut self,
        samples: impl IntoIterator<Item = T>,
    ) -> Result<(), TimelineError> {
        let samples: Vec<T> = samples.into_iter().collect();
        let mut previous = self.samples.last().map(SampleData::timestamp);
        for sample in &samples {
            if let Some(previous) = previous {
                if sample.timestamp() <= previous {
                    return Err(TimelineError::UnorderedSample {
                        timestamp: sample.timestamp(),
                        previous,
                    });
                }
            }
            previous = Some(sample.timestamp());
        }
        self.samples.extend(samples);
        Ok(())
    }

    /// Replaces the entire sample sequence, resetting the cursor.
    ///
    /// The samples are trusted to be strictly ascending (persistence reload).
    pub fn set_samples(&mut self, samples: Vec<T>) {
        self.samples = samples;
        self.cursor.reset();
        self.current = None;
    }

    /// The first sample, or `None` if the timeline is empty.
    pub fn first(&self) -> Option<&T> {
        self.samples.first()
    }

    /// The last sample, or `None` if the timeline is empty.
    pub fn last(&self) -> Option<&T> {
        self.samples.last()
    }

    /// The number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the timeline holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Read-only ordered iteration, for bulk consumers (persistence, export).
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.samples.iter()
    }

    /// Reserves capacity for at least `additional` more samples.
    pub fn reserve(&mut self, additional: usize) {
        self.samples.reserve(additional);
    }

    /// The currently allocated capacity.
    pub fn capacity(&self) -> usize {
        self.samples.capacity()
    }

    /// Empties the timeline and resets the cursor to uninitialized.
    pub fn clear(&mut self) {
        self.samples.clear();
        self.cursor.reset();
        self.current = None;
    }

    /// Synthesizes a sample for `timestamp`.
    ///
    /// `time_offset` [milliseconds] shifts the query timestamp to
    /// synchronize several aircraft recorded together; it is ignored for
    /// [`Access::Export`]. The adjusted timestamp is clamped at 0.
    ///
    /// Under [`Access::Linear`] and [`Access::Export`] the four support
    /// samples around the adjusted timestamp are blended with the payload's
    /// per-field policy. Under [`Access::Seek`] the latest sample at or
    /// before the adjusted timestamp is returned verbatim.
    ///
    /// Queries never extrapolate: before the first sample the first sample's
    /// values are returned, past the last sample the last sample's values
    /// (within the interpolation window). An empty timeline yields `None`.
    pub fn interpolate(
        &mut self,
        timestamp: Timestamp,
        access: Access,
        time_offset: Timestamp,
    ) -> Option<T> {
        let time_offset = if access == Access::Export {
            0
        } else {
            time_offset
        };
        let adjusted = (timestamp + time_offset).max(0);

        if self.cursor.timestamp == Some(adjusted) && self.cursor.access == Some(access) {
            return self.current.clone();
        }

        let mut index = self.cursor.index;
        let result = match access {
            Access::Linear | Access::Export => support_samples(
                &self.samples,
                adjusted,
                self.interpolation_window,
                &mut index,
                self.search_threshold,
            )
            .map(|[p0, p1, p2, p3]| {
                let mu = normalized_fraction(p1, p2, adjusted);
                let mut data = T::blend(p0, p1, p2, p3, mu);
                data.set_timestamp(adjusted);
                data
            }),
            Access::Seek => {
                // The resolved sample may lie far outside the interpolation
                // window; a seek always lands on recorded data
                index =
                    search::update_start_index(&self.samples, index, adjusted, self.search_threshold);
                index.and_then(|resolved| {
                    let sample = &self.samples[resolved];
                    // Seeking before the first sample finds no data
                    (sample.timestamp() <= adjusted).then(|| {
                        let mut data = sample.clone();
                        data.set_timestamp(adjusted);
                        data
                    })
                })
            }
        };

        self.cursor.index = index;
        self.cursor.timestamp = Some(adjusted);
        self.cursor.access = Some(access);
        self.current = result.clone();
        result
    }
}

impl<T: SampleData> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: SampleData> IntoIterator for &'a Timeline<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Gathers the four support samples around `timestamp`, updating `index` as
/// a side effect.
///
/// At the ends of the series the missing neighbors are padded by repetition:
/// `p0 = p1` at the start, `p2 = p3 = p1` at (or past) the end. Support
/// samples farther than `window` from the query are discarded so that a gap
/// in the data is not blended across.
fn support_samples<'a, T: SampleData>(
    samples: &'a [T],
    timestamp: Timestamp,
    window: Timestamp,
    index: &mut Option<usize>,
    threshold: Timestamp,
) -> Option<[&'a T; 4]> {
    *index = search::update_start_index(samples, *index, timestamp, threshold);
    let resolved = (*index)?;
    let last = samples.len() - 1;

    let p1 = &samples[resolved];
    if timestamp - p1.timestamp() > window {
        // The most recent sample lies too far in the past
        return None;
    }

    let p0 = if resolved > 0 {
        &samples[resolved - 1]
    } else {
        p1
    };
    let (mut p2, mut p3) = if resolved < last {
        let p2 = &samples[resolved + 1];
        let p3 = if resolved + 1 < last {
            &samples[resolved + 2]
        } else {
            p2
        };
        (p2, p3)
    } else {
        // p1 is the last sample
        (p1, p1)
    };
    if p2.timestamp() - timestamp > window {
        // The next sample lies too far in the future: hold p1
        p2 = p1;
        p3 = p1;
    }

    Some([p0, p1, p2, p3])
}

/// The fraction of elapsed time between `p1` and `p2` at `timestamp`,
/// clamped into `[0, 1]`; 0 on a degenerate interval (`p1 == p2`, at or past
/// the last sample).
fn normalized_fraction<T: SampleData>(p1: &T, p2: &T, timestamp: Timestamp) -> f64 {
    let interval = p2.timestamp() - p1.timestamp();
    if interval > 0 {
        (((timestamp - p1.timestamp()) as f64) / (interval as f64)).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolation;

    /// Minimal payload with a single linearly interpolated field.
    #[derive(Debug, Clone, Default, PartialEq)]
    struct LatSample {
        timestamp: Timestamp,
        latitude: f64,
    }

    impl LatSample {
        fn new(timestamp: Timestamp, latitude: f64) -> Self {
            Self {
                timestamp,
                latitude,
            }
        }
    }

    impl SampleData for LatSample {
        fn timestamp(&self) -> Timestamp {
            self.timestamp
        }

        fn set_timestamp(&mut self, timestamp: Timestamp) {
            self.timestamp = timestamp;
        }

        fn blend(_p0: &Self, p1: &Self, p2: &Self, _p3: &Self, mu: f64) -> Self {
            Self {
                timestamp: p1.timestamp,
                latitude: interpolation::linear(p1.latitude, p2.latitude, mu),
            }
        }
    }

    fn ramp() -> Timeline<LatSample> {
        let mut timeline = Timeline::new();
        for (timestamp, latitude) in [(0, 0.0), (10, 1.0), (20, 2.0), (30, 3.0)] {
            timeline.upsert_last(LatSample::new(timestamp, latitude));
        }
        timeline
    }

    #[test]
    fn test_upsert_last_coalesces() {
        let mut timeline = Timeline::new();
        timeline.upsert_last(LatSample::new(100, 1.0));
        timeline.upsert_last(LatSample::new(100, 2.0));
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.last().unwrap().latitude, 2.0);
    }

    #[test]
    fn test_upsert_replaces_anywhere() {
        let mut timeline = ramp();
        timeline.upsert(LatSample::new(10, 7.5));
        assert_eq!(timeline.len(), 4);
        assert_eq!(timeline.iter().nth(1).unwrap().latitude, 7.5);
    }

    #[test]
    fn test_upsert_inserts_in_order() {
        let mut timeline = ramp();
        timeline.upsert(LatSample::new(5, 0.5));
        let timestamps: Vec<Timestamp> =
            timeline.iter().map(SampleData::timestamp).collect();
        assert_eq!(timestamps, vec![0, 5, 10, 20, 30]);
        // Queries elsewhere on the timeline still resolve the right bracket
        assert_eq!(timeline.interpolate(25, Access::Linear, 0).unwrap().latitude, 2.5);
    }

    #[test]
    fn test_upsert_into_empty_timeline() {
        let mut timeline: Timeline<LatSample> = Timeline::new();
        timeline.upsert(LatSample::new(10, 1.0));
        timeline.upsert(LatSample::new(0, 0.0));
        assert_eq!(timeline.first().unwrap().timestamp, 0);
        assert_eq!(timeline.last().unwrap().timestamp, 10);
    }

    #[test]
    fn test_push_ordered_rolls_back() {
        let mut timeline = ramp();
        let result = timeline.push_ordered(vec![
            LatSample::new(40, 4.0),
            LatSample::new(35, 3.5),
        ]);
        assert_eq!(
            result,
            Err(TimelineError::UnorderedSample {
                timestamp: 35,
                previous: 40
            })
        );
        // All-or-nothing: the valid head of the batch was not inserted either
        assert_eq!(timeline.len(), 4);
    }

    #[test]
    fn test_push_ordered_rejects_tail_collision() {
        let mut timeline = ramp();
        let result = timeline.push_ordered(vec![LatSample::new(30, 9.0)]);
        assert!(result.is_err());
        assert_eq!(timeline.last().unwrap().latitude, 3.0);
    }

    #[test]
    fn test_interpolate_linear_ramp() {
        let mut timeline = ramp();
        assert_eq!(timeline.interpolate(5, Access::Linear, 0).unwrap().latitude, 0.5);
        assert_eq!(timeline.interpolate(25, Access::Linear, 0).unwrap().latitude, 2.5);
        // Clamped at both ends
        assert_eq!(timeline.interpolate(100, Access::Linear, 0).unwrap().latitude, 3.0);
        let mut timeline = ramp();
        assert_eq!(timeline.interpolate(-10, Access::Linear, 0).unwrap().latitude, 0.0);
    }

    #[test]
    fn test_interpolate_identity_at_samples() {
        let mut timeline = ramp();
        for (timestamp, latitude) in [(0, 0.0), (10, 1.0), (20, 2.0), (30, 3.0)] {
            let sample = timeline.interpolate(timestamp, Access::Linear, 0).unwrap();
            assert_eq!(sample.latitude, latitude);
            assert_eq!(sample.timestamp, timestamp);
        }
    }

    #[test]
    fn test_interpolate_empty_is_none() {
        let mut timeline: Timeline<LatSample> = Timeline::new();
        assert_eq!(timeline.interpolate(0, Access::Linear, 0), None);
        assert_eq!(timeline.interpolate(0, Access::Seek, 0), None);
    }

    #[test]
    fn test_memoized_result_is_reused() {
        let mut timeline = ramp();
        let first = timeline.interpolate(15, Access::Linear, 0);
        let second = timeline.interpolate(15, Access::Linear, 0);
        assert_eq!(first, second);
        // A different access mode at the same timestamp re-resolves
        let seeked = timeline.interpolate(15, Access::Seek, 0).unwrap();
        assert_eq!(seeked.latitude, 1.0);
    }

    #[test]
    fn test_seek_returns_sample_verbatim() {
        let mut timeline = ramp();
        let sample = timeline.interpolate(25, Access::Seek, 0).unwrap();
        assert_eq!(sample.latitude, 2.0);
        assert_eq!(sample.timestamp, 25);
    }

    #[test]
    fn test_seek_before_first_sample_is_none() {
        let mut timeline = Timeline::new();
        timeline
            .push_ordered(vec![LatSample::new(100, 1.0), LatSample::new(200, 2.0)])
            .unwrap();
        assert_eq!(timeline.interpolate(50, Access::Seek, 0), None);
    }

    #[test]
    fn test_time_offset_applied_except_for_export() {
        let mut timeline = ramp();
        // Offset of +10 ms: querying at 5 reads the timeline at 15
        assert_eq!(timeline.interpolate(5, Access::Linear, 10).unwrap().latitude, 1.5);
        // Export ignores the offset
        assert_eq!(timeline.interpolate(5, Access::Export, 10).unwrap().latitude, 0.5);
        // A negative adjusted timestamp clamps at 0
        assert_eq!(timeline.interpolate(-100, Access::Linear, 10).unwrap().latitude, 0.0);
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut timeline = ramp();
        timeline.interpolate(25, Access::Linear, 0);
        timeline.clear();
        assert!(timeline.is_empty());
        assert_eq!(timeline.interpolate(0, Access::Linear, 0), None);

        // Repopulate from scratch; a cold cursor must resolve correctly
        timeline.upsert_last(LatSample::new(0, 5.0));
        timeline.upsert_last(LatSample::new(10, 6.0));
        let sample = timeline.interpolate(0, Access::Seek, 0).unwrap();
        assert_eq!(sample.latitude, 5.0);
    }

    #[test]
    fn test_interpolation_window_gap() {
        let mut timeline = Timeline::with_window(DEFAULT_INTERPOLATION_WINDOW);
        timeline
            .push_ordered(vec![LatSample::new(0, 0.0), LatSample::new(10_000, 1.0)])
            .unwrap();
        // Within the window after the first sample: the value is held
        assert_eq!(timeline.interpolate(1000, Access::Linear, 0).unwrap().latitude, 0.0);
        // In the middle of the gap, farther than the window from both
        assert_eq!(timeline.interpolate(5000, Access::Linear, 0), None);
        // A seek still lands on recorded data
        assert_eq!(timeline.interpolate(5000, Access::Seek, 0).unwrap().latitude, 0.0);
    }

    #[test]
    fn test_single_sample_is_held() {
        let mut timeline = Timeline::new();
        timeline.upsert_last(LatSample::new(100, 42.0));
        assert_eq!(timeline.interpolate(0, Access::Linear, 0).unwrap().latitude, 42.0);
        assert_eq!(timeline.interpolate(100, Access::Linear, 0).unwrap().latitude, 42.0);
        assert_eq!(timeline.interpolate(500, Access::Linear, 0).unwrap().latitude, 42.0);
    }

    #[test]
    fn test_set_samples_resets_cursor() {
        let mut timeline = ramp();
        timeline.interpolate(25, Access::Linear, 0);
        timeline.set_samples(vec![LatSample::new(0, 9.0)]);
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.interpolate(0, Access::Linear, 0).unwrap().latitude, 9.0);
    }
}

//! Interval search
//!
//! Pure search functions over a slice of samples with ascending timestamps.
//! They locate the index `i` of the bracketing interval
//! `samples[i].timestamp() <= timestamp < samples[i + 1].timestamp()`.
//!
//! [`linear_interval_search`] is intended for small forward steps (normal
//! replay); [`binary_interval_search`] handles jumps anywhere in the
//! timeline. [`update_start_index`] selects between the two based on how far
//! the query moved from the previous resolved index.

use crate::sample::{SampleData, Timestamp};

/// In case we seek more than this far "into the future" we use binary search
/// to find the next bracket (otherwise linear search, assuming that the next
/// bracket is nearby) [milliseconds].
pub const BINARY_SEARCH_THRESHOLD: Timestamp = 3000;

/// Returns the lower index `i` of the interval `[i, i + 1]` bracketing
/// `timestamp`, searching within the index window `[low, high]`.
///
/// Out-of-range timestamps clamp: the first index is returned for timestamps
/// at or before the first sample, the last index for timestamps at or after
/// the last sample. Returns `None` for an empty slice, or when the window
/// does not contain the bracket.
///
/// The window `[low, high]` is caller-supplied, enabling a restricted
/// re-search around a known pivot.
pub fn binary_interval_search<T: SampleData>(
    samples: &[T],
    timestamp: Timestamp,
    low: usize,
    high: usize,
) -> Option<usize> {
    if samples.is_empty() {
        return None;
    }
    let last = samples.len() - 1;
    if timestamp <= samples[0].timestamp() {
        return Some(0);
    }
    if timestamp >= samples[last].timestamp() {
        return Some(last);
    }

    let mut low = low.min(last);
    let mut high = high.min(last);
    while low < high {
        let mid = (low + high) / 2;
        if timestamp < samples[mid].timestamp() {
            high = mid;
        } else if timestamp >= samples[mid + 1].timestamp() {
            if low == mid {
                // Adjacent pair exhausted: only `high` remains a candidate
                low = high;
                break;
            }
            // mid may still be part of the bracketing pair, so the window
            // shrinks to mid (not mid + 1 as in a plain binary search)
            low = mid;
        } else {
            return Some(mid);
        }
    }
    // The window has shrunk to the single candidate `low`; reject it if the
    // bracket lies outside the caller-supplied window
    (samples[low].timestamp() <= timestamp
        && (low == last || timestamp < samples[low + 1].timestamp()))
    .then_some(low)
}

/// Scans forward from `start`, advancing while the *next* sample's timestamp
/// is at or before `timestamp`, stopping at the last index at the latest.
///
/// Returns `None` for an empty slice. Equivalent to
/// [`binary_interval_search`] over the full range, but O(steps) instead of
/// O(log n) for small forward steps.
pub fn linear_interval_search<T: SampleData>(
    samples: &[T],
    timestamp: Timestamp,
    start: usize,
) -> Option<usize> {
    if samples.is_empty() {
        return None;
    }
    let last = samples.len() - 1;
    let mut index = start.min(last);
    while index < last && samples[index + 1].timestamp() <= timestamp {
        index += 1;
    }
    Some(index)
}

/// Resolves the bracketing index for `timestamp`, accelerated by the
/// previously resolved `index`.
///
/// Strategy selection: if the previous index is valid and the timestamp lies
/// at or after it within the forward look-ahead `threshold`, a linear
/// forward scan is used. Otherwise (rewind, large forward jump, or
/// uninitialized index) a binary search runs, restricted to `[0, index]` or
/// `[index, last]` depending on the jump direction.
///
/// Returns `None` only for an empty slice.
pub fn update_start_index<T: SampleData>(
    samples: &[T],
    index: Option<usize>,
    timestamp: Timestamp,
    threshold: Timestamp,
) -> Option<usize> {
    if samples.is_empty() {
        return None;
    }
    let last = samples.len() - 1;
    if timestamp >= samples[last].timestamp() {
        // The timestamp lies at or past the last sample
        return Some(last);
    }

    match index {
        Some(index)
            if timestamp >= samples[index.min(last)].timestamp()
                && timestamp - samples[index.min(last)].timestamp() <= threshold =>
        {
            // The timestamp progressed "only a little" (normal replay)
            linear_interval_search(samples, timestamp, index.min(last))
        }
        Some(index) => {
            let index = index.min(last);
            let (low, high) = if timestamp < samples[index].timestamp() {
                // Rewind: the bracket lies at or before the previous index
                (0, index)
            } else {
                (index, last)
            };
            binary_interval_search(samples, timestamp, low, high)
        }
        None => binary_interval_search(samples, timestamp, 0, last),
    }
}

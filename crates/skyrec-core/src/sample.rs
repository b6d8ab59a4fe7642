//! Sample model
//!
//! Every recorded quantity is a timestamped sample. Timestamps are integer
//! milliseconds, zero-based at the start of the recording and monotonically
//! non-decreasing within a timeline.

/// Milliseconds since the start of the recording.
pub type Timestamp = i64;

/// A timestamped payload stored in a [`Timeline`](crate::timeline::Timeline).
///
/// Implementors declare their per-field interpolation policy in [`blend`]:
/// one call per field, choosing between linear, cubic Hermite (plain or with
/// angular wraparound) and verbatim copy from the earlier bracketing sample
/// for discrete fields.
///
/// [`blend`]: SampleData::blend
pub trait SampleData: Clone + Default {
    /// Timestamp in milliseconds since recording start.
    fn timestamp(&self) -> Timestamp;

    /// Re-stamps the sample, typically with the adjusted query timestamp.
    fn set_timestamp(&mut self, timestamp: Timestamp);

    /// Blends the four support samples into a synthesized sample.
    ///
    /// `p1` and `p2` bracket the query timestamp; `p0` and `p3` provide
    /// tangent context for the cubic policies. `mu` is the normalized
    /// fraction of elapsed time between `p1` and `p2`, in `[0, 1]`.
    ///
    /// The returned sample is not yet stamped; the timeline stamps it with
    /// the adjusted query timestamp.
    fn blend(p0: &Self, p1: &Self, p2: &Self, p3: &Self, mu: f64) -> Self;
}

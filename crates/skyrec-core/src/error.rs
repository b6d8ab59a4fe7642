//! Error types for timeline ingestion

use thiserror::Error;

use crate::sample::Timestamp;

/// Errors that can occur when bulk data is pushed into a timeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimelineError {
    /// A batch sample does not strictly follow its predecessor.
    #[error("sample at {timestamp} ms is not after the previous sample at {previous} ms")]
    UnorderedSample {
        /// The offending sample's timestamp [milliseconds].
        timestamp: Timestamp,
        /// The timestamp it was expected to exceed [milliseconds].
        previous: Timestamp,
    },
}

//! Validation errors raised by the core.

use thiserror::Error;

/// Validation failure for a user-supplied input.
///
/// Every variant is local and recoverable: the operation that raised it
/// leaves the task collection entirely unchanged, and the triggering action
/// is simply not applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// Task title was empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// Raw ETA input was empty.
    #[error("eta must not be empty")]
    EmptyEta,

    /// A duration segment could not be parsed as an unsigned integer.
    #[error("eta segment is not a number: {0:?}")]
    EtaSegment(String),

    /// A duration or total exceeded the representable range of minutes.
    #[error("eta is out of range: {0:?}")]
    EtaOutOfRange(String),

    /// A lane label did not match any of the three status lanes.
    #[error("unknown lane label: {0:?}")]
    UnknownLane(String),
}

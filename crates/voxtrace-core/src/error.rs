//! Error types for voxtrace-rs.

use thiserror::Error;

/// The main error type for voxtrace-rs operations.
///
/// Every error is fatal at the top level: nothing is recovered locally, and
/// the orchestrator's initialization is the single exit-on-failure decision
/// point.
#[derive(Error, Debug)]
pub enum VoxtraceError {
    /// Invalid or missing required configuration (e.g. an empty dataset path).
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Dataset file unreadable, or too few samples for the configured volume.
    #[error("dataset error: {0}")]
    Data(String),

    /// Any failure reported by the tracing backend during initialization or a
    /// per-frame launch.
    #[error("backend error: {0}")]
    Backend(String),
}

/// A specialized Result type for voxtrace-rs operations.
pub type Result<T> = std::result::Result<T, VoxtraceError>;

//! Error types for the path_synth crate

use thiserror::Error;

/// Custom error types for path synthesis
#[derive(Debug, Error)]
pub enum SynthError {
    /// Error from candle bounds that cannot produce a valid path
    #[error("Invalid bounds: {0}")]
    InvalidBounds(String),

    /// Error from invalid synthesizer parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error from a simulated trajectory whose range collapsed to zero
    #[error("Degenerate trajectory: {0}")]
    DegenerateTrajectory(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, SynthError>;

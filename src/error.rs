/// Crate-level error type for beat tracking evaluation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A timestamp is far too large to be in seconds.
    ///
    /// Raised when a value exceeds [`crate::preprocess::MAX_BEAT_TIME`],
    /// typically because sample indices were passed instead of times.
    #[error(
        "{sequence} contain a value of {max_value}, which exceeds {limit} s; \
         times look like samples rather than seconds"
    )]
    InvalidUnits {
        sequence: &'static str,
        max_value: f64,
        limit: f64,
    },

    /// Invalid parameter value.
    #[error("invalid parameter `{name}`: got {value}, {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: &'static str,
    },

    /// Database evaluation received fewer annotation tracks than beat tracks.
    #[error("not enough annotation tracks: {beats} beat tracks but {annotations} annotation tracks")]
    LengthMismatch { beats: usize, annotations: usize },
}

/// Convenience Result type for beat evaluation operations.
pub type Result<T> = std::result::Result<T, Error>;

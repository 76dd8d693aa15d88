use thiserror::Error;

/// Error types for the state model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Bucket index outside the eight forecast windows
    #[error("Time bucket {index} is out of range (expected 0..={max})")]
    BucketOutOfRange { index: i64, max: u8 },
}

/// Type alias for Result with ModelError
pub type Result<T> = std::result::Result<T, ModelError>;

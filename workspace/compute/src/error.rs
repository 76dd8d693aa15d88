use thiserror::Error;
use tracing::error;

/// Error types for the compute module
///
/// Forecast derivations never fail; they degrade to empty output. Only loading
/// static assets can produce an error.
#[derive(Error, Debug)]
pub enum ComputeError {
    /// Zone boundary asset is not a usable GeoJSON feature collection
    #[error("Zone asset error: {0}")]
    ZoneAsset(String),
}

impl From<serde_json::Error> for ComputeError {
    fn from(error: serde_json::Error) -> Self {
        let err = ComputeError::ZoneAsset(format!("Invalid GeoJSON: {}", error));
        error!(?err, "Failed to decode zone asset");
        err
    }
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;

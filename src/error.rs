use thiserror::Error;

pub type Result<T> = std::result::Result<T, HexMapError>;

#[derive(Debug, Error)]
pub enum HexMapError {
    #[error("Invalid coordinate: lat {lat}, lng {lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },

    #[error("Invalid capacity: {0} MW (must be finite and positive)")]
    InvalidCapacity(f64),

    #[error("Invalid H3 resolution: {0} (expected 0..=15)")]
    InvalidResolution(u8),

    #[error("Resolution {0} appears more than once in the resolution set")]
    DuplicateResolution(u8),

    #[error("Resolution set must contain at least one resolution")]
    EmptyResolutionSet,

    #[error("Invalid color stop: {0} (expected #rrggbb)")]
    InvalidColor(String),

    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

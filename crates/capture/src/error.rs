use std::path::PathBuf;

/// Represents all possible errors that can occur in this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error occurred while reading a capture file.
    #[error("Failed to read trace capture: {0}")]
    FileReadFailed(#[from] std::io::Error),

    /// The capture is not valid JSON or does not match the capture layout.
    #[error("Failed to decode trace capture: {0}")]
    DecodeFailed(#[from] serde_json::Error),

    /// The capture was written by a newer exporter.
    #[error("Unsupported capture schema version {found} (supported up to {supported})")]
    UnsupportedSchema { found: u32, supported: u32 },

    /// The path is invalid.
    #[error("Path is invalid: {0}")]
    InvalidPath(PathBuf),
}

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid glob pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to expand glob: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("No trace capture matches `{0}`")]
    NoMatch(String),

    #[error("Failed to write report: {0}")]
    Write(#[from] io::Error),

    #[error("Failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

use std::path::PathBuf;

use thiserror::Error;

/// Application-level error type for the CLI boundary.
///
/// The core pipeline never fails for any string input (every extraction has
/// a default fallback), so errors only arise from reading inputs, writing
/// outputs, and serialization.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read input file {path}: {source}")]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output file {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

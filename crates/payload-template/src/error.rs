use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading schemas and contexts from outside the engine.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

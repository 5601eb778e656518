use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures while resolving a location and its forecast.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("No forecast available for '{0}'")]
    UnknownLocation(String),

    #[error("Failed to read forecast snapshot {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse forecast snapshot {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Provider '{0}' is not configured")]
    NotConfigured(String),
}

/// Failures while building a view.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Failed to encode item payload: {0}")]
    Payload(#[from] serde_json::Error),
}

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read specification {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("specification is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("specification is empty")]
    Empty,

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unknown document version: expected an 'openapi' or 'swagger' field")]
    UnknownVersion,
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The config document does not have the shape the formatter needs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("document root must be a JSON object, found {found}")]
    RootNotObject { found: &'static str },

    #[error("missing required key `{key}`")]
    MissingKey { key: &'static str },

    #[error("`{key}` must be a JSON object, found {found}")]
    NotAnObject { key: &'static str, found: &'static str },
}

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("{}: config file not found or unreadable", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: invalid JSON", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid JSON")]
    ParseText(#[source] serde_json::Error),

    #[error("{}: unexpected config layout", path.display())]
    Schema {
        path: PathBuf,
        #[source]
        source: SchemaError,
    },

    #[error("unexpected config layout")]
    InvalidShape(#[from] SchemaError),

    #[error("failed to serialize document")]
    Serialize(#[source] serde_json::Error),

    /// The file may be partially written when this is returned.
    #[error("{}: failed to write file", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl NormalizeError {
    /// Attach a file path to an error produced from in-memory text.
    pub fn at(self, path: impl Into<PathBuf>) -> Self {
        match self {
            NormalizeError::ParseText(source) => NormalizeError::Parse {
                path: path.into(),
                source,
            },
            NormalizeError::InvalidShape(source) => NormalizeError::Schema {
                path: path.into(),
                source,
            },
            other => other,
        }
    }
}

//! Error types shared by the migration pipeline

use thiserror::Error;

/// Fatal migration errors. Any of these aborts the whole run.
#[derive(Error, Debug)]
pub enum MigrateError {
    #[error("XML parse error at byte {position}: {message}")]
    Parse { position: u64, message: String },

    #[error("Missing required element: <{0}>")]
    MissingElement(String),

    #[error("Invalid post date {value:?}: {source}")]
    Format {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid media URL pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl MigrateError {
    /// Whether this error came from reading the feed structure
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::MissingElement(_))
    }

    /// Whether this error came from a malformed post date
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }
}

pub type Result<T> = std::result::Result<T, MigrateError>;

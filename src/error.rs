//! Error types

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration not set: {0}")]
    Config(String),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Report service returned HTTP {0}")]
    HttpStatus(u16),

    #[error("XML parsing error at position {position}: {message}")]
    Xml { position: usize, message: String },

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid locator '{0}'")]
    Locator(String),

    #[error("No timestamp in file name: {0}")]
    Timestamp(String),

    #[error("{0}")]
    Chart(String),

    #[error("No XML files found in '{0}'")]
    NoInput(String),

    #[error("No XML file in '{0}' could be read or parsed")]
    NoUsableInput(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the catalog and its backing file.
#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("the {field} field must not be empty")]
    Validation { field: &'static str },

    #[error("could not parse library file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Stream(#[from] std::io::Error),

    #[error("could not encode library: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("CSV into inner error: {0}")]
    CsvIntoInner(#[from] csv::IntoInnerError<csv::Writer<Vec<u8>>>),
}

impl LibraryError {
    pub fn is_validation(&self) -> bool {
        matches!(self, LibraryError::Validation { .. })
    }
}

pub type LibraryResult<T> = std::result::Result<T, LibraryError>;

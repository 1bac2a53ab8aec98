use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResultsError {
    #[error("result file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("format error in {}: {message}", path.display())]
    Format { path: PathBuf, message: String },

    #[error("failed to read `{object}` from {}", path.display())]
    Io {
        path: PathBuf,
        object: String,
        #[source]
        source: hdf5::Error,
    },
}

impl ResultsError {
    pub(crate) fn format(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ResultsError::Format {
            path: path.into(),
            message: message.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, object: impl Into<String>, source: hdf5::Error) -> Self {
        ResultsError::Io {
            path: path.into(),
            object: object.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ResultsError>;

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstanceError {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Format error in {}: {message}", path.display())]
    Format { path: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl InstanceError {
    pub fn format(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        InstanceError::Format {
            path: path.into(),
            message: message.into(),
        }
    }

    pub(crate) fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            InstanceError::FileNotFound { path }
        } else {
            InstanceError::Io { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, InstanceError>;

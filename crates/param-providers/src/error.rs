use param_core::{CoreError, ErrorKind};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DataSourceError {
    #[error("data unavailable: {0}")]
    Unavailable(String),
    #[error("unsupported operation: {0}")]
    Unsupported(String),
    #[error("malformed data: {0}")]
    Malformed(String),
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl DataSourceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Core(e) => e.kind(),
            _ => ErrorKind::Data,
        }
    }
}

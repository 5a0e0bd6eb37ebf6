use param_core::{CoreError, ErrorKind};
use param_domain::DomainError;
use param_providers::DataSourceError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProgramError {
    #[error("program lookup failed: unknown program '{0}'")]
    UnknownProgram(String),
    #[error("data unavailable: empty series for {0}")]
    DataUnavailable(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Data(#[from] DataSourceError),
}

impl ProgramError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownProgram(_) => ErrorKind::Validation,
            Self::DataUnavailable(_) => ErrorKind::Data,
            Self::Domain(e) => e.kind(),
            Self::Core(e) => e.kind(),
            Self::Data(e) => e.kind(),
        }
    }
}

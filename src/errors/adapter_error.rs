use param_apispec::ApiSpecError;
use param_core::ErrorKind;
use param_domain::DomainError;
use param_programs::ProgramError;
use thiserror::Error;

use super::VerificationError;

/// Cualquier fallo de una petición. El controller lo convierte en un único
/// envelope de error. Los `ConfigError` son de arranque y no pasan por aquí.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AdapterError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Program(#[from] ProgramError),
    #[error(transparent)]
    Endpoint(#[from] ApiSpecError),
    #[error(transparent)]
    Verification(#[from] VerificationError),
}

impl AdapterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(e) => e.kind(),
            Self::Program(e) => e.kind(),
            Self::Endpoint(e) => e.kind(),
            Self::Verification(e) => e.kind(),
        }
    }
}

use param_core::{CoreError, ErrorKind};
use thiserror::Error;

/// Errores del dominio: forma de la petición y parámetros del contrato.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("invalid params: {0}")]
    InvalidParams(String),
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BadRequest(_) | Self::InvalidParams(_) => ErrorKind::Validation,
            Self::Core(e) => e.kind(),
        }
    }
}

use param_core::ErrorKind;
use param_store::StoreError;
use thiserror::Error;

/// Fallos al verificar un token de contrato. Ningún mensaje incluye el digest
/// esperado.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum VerificationError {
    #[error("malformed contract token: {0}")]
    MalformedToken(String),
    #[error("contract record not found: {0}")]
    RecordNotFound(String),
    #[error("hash does not match for contract {0}")]
    HashMismatch(String),
    #[error("contract {0} terms do not name a program")]
    InvalidTerms(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl VerificationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedToken(_) | Self::InvalidTerms(_) => ErrorKind::Validation,
            Self::RecordNotFound(_) | Self::HashMismatch(_) => ErrorKind::Integrity,
            Self::Store(e) => e.kind(),
        }
    }
}

//! Errores del almacén de contratos.

use param_core::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    #[error("contract store unavailable: {0}")]
    Unavailable(String),
    #[error("malformed contract record: {0}")]
    Malformed(String),
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Data
    }
}

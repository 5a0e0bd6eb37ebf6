//! Errores del núcleo y taxonomía común de errores.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Clase de un error, independiente de la capa que lo produjo. El controller
/// la usa para loguear; el mensaje del envelope sale del `Display` del error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Causado por el cliente: parámetros, URI, programa desconocido.
    Validation,
    /// Serie vacía, fuera de rango o colaborador no disponible.
    Data,
    /// Derivación de tick imposible, tipo de opción inválido.
    Computation,
    /// Hash de términos distinto o registro inexistente.
    Integrity,
    /// Sólo en arranque (documento de interfaz, tabla de handlers, env).
    Configuration,
}

#[derive(Debug, Error, PartialEq, Clone, Serialize, Deserialize)]
pub enum CoreError {
    #[error("invalid option type: {0}")]
    InvalidOptionType(String),
    #[error("division by zero: strike equals exhaust ({0})")]
    DivisionByZero(f64),
    #[error("invalid params: {0}")]
    InvalidParams(String),
    #[error("no data in range {start} to {end}")]
    NoDataInRange { start: NaiveDate, end: NaiveDate },
    #[error("duplicate observation for {0}")]
    DuplicateObservation(NaiveDate),
    #[error("non-finite observation for {0}")]
    InvalidObservation(NaiveDate),
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidOptionType(_) | Self::DivisionByZero(_) => ErrorKind::Computation,
            Self::InvalidParams(_) => ErrorKind::Validation,
            Self::NoDataInRange { .. } | Self::DuplicateObservation(_) | Self::InvalidObservation(_) => ErrorKind::Data,
        }
    }
}

use param_apispec::ApiSpecError;
use thiserror::Error;

/// Errores de arranque: fatales para el proceso, nunca por petición.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {name}")]
    InvalidValue { name: &'static str, value: String },
    #[error("cannot read api document {path}: {reason}")]
    DocumentUnreadable { path: String, reason: String },
    #[error(transparent)]
    ApiSpec(#[from] ApiSpecError),
}

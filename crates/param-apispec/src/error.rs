use param_core::ErrorKind;
use param_providers::DataSourceError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiSpecError {
    // Arranque
    #[error("malformed api document: {0}")]
    Malformed(String),
    #[error("no handler for endpoint '{0}'")]
    UnknownEndpointHandler(String),

    // Parseo de URI
    #[error("Incompatible API version, please use {0}")]
    IncompatibleApiVersion(String),
    #[error("Improperly formatted request URL, endpoint not found: {0}")]
    EndpointNotFound(String),
    #[error("Improperly formatted request URL, incompatible parameters: {endpoint} expects {expected} path parameters, got {found}")]
    ParameterCountMismatch { endpoint: String, expected: usize, found: usize },
    #[error("Improperly formatted request URL, incompatible parameters: unknown parameter '{0}'")]
    UnknownParameter(String),
    #[error("invalid value '{value}' for parameter '{name}' (expected {expected})")]
    InvalidParameterValue { name: String, value: String, expected: String },

    // Ejecución
    #[error("missing {0} parameter")]
    MissingParameter(String),
    #[error("data unavailable: {0}")]
    DataUnavailable(String),
    #[error(transparent)]
    Data(#[from] DataSourceError),
}

impl ApiSpecError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Malformed(_) | Self::UnknownEndpointHandler(_) => ErrorKind::Configuration,
            Self::IncompatibleApiVersion(_)
            | Self::EndpointNotFound(_)
            | Self::ParameterCountMismatch { .. }
            | Self::UnknownParameter(_)
            | Self::InvalidParameterValue { .. }
            | Self::MissingParameter(_) => ErrorKind::Validation,
            Self::DataUnavailable(_) => ErrorKind::Data,
            Self::Data(e) => e.kind(),
        }
    }
}

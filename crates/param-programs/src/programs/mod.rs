pub mod rainfall;
pub mod snowfall;

pub use rainfall::RainfallIndex;
pub use snowfall::SnowfallThreshold;

use param_domain::DomainError;
use serde_json::{Map, Value};

use crate::ProgramError;

pub(crate) fn string_param(params: &Map<String, Value>, name: &str) -> Result<String, ProgramError> {
    match params.get(name) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        _ => Err(DomainError::InvalidParams(format!("{name} must be a non-empty string")).into()),
    }
}

pub(crate) fn flag_param(params: &Map<String, Value>, name: &str) -> bool {
    match params.get(name) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

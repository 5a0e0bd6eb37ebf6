//! Envelope de entrada y detección del modo de invocación.
//!
//! `{ "id": string|number, "data": { "program"?, "params"?, "uri"?, ... } }`

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::DomainError;

/// Mapa abierto de la petición (`data`).
pub type RequestData = Map<String, Value>;

fn default_job_id() -> String {
    "1".to_string()
}

fn job_id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where D: Deserializer<'de>
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => default_job_id(),
        other => other.to_string(),
    })
}

/// Petición tal como llega al adapter. `data` se conserva sin tocar para
/// poder devolverlo en el envelope de respuesta.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdapterRequest {
    #[serde(default = "default_job_id", deserialize_with = "job_id_as_string")]
    pub id: String,
    #[serde(default)]
    pub data: Value,
}

/// Qué hacer con una petición válida.
#[derive(Debug, Clone, PartialEq)]
pub enum InvocationMode {
    /// Evaluar un programa del catálogo.
    Program { name: String, params: Map<String, Value> },
    /// Consulta declarativa contra el mapa de endpoints.
    Endpoint { uri: String },
    /// Token `<digest><id>` de términos de contrato almacenados.
    Contract { token: String },
}

impl AdapterRequest {
    /// Construye la petición desde JSON arbitrario. Un body que ni siquiera
    /// es un objeto se trata como petición sin `data`.
    pub fn from_value(body: Value) -> Self {
        serde_json::from_value(body).unwrap_or_else(|_| Self { id: default_job_id(), data: Value::Null })
    }

    /// Valida la forma de `data` y decide el modo.
    pub fn mode(&self) -> Result<InvocationMode, DomainError> {
        let data = match &self.data {
            Value::Null => return Err(DomainError::BadRequest("request is None".into())),
            Value::Object(m) if m.is_empty() => return Err(DomainError::BadRequest("request is empty".into())),
            Value::Object(m) => m,
            _ => return Err(DomainError::BadRequest("request data must be an object".into())),
        };
        match data.get("program") {
            Some(Value::String(name)) => {
                let params = match data.get("params") {
                    None | Some(Value::Null) => return Err(DomainError::BadRequest("no parameters specified".into())),
                    Some(Value::Object(p)) => p.clone(),
                    Some(_) => return Err(DomainError::BadRequest("params must be an object".into())),
                };
                Ok(InvocationMode::Program { name: name.clone(), params })
            }
            Some(Value::Null) | None => match data.get("uri") {
                Some(Value::String(uri)) if uri.starts_with('/') => Ok(InvocationMode::Endpoint { uri: uri.clone() }),
                Some(Value::String(token)) if !token.is_empty() => Ok(InvocationMode::Contract { token: token.clone() }),
                _ => Err(DomainError::BadRequest("no program specified".into())),
            },
            Some(_) => Err(DomainError::BadRequest("program must be a string".into())),
        }
    }
}

//! Resultado de la compilación: una entrada por clave de endpoint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::EndpointHandler;

/// Tipo declarado de un parámetro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    /// Sin tipo reconocible: evaluación literal, y si falla, string.
    Literal,
}

impl ParamType {
    pub fn from_declared(declared: Option<&str>) -> Self {
        match declared.map(str::to_ascii_lowercase).as_deref() {
            Some("string") => Self::String,
            Some("number") => Self::Number,
            Some("integer") => Self::Integer,
            Some("boolean") => Self::Boolean,
            Some("array") => Self::Array,
            _ => Self::Literal,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Literal => "literal",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EndpointSpec {
    pub path_key: String,
    /// Path original del documento, p. ej. `/grid-history/{dataset}/{lat}_{lon}`.
    pub template: String,
    pub primary_params: Vec<String>,
    /// Literales entre parámetros consecutivos de la plantilla (`/`, `_`, `-`...).
    pub separators: Vec<String>,
    /// Literal tras el último parámetro, normalmente vacío.
    pub suffix: String,
    pub secondary_params: Vec<String>,
    pub param_types: BTreeMap<String, ParamType>,
    pub handler: EndpointHandler,
}

impl EndpointSpec {
    pub fn param_type(&self, name: &str) -> ParamType {
        self.param_types.get(name).copied().unwrap_or(ParamType::Literal)
    }

    pub fn accepts_query(&self, name: &str) -> bool {
        self.secondary_params.iter().any(|p| p == name)
    }
}

/// Mapa compilado. Inmutable tras el arranque; se comparte por referencia.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointMap {
    pub(crate) base_path: String,
    pub(crate) endpoints: BTreeMap<String, EndpointSpec>,
    pub(crate) fingerprint: String,
}

impl EndpointMap {
    /// Prefijo que deben llevar todas las URIs (termina en `/`).
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// blake3 del documento canónico + versión del adaptador.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn get(&self, key: &str) -> Option<&EndpointSpec> {
        self.endpoints.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.endpoints.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

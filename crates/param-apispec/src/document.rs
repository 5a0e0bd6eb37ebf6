//! Modelo mínimo del documento de interfaz (swagger 2).
//!
//! Sólo se leen los campos que usa el compilador; el resto se ignora.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiDocument {
    #[serde(rename = "basePath")]
    pub base_path: String,
    /// Orden del documento preservado.
    pub paths: IndexMap<String, PathItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    /// Declaraciones a nivel de path (tipos de los parámetros de plantilla).
    #[serde(default)]
    pub parameters: Vec<ParameterDecl>,
    #[serde(default)]
    pub get: Option<Operation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    #[serde(default)]
    pub parameters: Vec<ParameterDecl>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDecl {
    pub name: String,
    #[serde(rename = "type", default)]
    pub param_type: Option<String>,
    #[serde(rename = "in", default)]
    pub location: Option<String>,
}

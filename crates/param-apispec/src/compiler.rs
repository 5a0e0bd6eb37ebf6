//! Compilación documento de interfaz → `EndpointMap`.

use std::collections::BTreeMap;

use log::{debug, info, warn};
use param_core::constants::ADAPTER_VERSION;
use param_core::hashing::{hash_str, to_canonical_json};
use regex::Regex;
use serde_json::Value;

use crate::document::{ApiDocument, PathItem};
use crate::{ApiSpecError, EndpointHandler, EndpointMap, EndpointSpec, ParamType};

const TEMPLATE_PARAM: &str = r"\{([^{}]+)\}";
const EXCLUDED_QUERY_PARAM: &str = "Authorization";

/// Compila el documento ya parseado como JSON.
///
/// Errores: `Malformed` si el documento no tiene la forma esperada,
/// `UnknownEndpointHandler` si algún path no tiene handler en la tabla fija.
/// Ambos son fatales al arrancar.
pub fn compile(document: &Value) -> Result<EndpointMap, ApiSpecError> {
    let doc: ApiDocument =
        serde_json::from_value(document.clone()).map_err(|e| ApiSpecError::Malformed(e.to_string()))?;
    let template_re = Regex::new(TEMPLATE_PARAM).map_err(|e| ApiSpecError::Malformed(e.to_string()))?;

    let mut endpoints = BTreeMap::new();
    for (path, item) in &doc.paths {
        if is_user_scoped(path) {
            debug!("skipping user-scoped path {path}");
            continue;
        }
        let spec = compile_path(path, item, &template_re)?;
        if let Some(previous) = endpoints.insert(spec.path_key.clone(), spec) {
            warn!("endpoint '{}' declared twice, keeping the later path", previous.path_key);
        }
    }

    let fingerprint = hash_str(&format!("{}|{}", to_canonical_json(document), ADAPTER_VERSION));
    let map = EndpointMap { base_path: normalize_base(&doc.base_path), endpoints, fingerprint };
    info!("compiled {} endpoints under {} (fingerprint {})", map.len(), map.base_path(), map.fingerprint());
    Ok(map)
}

/// Igual que [`compile`] pero desde el texto del documento.
pub fn compile_str(document: &str) -> Result<EndpointMap, ApiSpecError> {
    let value: Value = serde_json::from_str(document).map_err(|e| ApiSpecError::Malformed(e.to_string()))?;
    compile(&value)
}

fn normalize_base(base: &str) -> String {
    let trimmed = base.trim_end_matches('/');
    if trimmed.starts_with('/') {
        format!("{trimmed}/")
    } else {
        format!("/{trimmed}/")
    }
}

fn is_user_scoped(path: &str) -> bool {
    path.split('/').any(|segment| segment.starts_with("user"))
}

/// `/grid-history/{dataset}/{lat}_{lon}` → `grid-history`.
fn path_key(path: &str) -> String {
    let head = match path.find("/{") {
        Some(idx) => &path[..idx],
        None => path,
    };
    head.trim_start_matches('/').to_string()
}

fn compile_path(path: &str, item: &PathItem, template_re: &Regex) -> Result<EndpointSpec, ApiSpecError> {
    let key = path_key(path);
    if key.is_empty() {
        return Err(ApiSpecError::Malformed(format!("path '{path}' has no endpoint segment")));
    }
    let handler = EndpointHandler::from_key(&key).ok_or_else(|| ApiSpecError::UnknownEndpointHandler(key.clone()))?;

    let placeholders: Vec<_> = template_re.find_iter(path).collect();
    let primary_params: Vec<String> = template_re.captures_iter(path).map(|c| c[1].to_string()).collect();
    let separators: Vec<String> = placeholders.windows(2)
                                              .map(|w| path[w[0].end()..w[1].start()].to_string())
                                              .collect();
    if separators.iter().any(String::is_empty) {
        return Err(ApiSpecError::Malformed(format!("path '{path}' has adjacent parameters without a separator")));
    }
    let suffix = placeholders.last().map(|m| path[m.end()..].to_string()).unwrap_or_default();

    let mut param_types = BTreeMap::new();
    for decl in &item.parameters {
        param_types.insert(decl.name.clone(), ParamType::from_declared(decl.param_type.as_deref()));
    }
    let mut secondary_params = Vec::new();
    for decl in item.get.iter().flat_map(|op| op.parameters.iter()) {
        if decl.name == EXCLUDED_QUERY_PARAM {
            continue;
        }
        if !secondary_params.contains(&decl.name) {
            secondary_params.push(decl.name.clone());
        }
        param_types.insert(decl.name.clone(), ParamType::from_declared(decl.param_type.as_deref()));
    }

    Ok(EndpointSpec { path_key: key,
                      template: path.to_string(),
                      primary_params,
                      separators,
                      suffix,
                      secondary_params,
                      param_types,
                      handler })
}

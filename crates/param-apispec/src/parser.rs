//! Parseo de URIs de consulta contra el `EndpointMap`.
//!
//! Formato: `<basePath><endpointKey>[/<primario>]*?<secundario>=<valor>&...`.
//! Los primarios se separan con los literales de la plantilla (`/`, `_`, `-`);
//! una sub-ruta `valid*` forma parte de la clave (`yield/valid_commodities`)
//! sólo si esa clave existe en el mapa.

use indexmap::IndexMap;
use serde_json::{Number, Value};

use crate::{ApiSpecError, EndpointMap, EndpointSpec, ParamType};

/// Parámetros que siempre se leen como número en coma flotante.
pub const NUMERIC_PARAMS: &[&str] = &["lat", "lon", "radius", "max_lat", "max_lon", "min_lat", "min_lon"];

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRequest {
    pub endpoint_key: String,
    /// Primarios en orden de plantilla, luego secundarios en orden de query.
    pub args: IndexMap<String, Value>,
}

pub fn parse(uri: &str, map: &EndpointMap) -> Result<ParsedRequest, ApiSpecError> {
    let rest = uri.strip_prefix(map.base_path())
                  .ok_or_else(|| ApiSpecError::IncompatibleApiVersion(map.base_path().to_string()))?;
    let (path, query) = match rest.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (rest, None),
    };

    let path = path.trim_matches('/');
    let (first, after) = path.split_once('/').unwrap_or((path, ""));
    if first.is_empty() {
        return Err(ApiSpecError::EndpointNotFound(String::new()));
    }
    let (second, after_second) = after.split_once('/').unwrap_or((after, ""));
    let merged = format!("{first}/{second}");
    let (endpoint_key, rest) = if second.starts_with("valid") && map.get(&merged).is_some() {
        (merged, after_second)
    } else {
        (first.to_string(), after)
    };
    let endpoint = map.get(&endpoint_key)
                      .ok_or_else(|| ApiSpecError::EndpointNotFound(endpoint_key.clone()))?;

    let values = split_primaries(endpoint, rest)?;

    let mut args = IndexMap::new();
    for (name, raw) in endpoint.primary_params.iter().zip(values) {
        let value = coerce(endpoint, name, &decode(name, raw)?)?;
        args.insert(name.clone(), value);
    }

    for pair in query.into_iter().flat_map(|q| q.split('&')).filter(|p| !p.is_empty()) {
        let (raw_name, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let name = decode(raw_name, raw_name)?;
        if !endpoint.accepts_query(&name) {
            return Err(ApiSpecError::UnknownParameter(name));
        }
        let value = coerce(endpoint, &name, &decode(&name, raw_value)?)?;
        args.insert(name, value);
    }

    Ok(ParsedRequest { endpoint_key, args })
}

/// Separa los valores primarios con los literales de la plantilla.
fn split_primaries<'a>(endpoint: &EndpointSpec, rest: &'a str) -> Result<Vec<&'a str>, ApiSpecError> {
    let expected = endpoint.primary_params.len();
    let mismatch = || ApiSpecError::ParameterCountMismatch { endpoint: endpoint.path_key.clone(),
                                                             expected,
                                                             found: count_pieces(rest, &endpoint.separators) };
    if expected == 0 {
        return if rest.is_empty() { Ok(Vec::new()) } else { Err(mismatch()) };
    }
    let mut remaining = rest.strip_suffix(endpoint.suffix.as_str()).ok_or_else(mismatch)?;
    let mut values = Vec::with_capacity(expected);
    for sep in &endpoint.separators {
        let (value, tail) = remaining.split_once(sep.as_str()).ok_or_else(mismatch)?;
        if value.is_empty() || value.contains('/') {
            return Err(mismatch());
        }
        values.push(value);
        remaining = tail;
    }
    if remaining.is_empty() || remaining.contains('/') {
        return Err(mismatch());
    }
    values.push(remaining);
    Ok(values)
}

/// Número de piezas de `rest` cortando por `/` y por los separadores de la
/// plantilla; sólo se usa para el mensaje de error.
fn count_pieces(rest: &str, separators: &[String]) -> usize {
    let mut pieces: Vec<&str> = rest.split('/').filter(|p| !p.is_empty()).collect();
    for sep in separators.iter().filter(|s| !s.is_empty() && s.as_str() != "/") {
        pieces = pieces.into_iter().flat_map(|p| p.split(sep.as_str())).collect();
    }
    pieces.len()
}

fn decode(name: &str, raw: &str) -> Result<String, ApiSpecError> {
    urlencoding::decode(raw).map(|s| s.into_owned())
                            .map_err(|_| invalid(name, raw, "utf-8 text"))
}

fn invalid(name: &str, value: &str, expected: &str) -> ApiSpecError {
    ApiSpecError::InvalidParameterValue { name: name.to_string(),
                                          value: value.to_string(),
                                          expected: expected.to_string() }
}

fn coerce(endpoint: &EndpointSpec, name: &str, raw: &str) -> Result<Value, ApiSpecError> {
    let ty = if NUMERIC_PARAMS.contains(&name) {
        ParamType::Number
    } else {
        endpoint.param_type(name)
    };
    match ty {
        ParamType::String => Ok(Value::String(raw.to_string())),
        ParamType::Number => raw.trim()
                                .parse::<f64>()
                                .ok()
                                .and_then(Number::from_f64)
                                .map(Value::Number)
                                .ok_or_else(|| invalid(name, raw, ty.as_str())),
        ParamType::Integer => raw.trim()
                                 .parse::<i64>()
                                 .map(Value::from)
                                 .map_err(|_| invalid(name, raw, ty.as_str())),
        ParamType::Boolean => parse_bool(raw).map(Value::Bool)
                                             .ok_or_else(|| invalid(name, raw, ty.as_str())),
        ParamType::Array => parse_array(raw).ok_or_else(|| invalid(name, raw, ty.as_str())),
        ParamType::Literal => Ok(literal(raw)),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Lista JSON (`[1,2]`) o lista separada por comas (`a,b`).
fn parse_array(raw: &str) -> Option<Value> {
    let trimmed = raw.trim();
    if trimmed.starts_with('[') {
        return match serde_json::from_str::<Value>(trimmed) {
            Ok(v @ Value::Array(_)) => Some(v),
            _ => None,
        };
    }
    if trimmed.is_empty() {
        return Some(Value::Array(Vec::new()));
    }
    Some(Value::Array(trimmed.split(',').map(|item| literal(item.trim())).collect()))
}

/// Evaluación literal segura: JSON o booleano sin distinguir mayúsculas; si no,
/// el texto tal cual.
fn literal(raw: &str) -> Value {
    if let Some(b) = parse_bool(raw) {
        return Value::Bool(b);
    }
    serde_json::from_str::<Value>(raw.trim()).unwrap_or_else(|_| Value::String(raw.to_string()))
}

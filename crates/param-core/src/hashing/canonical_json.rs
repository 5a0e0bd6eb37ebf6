//! Canonical JSON en dos estilos.
//!
//! - `to_canonical_json`: compacto, claves ordenadas. Base de los fingerprints
//!   internos (blake3).
//! - `to_spaced_canonical_json`: claves ordenadas, separadores `", "` y `": "`
//!   y escape ASCII de todo carácter no ASCII. Es la forma con la que los
//!   emisores de contratos calculan el digest embebido en el token, así que
//!   debe reproducirse byte a byte.

use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::Write;

pub fn to_canonical_json(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => escape_json_str(s, false),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(to_canonical_json).collect();
            format!("[{}]", items.join(","))
        }
        Value::Object(map) => {
            let tree: BTreeMap<&String, String> = map.iter().map(|(k, v)| (k, to_canonical_json(v))).collect();
            let items: Vec<String> = tree.into_iter()
                                         .map(|(k, v)| format!("{}:{}", escape_json_str(k, false), v))
                                         .collect();
            format!("{{{}}}", items.join(","))
        }
    }
}

pub fn to_spaced_canonical_json(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => escape_json_str(s, true),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(to_spaced_canonical_json).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(map) => {
            let tree: BTreeMap<&String, String> = map.iter().map(|(k, v)| (k, to_spaced_canonical_json(v))).collect();
            let items: Vec<String> = tree.into_iter()
                                         .map(|(k, v)| format!("{}: {}", escape_json_str(k, true), v))
                                         .collect();
            format!("{{{}}}", items.join(", "))
        }
    }
}

/// Escapa un string JSON. Con `ascii_only` los caracteres fuera de ASCII se
/// emiten como `\uXXXX` (pares sustitutos UTF-16 incluidos).
fn escape_json_str(s: &str, ascii_only: bool) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c if ascii_only && !c.is_ascii() => {
                let mut buf = [0u16; 2];
                for unit in c.encode_utf16(&mut buf) {
                    let _ = write!(out, "\\u{:04x}", unit);
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

//! Hash helpers. blake3 para fingerprints internos; md5/sha256 para el digest
//! de términos de contrato (el algoritmo lo fija quien emite el token).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

use super::canonical_json::to_canonical_json;
use crate::CoreError;

/// Hashea un string con blake3 y devuelve hex.
pub fn hash_str(input: &str) -> String {
    let mut h = blake3::Hasher::new();
    h.update(input.as_bytes());
    h.finalize().to_hex().to_string()
}

/// Hash blake3 del JSON canónico compacto de `value`.
pub fn hash_value(value: &Value) -> String {
    hash_str(&to_canonical_json(value))
}

/// Algoritmo del digest embebido en un token de contrato.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenDigest {
    #[default]
    Md5,
    Sha256,
}

impl TokenDigest {
    /// Longitud en caracteres hex del digest (prefijo fijo del token).
    pub fn hex_len(self) -> usize {
        match self {
            Self::Md5 => 32,
            Self::Sha256 => 64,
        }
    }

    pub fn hex_digest(self, input: &str) -> String {
        match self {
            Self::Md5 => format!("{:x}", md5::compute(input.as_bytes())),
            Self::Sha256 => {
                let mut hasher = Sha256::new();
                hasher.update(input.as_bytes());
                format!("{:x}", hasher.finalize())
            }
        }
    }
}

impl FromStr for TokenDigest {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md5" => Ok(Self::Md5),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            other => Err(CoreError::InvalidParams(format!("unsupported token digest: {other}"))),
        }
    }
}

impl fmt::Display for TokenDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Md5 => f.write_str("md5"),
            Self::Sha256 => f.write_str("sha256"),
        }
    }
}

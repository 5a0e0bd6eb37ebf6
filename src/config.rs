//! Configuración central del adapter.
//! Carga `.env` una sola vez (vía `param_store::init_dotenv`) y lee:
//! `API_SPEC_PATH`, `CONTRACT_STORE_URL`, `CONTRACT_STORE_STATUS`,
//! `TOKEN_DIGEST` y `DATA_GATEWAY_URL`.
use std::env;
use std::fs;
use std::path::PathBuf;

use param_core::hashing::TokenDigest;
use param_store::{init_dotenv, StoreConfig};
use serde_json::Value;

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppConfig {
    /// Documento de interfaz; sin él el modo endpoint queda deshabilitado.
    pub api_spec_path: Option<PathBuf>,
    pub store: StoreConfig,
    pub token_digest: TokenDigest,
    /// Gateway usado en los resúmenes de metadata.
    pub data_gateway_url: Option<String>,
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        init_dotenv();
        let token_digest = match non_empty_var("TOKEN_DIGEST") {
            Some(v) => v.parse::<TokenDigest>()
                        .map_err(|_| ConfigError::InvalidValue { name: "TOKEN_DIGEST", value: v })?,
            None => TokenDigest::default(),
        };
        Ok(Self { api_spec_path: non_empty_var("API_SPEC_PATH").map(PathBuf::from),
                  store: StoreConfig::from_env(),
                  token_digest,
                  data_gateway_url: non_empty_var("DATA_GATEWAY_URL") })
    }

    /// Lee y parsea el documento de interfaz, si hay uno configurado.
    pub fn load_api_document(&self) -> Result<Option<Value>, ConfigError> {
        let Some(path) = &self.api_spec_path else {
            return Ok(None);
        };
        let unreadable = |reason: String| ConfigError::DocumentUnreadable { path: path.display().to_string(), reason };
        let text = fs::read_to_string(path).map_err(|e| unreadable(e.to_string()))?;
        let doc = serde_json::from_str(&text).map_err(|e| unreadable(e.to_string()))?;
        Ok(Some(doc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_disable_endpoints() {
        let c = AppConfig::default();
        assert_eq!(c.token_digest, TokenDigest::Md5);
        assert_eq!(c.store.evaluable_status, "Awaiting Evaluation");
        assert_eq!(c.load_api_document().unwrap(), None);
    }

    #[test]
    fn missing_document_is_reported() {
        let c = AppConfig { api_spec_path: Some(PathBuf::from("/nonexistent/swagger.json")),
                            ..AppConfig::default() };
        assert!(matches!(c.load_api_document(), Err(ConfigError::DocumentUnreadable { .. })));
    }

    #[test]
    fn unsupported_token_digest_is_rejected() {
        // única prueba que toca TOKEN_DIGEST
        env::set_var("TOKEN_DIGEST", "crc32");
        let res = AppConfig::from_env();
        env::remove_var("TOKEN_DIGEST");
        match res {
            Err(ConfigError::InvalidValue { name, value }) => {
                assert_eq!(name, "TOKEN_DIGEST");
                assert_eq!(value, "crc32");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }
}

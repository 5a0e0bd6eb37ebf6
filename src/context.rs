//! Estado compartido del adapter, construido una vez al arrancar.

use std::sync::Arc;

use log::info;
use param_apispec::{compile, EndpointMap};
use param_core::hashing::TokenDigest;
use param_programs::ProgramRegistry;
use serde_json::Value;

use crate::{AppConfig, ConfigError};

/// Registro de programas + mapa de endpoints (opcional). Sólo lectura tras
/// `initialize`; se comparte entre peticiones concurrentes dentro de un `Arc`.
#[derive(Debug)]
pub struct AdapterContext {
    registry: ProgramRegistry,
    endpoints: Option<EndpointMap>,
    token_digest: TokenDigest,
    evaluable_status: String,
}

impl AdapterContext {
    /// Lee el documento de interfaz configurado (si lo hay) y compila todo.
    pub fn initialize(config: &AppConfig) -> Result<Arc<Self>, ConfigError> {
        let document = config.load_api_document()?;
        Self::with_document(config, document.as_ref())
    }

    /// Igual que [`initialize`](Self::initialize) con el documento ya cargado.
    pub fn with_document(config: &AppConfig, document: Option<&Value>) -> Result<Arc<Self>, ConfigError> {
        let registry = ProgramRegistry::initialize();
        let endpoints = document.map(compile).transpose()?;
        info!("adapter context ready: {} programs, endpoint queries {}",
              registry.names().count(),
              if endpoints.is_some() { "enabled" } else { "disabled" });
        Ok(Arc::new(Self { registry,
                           endpoints,
                           token_digest: config.token_digest,
                           evaluable_status: config.store.evaluable_status.clone() }))
    }

    pub fn registry(&self) -> &ProgramRegistry {
        &self.registry
    }

    pub fn endpoints(&self) -> Option<&EndpointMap> {
        self.endpoints.as_ref()
    }

    pub fn token_digest(&self) -> TokenDigest {
        self.token_digest
    }

    pub fn evaluable_status(&self) -> &str {
        &self.evaluable_status
    }
}

//! Carga de configuración del almacén desde variables de entorno.
//! Usa `CONTRACT_STORE_URL` (opaca) y `CONTRACT_STORE_STATUS`.

use std::env;
use once_cell::sync::Lazy;
use dotenvy::dotenv;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Estado de ciclo de vida que debe tener un contrato para ser evaluado.
pub const DEFAULT_EVALUABLE_STATUS: &str = "Awaiting Evaluation";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Cadena de conexión; se pasa tal cual al colaborador.
    pub url: Option<String>,
    pub evaluable_status: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { url: None,
               evaluable_status: DEFAULT_EVALUABLE_STATUS.to_string() }
    }
}

impl StoreConfig {
    pub fn from_env() -> Self {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        let url = env::var("CONTRACT_STORE_URL").ok().filter(|v| !v.trim().is_empty());
        let evaluable_status = env::var("CONTRACT_STORE_STATUS").ok()
                                                                .filter(|v| !v.trim().is_empty())
                                                                .unwrap_or_else(|| DEFAULT_EVALUABLE_STATUS.to_string());
        Self { url, evaluable_status }
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

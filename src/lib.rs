//! Parametric adapter
//!
//! Punto de entrada del evaluador de contratos paramétricos:
//! - `context`: estado compartido de sólo-lectura (registro de programas y
//!   mapa de endpoints), construido una vez al arrancar.
//! - `controller`: `AdapterController::evaluate(request) -> ResponseEnvelope`.
//! - `verifier`: verificación de tokens de contrato contra el almacén.
//! - `config` / `errors`: configuración desde entorno y errores agregados.
//!
//! Los colaboradores (datos y almacén) se inyectan como `Arc<dyn ...>`.

pub mod config;
pub mod context;
pub mod controller;
pub mod errors;
pub mod verifier;

pub use config::AppConfig;
pub use context::AdapterContext;
pub use controller::AdapterController;
pub use errors::{AdapterError, ConfigError, VerificationError};
pub use verifier::{ContractVerifier, VerifiedContract};

//! param-store
//!
//! Contrato con el almacén de términos de contrato. El adapter sólo necesita
//! `lookup(id) -> registro | no encontrado`; la conexión real (cadena de
//! conexión opaca en `StoreConfig`) es responsabilidad de la implementación.
//!
//! Módulos:
//! - `config`: carga de configuración desde .env / entorno.
//! - `error`: errores del almacén.
//! - `memory`: implementación en memoria (tests y fixtures de la CLI).
//! - `record`: registro almacenado y trait `ContractStore`.

pub mod config;
pub mod error;
pub mod memory;
pub mod record;

pub use config::{init_dotenv, StoreConfig, DEFAULT_EVALUABLE_STATUS};
pub use error::StoreError;
pub use memory::InMemoryContractStore;
pub use record::{ContractRecord, ContractStore};

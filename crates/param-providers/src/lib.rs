//! param-providers: contrato con el colaborador de recuperación de datos.
//!
//! El núcleo sólo necesita dos capacidades:
//! - `fetch_series`: serie diaria ordenada para un programa (estación o celdas
//!   de grilla promediadas).
//! - `call`: operación nombrada del cliente de datos con argumentos JSON, que
//!   es lo que invocan los handlers del mapa de endpoints.
//!
//! La numérica interna del proveedor (promedios, unidades, IPFS) queda fuera.

pub mod error;
pub mod implementations;
pub mod request;
pub mod series;
pub mod trait_dataclient;

pub use error::DataSourceError;
pub use implementations::in_memory::InMemoryDataClient;
pub use request::{ClientCall, ClientOperation, DataRequest};
pub use series::series_from_json;
pub use trait_dataclient::DataClient;

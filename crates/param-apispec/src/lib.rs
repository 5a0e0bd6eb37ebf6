//! param-apispec: mapa declarativo de endpoints de consulta.
//!
//! Flujo:
//! 1. `compile` lee el documento de interfaz (formato swagger: `basePath` +
//!    `paths`) una sola vez al arrancar y produce un `EndpointMap` inmutable.
//! 2. `parse` traduce una URI de consulta a argumentos tipados + clave de
//!    endpoint.
//! 3. `EndpointHandler::invoke` aplica los defaults del endpoint y llama a la
//!    operación correspondiente del cliente de datos.
//!
//! La compilación es determinista: el mismo documento produce el mismo mapa y
//! el mismo fingerprint.

pub mod compiler;
pub mod document;
pub mod endpoint;
pub mod error;
pub mod handlers;
pub mod parser;

pub use compiler::{compile, compile_str};
pub use document::ApiDocument;
pub use endpoint::{EndpointMap, EndpointSpec, ParamType};
pub use error::ApiSpecError;
pub use handlers::EndpointHandler;
pub use parser::{parse, ParsedRequest, NUMERIC_PARAMS};

//! Trait del colaborador de datos. Las implementaciones hacen red; el núcleo
//! no reintenta ni aplica timeouts (eso es política del proveedor).
use async_trait::async_trait;
use param_core::IndexSeries;
use serde_json::Value;

use crate::{ClientCall, DataRequest, DataSourceError};

#[async_trait]
pub trait DataClient: Send + Sync {
    fn get_name(&self) -> &str;
    fn get_version(&self) -> &str;

    /// Base del gateway de contenido (para construir URLs públicas).
    fn gateway_url(&self) -> &str;

    /// Serie diaria ordenada, sin fechas repetidas. Una serie vacía es un
    /// resultado válido; quien la consume decide si es un error.
    async fn fetch_series(&self, request: &DataRequest) -> Result<IndexSeries, DataSourceError>;

    /// Ejecuta una operación nombrada del cliente.
    async fn call(&self, call: &ClientCall) -> Result<Value, DataSourceError>;
}

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::StoreError;

/// Registro de contrato tal como lo guarda el almacén.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "lifecycleStatus")]
    pub lifecycle_status: String,
    /// Términos serializados del contrato (objeto JSON).
    #[serde(rename = "serializedRiskObject")]
    pub terms: Value,
    /// Digest guardado junto al registro, si el almacén lo mantiene.
    #[serde(rename = "termsDigest", default, skip_serializing_if = "Option::is_none")]
    pub stored_digest: Option<String>,
}

#[async_trait]
pub trait ContractStore: Send + Sync {
    /// `Ok(None)` cuando no existe un registro con ese id.
    async fn find_contract(&self, id: &str) -> Result<Option<ContractRecord>, StoreError>;
}

//! Almacén en memoria, inmutable tras construirse.

use std::collections::HashMap;

use async_trait::async_trait;
use log::{debug, info};
use serde_json::Value;

use crate::{ContractRecord, ContractStore, StoreError};

#[derive(Debug, Clone, Default)]
pub struct InMemoryContractStore {
    records: HashMap<String, ContractRecord>,
    /// `CONTRACT_STORE_URL` del que provienen los registros, si se configuró.
    source: Option<String>,
}

impl InMemoryContractStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, record: ContractRecord) -> Self {
        self.records.insert(record.id.clone(), record);
        self
    }

    pub fn with_source(mut self, url: impl Into<String>) -> Self {
        // la URL puede llevar credenciales: no se registra
        info!("contract store bound to configured source ({} records)", self.records.len());
        self.source = Some(url.into());
        self
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Fixture: arreglo JSON de registros.
    pub fn from_fixture(fixture: &Value) -> Result<Self, StoreError> {
        let records: Vec<ContractRecord> =
            serde_json::from_value(fixture.clone()).map_err(|e| StoreError::Malformed(e.to_string()))?;
        Ok(records.into_iter().fold(Self::new(), Self::with_record))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl ContractStore for InMemoryContractStore {
    async fn find_contract(&self, id: &str) -> Result<Option<ContractRecord>, StoreError> {
        debug!("in-memory contract lookup: {id}");
        Ok(self.records.get(id).cloned())
    }
}

//! Cliente de datos en memoria: series y respuestas precargadas.
//!
//! Sirve como doble de tests y como backend de la CLI a partir de un fixture
//! JSON:
//!
//! ```json
//! {
//!   "gateway_url": "https://gateway.example",
//!   "series": { "chirps:12.5_104.9": { "2021-06-01": 3.2 } },
//!   "responses": { "heads": { "ghcnd": "bafy..." } }
//! }
//! ```
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use log::debug;
use param_core::IndexSeries;
use serde_json::{Map, Value};

use crate::series::series_from_json;
use crate::{ClientCall, ClientOperation, DataClient, DataRequest, DataSourceError};

type Responder = Arc<dyn Fn(&Map<String, Value>) -> Result<Value, DataSourceError> + Send + Sync>;

#[derive(Default)]
pub struct InMemoryDataClient {
    gateway_url: String,
    series: HashMap<String, IndexSeries>,
    responders: HashMap<ClientOperation, Responder>,
    calls: Mutex<Vec<ClientCall>>,
}

impl InMemoryDataClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gateway_url(mut self, url: impl Into<String>) -> Self {
        self.gateway_url = url.into();
        self
    }

    /// Registra la serie que se devolverá para `request`.
    pub fn with_series(mut self, request: &DataRequest, series: IndexSeries) -> Self {
        self.series.insert(request.key(), series);
        self
    }

    /// Respuesta constante para una operación.
    pub fn with_response(self, operation: ClientOperation, value: Value) -> Self {
        self.with_responder(operation, move |_| Ok(value.clone()))
    }

    /// Respuesta calculada a partir de los argumentos recibidos.
    pub fn with_responder<F>(mut self, operation: ClientOperation, f: F) -> Self
        where F: Fn(&Map<String, Value>) -> Result<Value, DataSourceError> + Send + Sync + 'static
    {
        self.responders.insert(operation, Arc::new(f));
        self
    }

    /// Carga un fixture con el formato descrito en la cabecera del módulo.
    pub fn from_fixture(fixture: &Value) -> Result<Self, DataSourceError> {
        let mut client = Self::new();
        if let Some(url) = fixture.get("gateway_url").and_then(Value::as_str) {
            client.gateway_url = url.to_string();
        }
        if let Some(series) = fixture.get("series").and_then(Value::as_object) {
            for (key, raw) in series {
                client.series.insert(key.clone(), series_from_json(raw)?);
            }
        }
        if let Some(responses) = fixture.get("responses").and_then(Value::as_object) {
            for (name, value) in responses {
                let op = ClientOperation::from_name(name).ok_or_else(|| DataSourceError::Unsupported(name.clone()))?;
                client = client.with_response(op, value.clone());
            }
        }
        Ok(client)
    }

    /// Llamadas recibidas, en orden.
    pub fn recorded_calls(&self) -> Vec<ClientCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl DataClient for InMemoryDataClient {
    fn get_name(&self) -> &str {
        "in_memory"
    }

    fn get_version(&self) -> &str {
        "0.1.0"
    }

    fn gateway_url(&self) -> &str {
        &self.gateway_url
    }

    async fn fetch_series(&self, request: &DataRequest) -> Result<IndexSeries, DataSourceError> {
        let key = request.key();
        debug!("in-memory series lookup: {key}");
        self.series
            .get(&key)
            .cloned()
            .ok_or_else(|| DataSourceError::Unavailable(format!("no series for {key}")))
    }

    async fn call(&self, call: &ClientCall) -> Result<Value, DataSourceError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call.clone());
        }
        let responder = self.responders
                            .get(&call.operation)
                            .ok_or_else(|| DataSourceError::Unsupported(call.operation.name().to_string()))?;
        responder(&call.args)
    }
}

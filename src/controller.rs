//! Orquestación de una petición: modo → ejecución → un envelope.

use std::sync::Arc;

use log::{info, warn};
use param_apispec::{parse, ApiSpecError};
use param_domain::{AdapterRequest, DomainError, InvocationMode, ResponseEnvelope};
use param_providers::DataClient;
use param_store::ContractStore;
use serde_json::{Map, Value};

use crate::{AdapterContext, AdapterError, ContractVerifier, VerificationError};

pub struct AdapterController {
    context: Arc<AdapterContext>,
    data: Arc<dyn DataClient>,
    verifier: ContractVerifier,
}

impl AdapterController {
    pub fn new(context: Arc<AdapterContext>, data: Arc<dyn DataClient>, store: Arc<dyn ContractStore>) -> Self {
        let verifier = ContractVerifier::new(store, context.token_digest(), context.evaluable_status());
        Self { context, data, verifier }
    }

    /// Evalúa una petición cruda. Nunca falla: cualquier error termina en un
    /// envelope con `statusCode` 500.
    pub async fn evaluate(&self, body: Value) -> ResponseEnvelope {
        let request = AdapterRequest::from_value(body);
        match self.execute(&request).await {
            Ok(result) => {
                info!("job {} succeeded", request.id);
                ResponseEnvelope::success(request.id, request.data, result)
            }
            Err(e) => {
                warn!("job {} failed ({:?}): {e}", request.id, e.kind());
                ResponseEnvelope::failure(request.id, request.data, e)
            }
        }
    }

    async fn execute(&self, request: &AdapterRequest) -> Result<Value, AdapterError> {
        match request.mode()? {
            InvocationMode::Program { name, params } => {
                info!("job {}: program {name}", request.id);
                self.run_program(&name, &params).await
            }
            InvocationMode::Endpoint { uri } => {
                info!("job {}: endpoint query {uri}", request.id);
                self.run_endpoint(&uri).await
            }
            InvocationMode::Contract { token } => {
                info!("job {}: contract token", request.id);
                let verified = self.verifier.verify(&token).await?;
                let terms = AdapterRequest { id: verified.id.clone(), data: verified.terms };
                match terms.mode() {
                    Ok(InvocationMode::Program { name, params }) => self.run_program(&name, &params).await,
                    _ => Err(VerificationError::InvalidTerms(verified.id).into()),
                }
            }
        }
    }

    async fn run_program(&self, name: &str, params: &Map<String, Value>) -> Result<Value, AdapterError> {
        let program = self.context.registry().get(name)?;
        let validation = program.validate_params(params);
        if !validation.is_valid() {
            return Err(DomainError::BadRequest(validation.message()).into());
        }
        Ok(program.evaluate(params, self.data.as_ref()).await?)
    }

    async fn run_endpoint(&self, uri: &str) -> Result<Value, AdapterError> {
        let map = self.context
                      .endpoints()
                      .ok_or_else(|| DomainError::BadRequest("endpoint queries are not enabled".into()))?;
        let parsed = parse(uri, map)?;
        let spec = map.get(&parsed.endpoint_key)
                      .ok_or_else(|| ApiSpecError::EndpointNotFound(parsed.endpoint_key.clone()))?;
        Ok(spec.handler.invoke(&parsed.args, self.data.as_ref()).await?)
    }
}

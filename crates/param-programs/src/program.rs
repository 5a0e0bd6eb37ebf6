//! Contrato común de los programas.

use async_trait::async_trait;
use log::info;
use param_core::aggregate;
use param_domain::{ContractPayoutParams, UnitConvention};
use param_providers::{DataClient, DataRequest};
use serde_json::{Map, Value};

use crate::ProgramError;

/// Resultado de validar una petición: todas las líneas de error, no sólo la
/// primera.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Validation {
    pub problems: Vec<String>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.problems.is_empty()
    }

    /// Mensaje con una línea por parámetro fallido.
    pub fn message(&self) -> String {
        self.problems.join("\n")
    }
}

#[async_trait]
pub trait Program: Send + Sync {
    fn id(&self) -> &'static str;

    /// Parámetros que deben estar presentes.
    fn required_params(&self) -> &'static [&'static str];

    /// Parámetros con valor fijo: deben estar presentes y ser iguales.
    fn preset_params(&self) -> &'static [(&'static str, &'static str)] {
        &[]
    }

    fn units(&self) -> UnitConvention;

    /// Comprobaciones propias del programa, además de required/preset.
    fn extra_checks(&self, _params: &Map<String, Value>) -> Vec<String> {
        Vec::new()
    }

    /// Serie que hay que pedir al colaborador para estos parámetros.
    fn data_request(&self, params: &Map<String, Value>) -> Result<DataRequest, ProgramError>;

    fn validate_params(&self, params: &Map<String, Value>) -> Validation {
        let mut problems = Vec::new();
        for name in self.required_params() {
            if !params.contains_key(*name) {
                problems.push(format!("missing {name} parameter"));
            }
        }
        for (name, expected) in self.preset_params() {
            match params.get(*name) {
                Some(Value::String(v)) if v == expected => {}
                _ => problems.push(format!("missing or invalid {name} parameter")),
            }
        }
        problems.extend(self.extra_checks(params));
        Validation { problems }
    }

    /// Evalúa el payout. Los parámetros del contrato se validan antes de ir a
    /// buscar datos.
    async fn evaluate(&self, params: &Map<String, Value>, client: &dyn DataClient) -> Result<Value, ProgramError> {
        let terms = ContractPayoutParams::from_params(params, self.units())?;
        let request = self.data_request(params)?;
        let series = client.fetch_series(&request).await?;
        if series.is_empty() {
            return Err(ProgramError::DataUnavailable(request.key()));
        }
        let index_value = aggregate(&series, terms.start, terms.end)?;
        let payout = terms.payout(index_value)?;
        info!("program {} index={index_value} payout={payout} ({})", self.id(), request.key());
        Ok(self.units().report(payout)?)
    }
}

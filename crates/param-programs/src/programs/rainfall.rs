//! Contratos de lluvia acumulada sobre celdas de grilla.

use param_domain::{DomainError, UnitConvention};
use param_providers::DataRequest;
use serde_json::{Map, Value};

use super::{flag_param, string_param};
use crate::{Program, ProgramError};

/// Índice = suma de la lluvia diaria promediada sobre `locations`. Fechas
/// ISO, números tal cual, payout con dos decimales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RainfallIndex;

const REQUIRED: &[&str] = &["dataset", "locations", "start", "end", "strike", "limit", "opt_type", "tick"];

fn parse_locations(params: &Map<String, Value>) -> Result<Vec<[f64; 2]>, ProgramError> {
    let invalid = || ProgramError::from(DomainError::InvalidParams("locations must be a list of [lat, lon] pairs".into()));
    let rows = params.get("locations").and_then(Value::as_array).ok_or_else(invalid)?;
    if rows.is_empty() {
        return Err(invalid());
    }
    rows.iter()
        .map(|row| match row.as_array().map(|r| r.as_slice()) {
            Some([lat, lon]) => match (lat.as_f64(), lon.as_f64()) {
                (Some(lat), Some(lon)) => Ok([lat, lon]),
                _ => Err(invalid()),
            },
            _ => Err(invalid()),
        })
        .collect()
}

impl Program for RainfallIndex {
    fn id(&self) -> &'static str {
        "cambodia_rainfall"
    }

    fn required_params(&self) -> &'static [&'static str] {
        REQUIRED
    }

    fn units(&self) -> UnitConvention {
        UnitConvention::Natural
    }

    fn data_request(&self, params: &Map<String, Value>) -> Result<DataRequest, ProgramError> {
        Ok(DataRequest::Gridded { dataset: string_param(params, "dataset")?,
                                  locations: parse_locations(params)?,
                                  imperial_units: flag_param(params, "imperial_units") })
    }
}

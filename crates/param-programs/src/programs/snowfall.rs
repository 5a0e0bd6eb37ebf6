//! Contratos de nevada sobre una estación GHCN.
//!
//! Usan unidades chain: strike / limit / exhaust multiplicados por 100,
//! fechas como timestamp unix y payout reportado en centésimas enteras.

use param_domain::UnitConvention;
use param_providers::DataRequest;
use serde_json::{Map, Value};

use super::{flag_param, string_param};
use crate::{Program, ProgramError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnowfallThreshold;

const REQUIRED: &[&str] = &["station_id", "start", "end", "strike", "limit"];
const PRESETS: &[(&str, &str)] = &[("opt_type", "CALL"), ("weather_variable", "SNOW"), ("dataset", "ghcnd")];

fn present(params: &Map<String, Value>, name: &str) -> bool {
    !matches!(params.get(name), None | Some(Value::Null))
}

impl Program for SnowfallThreshold {
    fn id(&self) -> &'static str {
        "critical_snowfall"
    }

    fn required_params(&self) -> &'static [&'static str] {
        REQUIRED
    }

    fn preset_params(&self) -> &'static [(&'static str, &'static str)] {
        PRESETS
    }

    fn units(&self) -> UnitConvention {
        UnitConvention::Hundredths
    }

    fn extra_checks(&self, params: &Map<String, Value>) -> Vec<String> {
        if present(params, "tick") || present(params, "exhaust") {
            Vec::new()
        } else {
            vec!["missing tick or exhaust parameter".to_string()]
        }
    }

    fn data_request(&self, params: &Map<String, Value>) -> Result<DataRequest, ProgramError> {
        Ok(DataRequest::Station { dataset: string_param(params, "dataset")?,
                                  station_id: string_param(params, "station_id")?,
                                  weather_variable: string_param(params, "weather_variable")?,
                                  imperial_units: flag_param(params, "imperial_units") })
    }
}

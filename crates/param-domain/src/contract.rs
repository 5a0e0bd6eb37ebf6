//! Parámetros de payout de un contrato y su extracción desde `params`.
//!
//! Dos convenciones de unidades:
//! - `Natural`: los números se usan tal cual y el payout se devuelve como
//!   número con dos decimales.
//! - `Hundredths`: strike / limit / exhaust llegan multiplicados por 100 (el
//!   contrato on-chain no maneja floats) y el payout se reporta como entero de
//!   centésimas.
//!
//! Las fechas se aceptan como `YYYY-MM-DD`, RFC 3339 o timestamp unix (segundos,
//! UTC), en número o en string.

use chrono::{DateTime, NaiveDate, Utc};
use param_core::constants::CHAIN_UNIT_SCALE;
use param_core::{compute_payout, hundredths, CoreError, OptionType, TickSpec};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitConvention {
    Natural,
    Hundredths,
}

impl UnitConvention {
    fn scale_in(self, value: f64) -> f64 {
        match self {
            Self::Natural => value,
            Self::Hundredths => value / CHAIN_UNIT_SCALE,
        }
    }

    /// Convierte un payout (ya redondeado) al valor que se reporta.
    pub fn report(self, payout: f64) -> Result<Value, CoreError> {
        match self {
            Self::Natural => Ok(Value::from(payout)),
            Self::Hundredths => Ok(Value::from(hundredths(payout)?)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractPayoutParams {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub strike: f64,
    pub limit: f64,
    pub tick: TickSpec,
    pub option_type: OptionType,
}

impl ContractPayoutParams {
    /// Extrae y valida los parámetros de payout.
    ///
    /// Acumula todos los campos ausentes o no numéricos en un único
    /// `InvalidParams`. Si hay `tick` se usa; `exhaust` sólo cuando no lo hay.
    /// El tipo de opción se valida al final (`InvalidOptionType`).
    pub fn from_params(params: &Map<String, Value>, units: UnitConvention) -> Result<Self, DomainError> {
        let mut problems = Vec::new();
        let start = collect(&mut problems, date_param(params, "start"));
        let end = collect(&mut problems, date_param(params, "end"));
        let strike = collect(&mut problems, number_param(params, "strike"));
        let limit = collect(&mut problems, number_param(params, "limit"));
        let tick = collect(&mut problems, optional_number_param(params, "tick"));
        let exhaust = collect(&mut problems, optional_number_param(params, "exhaust"));
        let opt_type = match params.get("opt_type") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                problems.push("opt_type must be a string".to_string());
                None
            }
            None => {
                problems.push("missing opt_type parameter".to_string());
                None
            }
        };

        let tick = match (tick, exhaust) {
            (Some(Some(t)), _) => Some(TickSpec::Tick(t)),
            (Some(None), Some(Some(e))) => Some(TickSpec::Exhaust(units.scale_in(e))),
            (Some(None), Some(None)) => {
                problems.push("missing tick or exhaust parameter".to_string());
                None
            }
            _ => None,
        };

        match (start, end, strike, limit, tick, opt_type) {
            (Some(start), Some(end), Some(strike), Some(limit), Some(tick), Some(opt)) if problems.is_empty() => {
                if start > end {
                    return Err(DomainError::InvalidParams(format!("start date {start} is after end date {end}")));
                }
                let limit = units.scale_in(limit);
                if limit < 0.0 {
                    return Err(DomainError::InvalidParams(format!("limit must be >= 0, got {limit}")));
                }
                Ok(Self { start,
                          end,
                          strike: units.scale_in(strike),
                          limit,
                          tick,
                          option_type: opt.parse()? })
            }
            _ => Err(DomainError::InvalidParams(problems.join("; "))),
        }
    }

    /// Aplica la fórmula de payout al valor agregado del índice.
    pub fn payout(&self, index_value: f64) -> Result<f64, CoreError> {
        compute_payout(index_value, self.strike, self.tick, self.limit, self.option_type)
    }
}

fn collect<T>(problems: &mut Vec<String>, r: Result<T, String>) -> Option<T> {
    r.map_err(|e| problems.push(e)).ok()
}

fn value_as_f64(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Número obligatorio (JSON number o string numérico).
pub fn number_param(params: &Map<String, Value>, name: &str) -> Result<f64, String> {
    match params.get(name) {
        None | Some(Value::Null) => Err(format!("missing {name} parameter")),
        Some(v) => value_as_f64(v).ok_or_else(|| format!("{name} must be numeric")),
    }
}

/// Número opcional: ausente o `null` es `None`.
pub fn optional_number_param(params: &Map<String, Value>, name: &str) -> Result<Option<f64>, String> {
    match params.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => value_as_f64(v).map(Some).ok_or_else(|| format!("{name} must be numeric")),
    }
}

pub fn date_param(params: &Map<String, Value>, name: &str) -> Result<NaiveDate, String> {
    match params.get(name) {
        None | Some(Value::Null) => Err(format!("missing {name} parameter")),
        Some(v) => parse_date(v).ok_or_else(|| format!("{name} must be a date or unix timestamp")),
    }
}

/// Interpreta una fecha en cualquiera de los formatos aceptados.
pub fn parse_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::Number(n) => timestamp_date(n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64))?),
        Value::String(s) => {
            let s = s.trim();
            NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
                                                    .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.with_timezone(&Utc).date_naive()))
                                                    .or_else(|| s.parse::<i64>().ok().and_then(timestamp_date))
        }
        _ => None,
    }
}

fn timestamp_date(secs: i64) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp(secs, 0).map(|dt| dt.date_naive())
}

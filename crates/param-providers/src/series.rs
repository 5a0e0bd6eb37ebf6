//! Conversión JSON → `IndexSeries`.

use chrono::NaiveDate;
use param_core::IndexSeries;
use serde_json::Value;

use crate::DataSourceError;

/// Acepta `{ "YYYY-MM-DD[...]": number, ... }` o `[[date, number], ...]`.
/// Las claves con hora (RFC 3339) se reducen a su fecha.
pub fn series_from_json(value: &Value) -> Result<IndexSeries, DataSourceError> {
    let mut points = Vec::new();
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                points.push((parse_day(k)?, parse_value(k, v)?));
            }
        }
        Value::Array(rows) => {
            for row in rows {
                match row.as_array().map(|r| r.as_slice()) {
                    Some([Value::String(k), v]) => points.push((parse_day(k)?, parse_value(k, v)?)),
                    _ => return Err(DataSourceError::Malformed(format!("expected [date, value] pair, got {row}"))),
                }
            }
        }
        other => return Err(DataSourceError::Malformed(format!("expected series object, got {other}"))),
    }
    Ok(IndexSeries::new(points)?)
}

fn parse_day(key: &str) -> Result<NaiveDate, DataSourceError> {
    key.get(..10).and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
                 .ok_or_else(|| DataSourceError::Malformed(format!("invalid date key {key}")))
}

fn parse_value(key: &str, v: &Value) -> Result<f64, DataSourceError> {
    v.as_f64().ok_or_else(|| DataSourceError::Malformed(format!("non-numeric value for {key}")))
}

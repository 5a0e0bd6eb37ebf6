//! Tabla fija de handlers: un envoltorio por clave de endpoint.
//!
//! Cada handler fija defaults que se mezclan POR DEBAJO de los argumentos del
//! llamador (gana el llamador) y delega en una operación del cliente de
//! datos. Algunos post-procesan la respuesta (orden por fecha, resumen de
//! metadata).

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use log::debug;
use param_providers::{ClientCall, ClientOperation, DataClient, DataSourceError};
use serde_json::{json, Map, Value};

use crate::ApiSpecError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointHandler {
    CedaBiomass,
    CmeHistory,
    DroughtMonitor,
    DutchStationHistory,
    Forecasts,
    GermanStationHistory,
    GhcnHistory,
    GridHistory,
    IrrigationSplits,
    Metadata,
    Storms,
    TransitionalYield,
    Yield,
}

const HANDLER_TABLE: &[(&str, EndpointHandler)] = &[("ceda-biomass", EndpointHandler::CedaBiomass),
                                                    ("cme-history", EndpointHandler::CmeHistory),
                                                    ("drought-monitor", EndpointHandler::DroughtMonitor),
                                                    ("dutch-station-history", EndpointHandler::DutchStationHistory),
                                                    ("forecasts", EndpointHandler::Forecasts),
                                                    ("german-station-history", EndpointHandler::GermanStationHistory),
                                                    ("ghcn-history", EndpointHandler::GhcnHistory),
                                                    ("grid-history", EndpointHandler::GridHistory),
                                                    ("irrigation_splits", EndpointHandler::IrrigationSplits),
                                                    ("metadata", EndpointHandler::Metadata),
                                                    ("storms", EndpointHandler::Storms),
                                                    ("transitional_yield", EndpointHandler::TransitionalYield),
                                                    ("yield", EndpointHandler::Yield)];

const STATION_SUMMARY_DATASETS: &[&str] = &["ghcnd", "ghcnd-imputed-daily"];

impl EndpointHandler {
    pub fn from_key(key: &str) -> Option<Self> {
        HANDLER_TABLE.iter().find(|(k, _)| *k == key).map(|(_, h)| *h)
    }

    pub fn key(self) -> &'static str {
        HANDLER_TABLE.iter().find(|(_, h)| *h == self).map(|(k, _)| *k).unwrap_or_default()
    }

    pub fn keys() -> impl Iterator<Item = &'static str> {
        HANDLER_TABLE.iter().map(|(k, _)| *k)
    }

    /// Operación principal del cliente de datos.
    pub fn operation(self) -> ClientOperation {
        match self {
            Self::CedaBiomass => ClientOperation::CedaBiomass,
            Self::CmeHistory => ClientOperation::CmeStationHistory,
            Self::DroughtMonitor => ClientOperation::DroughtMonitorHistory,
            Self::DutchStationHistory | Self::GermanStationHistory => ClientOperation::EuropeanStationHistory,
            Self::Forecasts => ClientOperation::Forecasts,
            Self::GhcnHistory => ClientOperation::StationHistory,
            Self::GridHistory => ClientOperation::GridcellHistory,
            Self::IrrigationSplits => ClientOperation::IrrigationData,
            Self::Metadata => ClientOperation::Metadata,
            Self::Storms => ClientOperation::TropicalStorms,
            Self::TransitionalYield | Self::Yield => ClientOperation::YieldHistory,
        }
    }

    /// Defaults del endpoint, antes de aplicar los argumentos del llamador.
    pub fn defaults(self) -> Value {
        match self {
            Self::CedaBiomass | Self::DroughtMonitor | Self::Storms | Self::Metadata => json!({}),
            Self::CmeHistory => json!({"desired_units": null, "ipfs_timeout": null}),
            Self::DutchStationHistory => {
                json!({"dataset": "dutch_stations-daily", "desired_units": null, "ipfs_timeout": null})
            }
            Self::GermanStationHistory => {
                json!({"dataset": "dwd_stations-daily", "desired_units": null, "ipfs_timeout": null})
            }
            Self::Forecasts => json!({
                "also_return_metadata": false,
                "also_return_snapped_coordinates": true,
                "use_imperial_units": true,
                "desired_units": null,
                "ipfs_timeout": null,
                "convert_to_local_time": true
            }),
            Self::GhcnHistory => json!({
                "dataset": "ghcnd",
                "station_id": "USW00003016",
                "use_imperial_units": true,
                "desired_units": null,
                "ipfs_timeout": null
            }),
            Self::GridHistory => json!({
                "also_return_metadata": false,
                "also_return_snapped_coordinates": true,
                "use_imperial_units": true,
                "desired_units": null,
                "ipfs_timeout": null,
                "as_of": null,
                "convert_to_local_time": true
            }),
            Self::IrrigationSplits => json!({"ipfs_timeout": null}),
            Self::TransitionalYield => json!({"impute": false}),
            Self::Yield => json!({"impute": false, "fill": false}),
        }
    }

    /// Argumentos finales: defaults + llamador + dataset derivado (yield).
    pub fn resolve_args(self, args: &IndexMap<String, Value>) -> Map<String, Value> {
        let caller = Value::Object(args.iter().map(|(k, v)| (k.clone(), v.clone())).collect());
        let mut merged = match merge_json(&self.defaults(), &caller) {
            Value::Object(m) => m,
            _ => Map::new(),
        };
        let dataset = match self {
            Self::TransitionalYield if truthy(merged.get("impute")) => Some("rma_t_yield_imputed-single-value"),
            Self::TransitionalYield => Some("rma_t_yield-single-value"),
            Self::Yield if truthy(merged.get("impute")) => Some("rmasco_imputed-yearly"),
            Self::Yield if truthy(merged.get("fill")) => Some("sco_vhi_imputed-yearly"),
            Self::Yield => Some("sco-yearly"),
            _ => None,
        };
        if let Some(dataset) = dataset {
            merged.insert("dataset".into(), Value::from(dataset));
        }
        merged
    }

    pub async fn invoke(self, args: &IndexMap<String, Value>, client: &dyn DataClient) -> Result<Value, ApiSpecError> {
        let resolved = self.resolve_args(args);
        debug!("endpoint {} -> {}", self.key(), self.operation().name());
        match self {
            Self::Metadata => metadata(resolved, client).await,
            Self::GhcnHistory => {
                let data = client.call(&ClientCall::new(self.operation(), resolved)).await?;
                let sorted = sort_by_date(&data)?;
                if sorted.as_array().is_some_and(Vec::is_empty) {
                    return Err(ApiSpecError::DataUnavailable("No data returned for request".into()));
                }
                Ok(sorted)
            }
            Self::GridHistory => {
                let data = client.call(&ClientCall::new(self.operation(), resolved)).await?;
                let series = match data {
                    Value::Array(mut pair) if !pair.is_empty() => pair.swap_remove(0),
                    other => other,
                };
                sort_by_date(&series)
            }
            _ => Ok(client.call(&ClientCall::new(self.operation(), resolved)).await?),
        }
    }
}

/// Merge superficial: las claves de `b` reemplazan a las de `a`.
fn merge_json(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::Object(ma), Value::Object(mb)) => {
            let mut out = ma.clone();
            for (k, v) in mb {
                out.insert(k.clone(), v.clone());
            }
            Value::Object(out)
        }
        (_, other) => other.clone(),
    }
}

fn truthy(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty() && !s.eq_ignore_ascii_case("false"),
        _ => false,
    }
}

/// Momento representado por una clave de serie, para ordenar.
fn date_key(raw: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(raw).map(|dt| dt.naive_utc())
                                     .ok()
                                     .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").ok())
                                     .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0)))
}

/// Objeto `{fecha: valor}` → lista `[[fecha, valor], ...]` en orden cronológico.
fn sort_by_date(series: &Value) -> Result<Value, ApiSpecError> {
    let entries = series.as_object()
                        .ok_or_else(|| DataSourceError::Malformed("expected an object keyed by date".into()))?;
    let mut rows: Vec<(&String, &Value)> = entries.iter().collect();
    rows.sort_by(|(a, _), (b, _)| (date_key(a), a.as_str()).cmp(&(date_key(b), b.as_str())));
    Ok(Value::Array(rows.into_iter().map(|(k, v)| json!([k, v])).collect()))
}

fn required_field<'a>(meta: &'a Map<String, Value>, name: &str) -> Result<&'a Value, ApiSpecError> {
    meta.get(name)
        .ok_or_else(|| DataSourceError::Malformed(format!("metadata has no '{name}' field")).into())
}

async fn metadata(args: Map<String, Value>, client: &dyn DataClient) -> Result<Value, ApiSpecError> {
    let dataset = args.get("dataset")
                      .and_then(Value::as_str)
                      .ok_or_else(|| ApiSpecError::MissingParameter("dataset".into()))?;
    let heads = client.call(&ClientCall::new(ClientOperation::Heads, Map::new())).await?;
    let hash = heads.get(dataset)
                    .and_then(Value::as_str)
                    .ok_or_else(|| ApiSpecError::DataUnavailable(format!("no head for dataset {dataset}")))?;
    let mut meta_args = Map::new();
    meta_args.insert("hash".into(), Value::from(hash));
    let meta = client.call(&ClientCall::new(ClientOperation::Metadata, meta_args)).await?;

    if truthy(args.get("full_metadata")) {
        return Ok(meta);
    }
    let Some(fields) = meta.as_object() else {
        return Ok(meta);
    };

    let gridded = fields.contains_key("latitude range");
    let station = STATION_SUMMARY_DATASETS.contains(&dataset);
    if !gridded && !station {
        return Ok(meta);
    }

    let mut summary = match required_field(fields, "api documentation")? {
        Value::Object(doc) => doc.clone(),
        _ => return Err(DataSourceError::Malformed("'api documentation' must be an object".into()).into()),
    };
    summary.insert("name".into(), required_field(fields, "name")?.clone());
    summary.insert("update frequency".into(), required_field(fields, "update frequency")?.clone());
    summary.insert("time last generated".into(), required_field(fields, "time generated")?.clone());
    if gridded {
        summary.insert("latitude range".into(), required_field(fields, "latitude range")?.clone());
        summary.insert("longitude range".into(), required_field(fields, "longitude range")?.clone());
    } else {
        let stations_file = required_field(fields, "stations file")?
            .as_str()
            .ok_or_else(|| DataSourceError::Malformed("'stations file' must be a string".into()))?;
        let url = format!("{}/ipfs/{hash}/{stations_file}", client.gateway_url().trim_end_matches('/'));
        summary.insert("stations url".into(), Value::from(url));
    }
    Ok(Value::Object(summary))
}

//! Tipos de petición hacia el cliente de datos.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Serie que necesita un programa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataRequest {
    /// Celdas de grilla `[lat, lon]`; el proveedor devuelve el promedio.
    Gridded {
        dataset: String,
        locations: Vec<[f64; 2]>,
        imperial_units: bool,
    },
    /// Una estación y una variable (p. ej. `SNOW` en `ghcnd`).
    Station {
        dataset: String,
        station_id: String,
        weather_variable: String,
        imperial_units: bool,
    },
}

impl DataRequest {
    /// Clave estable de la serie (usada por dobles en memoria y en logs).
    pub fn key(&self) -> String {
        match self {
            Self::Gridded { dataset, locations, .. } => {
                let cells: Vec<String> = locations.iter().map(|[lat, lon]| format!("{lat}_{lon}")).collect();
                format!("{dataset}:{}", cells.join(";"))
            }
            Self::Station { dataset, station_id, weather_variable, .. } => {
                format!("{dataset}:{station_id}:{weather_variable}")
            }
        }
    }
}

/// Operaciones del cliente de datos alcanzables desde el mapa de endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientOperation {
    CedaBiomass,
    CmeStationHistory,
    DroughtMonitorHistory,
    EuropeanStationHistory,
    Forecasts,
    GridcellHistory,
    Heads,
    IrrigationData,
    Metadata,
    StationHistory,
    TropicalStorms,
    YieldHistory,
}

impl ClientOperation {
    pub const ALL: [ClientOperation; 12] = [Self::CedaBiomass,
                                            Self::CmeStationHistory,
                                            Self::DroughtMonitorHistory,
                                            Self::EuropeanStationHistory,
                                            Self::Forecasts,
                                            Self::GridcellHistory,
                                            Self::Heads,
                                            Self::IrrigationData,
                                            Self::Metadata,
                                            Self::StationHistory,
                                            Self::TropicalStorms,
                                            Self::YieldHistory];

    pub fn name(self) -> &'static str {
        match self {
            Self::CedaBiomass => "ceda_biomass",
            Self::CmeStationHistory => "cme_station_history",
            Self::DroughtMonitorHistory => "drought_monitor_history",
            Self::EuropeanStationHistory => "european_station_history",
            Self::Forecasts => "forecasts",
            Self::GridcellHistory => "gridcell_history",
            Self::Heads => "heads",
            Self::IrrigationData => "irrigation_data",
            Self::Metadata => "metadata",
            Self::StationHistory => "station_history",
            Self::TropicalStorms => "tropical_storms",
            Self::YieldHistory => "yield_history",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }
}

/// Invocación concreta: operación + argumentos ya con defaults aplicados.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientCall {
    pub operation: ClientOperation,
    pub args: Map<String, Value>,
}

impl ClientCall {
    pub fn new(operation: ClientOperation, args: Map<String, Value>) -> Self {
        Self { operation, args }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_stable() {
        let g = DataRequest::Gridded { dataset: "chirps".into(),
                                       locations: vec![[12.5, 104.9], [13.0, 105.0]],
                                       imperial_units: false };
        assert_eq!(g.key(), "chirps:12.5_104.9;13_105");
        let s = DataRequest::Station { dataset: "ghcnd".into(),
                                       station_id: "USW00014739".into(),
                                       weather_variable: "SNOW".into(),
                                       imperial_units: true };
        assert_eq!(s.key(), "ghcnd:USW00014739:SNOW");
    }

    #[test]
    fn operation_names_round_trip() {
        for op in ClientOperation::ALL {
            assert_eq!(ClientOperation::from_name(op.name()), Some(op));
        }
        assert_eq!(ClientOperation::from_name("nope"), None);
    }
}

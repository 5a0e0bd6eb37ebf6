//! Agregación del índice sobre el periodo de cobertura.

use chrono::NaiveDate;

use super::series::IndexSeries;
use crate::CoreError;

/// Suma las observaciones con fecha en `[start, end]` (ambos inclusive).
/// Las fechas fuera de la serie no aportan nada; si ninguna observación cae
/// en el rango se devuelve `NoDataInRange`.
pub fn aggregate(series: &IndexSeries, start: NaiveDate, end: NaiveDate) -> Result<f64, CoreError> {
    let obs = series.observations();
    // la serie está ordenada: acotamos con búsqueda binaria
    let lo = obs.partition_point(|o| o.date < start);
    let hi = obs.partition_point(|o| o.date <= end);
    if lo >= hi {
        return Err(CoreError::NoDataInRange { start, end });
    }
    Ok(obs[lo..hi].iter().map(|o| o.value).sum())
}

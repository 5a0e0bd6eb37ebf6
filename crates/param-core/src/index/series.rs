use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: f64,
}

/// Serie ordenada ascendente por fecha, sin fechas repetidas y con valores
/// finitos. Inmutable una vez construida.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexSeries {
    observations: Vec<Observation>,
}

impl IndexSeries {
    /// Construye la serie ordenando por fecha.
    ///
    /// # Errores
    /// `DuplicateObservation` si una fecha aparece dos veces,
    /// `InvalidObservation` si algún valor no es finito.
    pub fn new<I>(points: I) -> Result<Self, CoreError>
        where I: IntoIterator<Item = (NaiveDate, f64)>
    {
        let mut observations: Vec<Observation> = points.into_iter()
                                                       .map(|(date, value)| Observation { date, value })
                                                       .collect();
        observations.sort_by_key(|o| o.date);
        for pair in observations.windows(2) {
            if pair[0].date == pair[1].date {
                return Err(CoreError::DuplicateObservation(pair[0].date));
            }
        }
        if let Some(bad) = observations.iter().find(|o| !o.value.is_finite()) {
            return Err(CoreError::InvalidObservation(bad.date));
        }
        Ok(Self { observations })
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Primera y última fecha cubiertas, si la serie no está vacía.
    pub fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.observations.first()?.date, self.observations.last()?.date))
    }
}

//! Redondeo financiero del payout.
//!
//! Modo: half-to-even a `PAYOUT_DECIMALS` decimales sobre el valor binario
//! exacto del `f64` (`Decimal::from_f64_retain`). Así `2.675` (que en binario
//! es 2.67499…) redondea a `2.67` y `0.125` (exacto) redondea a `0.12`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::PAYOUT_DECIMALS;
use crate::CoreError;

fn to_decimal(value: f64) -> Result<Decimal, CoreError> {
    Decimal::from_f64_retain(value).ok_or_else(|| CoreError::InvalidParams(format!("payout {value} is not representable")))
}

fn rounded(value: f64, strategy: RoundingStrategy) -> Result<Decimal, CoreError> {
    Ok(to_decimal(value)?.round_dp_with_strategy(PAYOUT_DECIMALS, strategy))
}

/// Redondea `value` half-to-even sin superar `ceiling`: si el redondeo cruza
/// el techo se trunca hacia cero.
pub(crate) fn round_bounded(value: f64, ceiling: f64) -> Result<f64, CoreError> {
    let mut r = rounded(value, RoundingStrategy::MidpointNearestEven)?;
    if r > to_decimal(ceiling)? {
        r = rounded(value, RoundingStrategy::ToZero)?;
    }
    r.to_f64().ok_or_else(|| CoreError::InvalidParams(format!("payout {value} is not representable")))
}

/// Redondeo half-to-even a dos decimales.
pub fn round_payout(value: f64) -> Result<f64, CoreError> {
    rounded(value, RoundingStrategy::MidpointNearestEven)?.to_f64()
                                                         .ok_or_else(|| CoreError::InvalidParams(format!("payout {value} is not representable")))
}

/// Payout ya redondeado expresado en centésimas enteras (unidades chain).
pub fn hundredths(value: f64) -> Result<i64, CoreError> {
    let r = rounded(value, RoundingStrategy::MidpointNearestEven)?;
    (r * Decimal::ONE_HUNDRED).to_i64()
                              .ok_or_else(|| CoreError::InvalidParams(format!("payout {value} out of range")))
}

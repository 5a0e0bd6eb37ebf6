//! Payout de un contrato paramétrico:
//!
//! ```text
//! raw    = (index - strike) * tick * sign(option_type)
//! payout = round2(max(0, min(raw, limit)))
//! ```
//!
//! El resultado siempre cae en `[0, limit]` y es monótono en `index` (no
//! decreciente para CALL, no creciente para PUT).

use serde::{Deserialize, Serialize};

use super::option::OptionType;
use super::rounding::round_bounded;
use crate::CoreError;

/// Sensibilidad del contrato: tick explícito o derivado del exhaust.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickSpec {
    Tick(f64),
    /// Valor del índice en el que el payout satura en `limit`.
    Exhaust(f64),
}

impl TickSpec {
    /// Resuelve el tick numérico. Con exhaust: `|limit / (strike - exhaust)|`.
    pub fn resolve(self, strike: f64, limit: f64) -> Result<f64, CoreError> {
        match self {
            Self::Tick(tick) => {
                ensure_finite("tick", tick)?;
                if tick < 0.0 {
                    return Err(CoreError::InvalidParams(format!("tick must be >= 0, got {tick}")));
                }
                Ok(tick)
            }
            Self::Exhaust(exhaust) => {
                ensure_finite("exhaust", exhaust)?;
                if strike == exhaust {
                    return Err(CoreError::DivisionByZero(strike));
                }
                let tick = (limit / (strike - exhaust)).abs();
                if !tick.is_finite() {
                    return Err(CoreError::InvalidParams(format!("derived tick is not finite (strike {strike}, exhaust {exhaust})")));
                }
                Ok(tick)
            }
        }
    }
}

fn ensure_finite(name: &str, value: f64) -> Result<(), CoreError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CoreError::InvalidParams(format!("{name} must be a finite number")))
    }
}

pub fn compute_payout(index_value: f64,
                      strike: f64,
                      tick: TickSpec,
                      limit: f64,
                      option_type: OptionType)
                      -> Result<f64, CoreError> {
    ensure_finite("index value", index_value)?;
    ensure_finite("strike", strike)?;
    ensure_finite("limit", limit)?;
    if limit < 0.0 {
        return Err(CoreError::InvalidParams(format!("limit must be >= 0, got {limit}")));
    }
    let tick = tick.resolve(strike, limit)?;
    let raw = (index_value - strike) * tick * option_type.sign();
    // NaN saldría como `limit` de min/max
    if raw.is_nan() {
        return Err(CoreError::InvalidParams("payout is not a number".to_string()));
    }
    let clamped = raw.min(limit).max(0.0);
    round_bounded(clamped, limit)
}

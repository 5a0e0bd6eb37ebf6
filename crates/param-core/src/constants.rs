//! Constantes del adapter.
//!
//! `ADAPTER_VERSION` forma parte del fingerprint del `EndpointMap`: un cambio
//! de versión invalida fingerprints previos aunque el documento de interfaz
//! sea el mismo.

/// Versión lógica del adapter. Mantener estable mientras no cambie la forma
/// en que se compila el documento de interfaz.
pub const ADAPTER_VERSION: &str = "A1.0";

/// Decimales a los que se redondea todo payout antes de devolverlo.
pub const PAYOUT_DECIMALS: u32 = 2;

/// Factor de las unidades "chain" (sin floats en el contrato on-chain).
pub const CHAIN_UNIT_SCALE: f64 = 100.0;

//! param-core: núcleo puro del evaluador de contratos paramétricos.
//!
//! - `payout`: fórmula lineal acotada (strike / tick / limit / dirección).
//! - `index`: serie de observaciones diarias y agregación por rango de fechas.
//! - `hashing`: JSON canónico y digests (fingerprints y verificación de términos).
//! - `errors`: errores del núcleo y la taxonomía `ErrorKind` compartida por el
//!   resto del workspace.
//!
//! Nada en este crate hace IO; todo es determinista dado el input.
pub mod constants;
pub mod errors;
pub mod hashing;
pub mod index;
pub mod payout;

pub use errors::{CoreError, ErrorKind};
pub use index::{aggregate, IndexSeries, Observation};
pub use payout::{compute_payout, hundredths, round_payout, OptionType, TickSpec};

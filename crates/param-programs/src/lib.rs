//! param-programs – catálogo de reglas de payout.
//!
//! Cada programa declara sus parámetros requeridos y sus parámetros fijos
//! (preset), valida una petición acumulando todos los fallos y evalúa el
//! payout pidiendo la serie al colaborador de datos. El catálogo es cerrado:
//! `ProgramKind` enumera las variantes y `ProgramRegistry` se construye una
//! vez desde una tabla estática.

pub mod error;
pub mod program;
pub mod programs;
pub mod registry;

pub use error::ProgramError;
pub use program::{Program, Validation};
pub use programs::{RainfallIndex, SnowfallThreshold};
pub use registry::{ProgramKind, ProgramRegistry};

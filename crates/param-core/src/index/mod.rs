//! Serie de observaciones diarias y su agregación.

pub mod aggregate;
pub mod series;

pub use aggregate::aggregate;
pub use series::{IndexSeries, Observation};

// param-domain library entry point
pub mod contract;
pub mod envelope;
pub mod error;
pub mod request;
pub use contract::{ContractPayoutParams, UnitConvention};
pub use envelope::ResponseEnvelope;
pub use error::DomainError;
pub use request::{AdapterRequest, InvocationMode, RequestData};

pub mod adapter_error;
pub mod config_error;
pub mod verification_error;

pub use adapter_error::AdapterError;
pub use config_error::ConfigError;
pub use verification_error::VerificationError;

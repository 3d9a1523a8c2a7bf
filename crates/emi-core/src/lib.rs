pub mod emi;
pub mod error;
pub mod format;
pub mod schedule;
pub mod types;
pub mod validation;

pub use error::EmiCalcError;
pub use types::*;

/// Standard result type for all emi-core operations
pub type EmiCalcResult<T> = Result<T, EmiCalcError>;

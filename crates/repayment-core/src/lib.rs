//! Mortgage repayment calculator core.
//!
//! Pure functions over validated loan parameters: form validation,
//! amount-field grouping, currency display formatting, and the closed-form
//! repayment computation (amortising annuity or interest-only). All monetary
//! math in `rust_decimal::Decimal`; rounding happens only at display time.

pub mod compute;
pub mod error;
pub mod format;
pub mod types;
pub mod validate;

pub use error::CalculatorError;
pub use types::*;

/// Standard result type for all calculator operations
pub type CalcResult<T> = Result<T, CalculatorError>;

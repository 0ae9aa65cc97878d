use thiserror::Error;

/// **An application-specific error type**
///
/// Raised while turning raw requests into ledger operations.
/// The ledger itself never fails.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("The '{0}' field is required and must not be zero.")]
    MissingField(&'static str),
    #[error("The amount must be non-negative; got {0}.")]
    NegativeAmount(f64),
    #[error("The amount must be a finite number.")]
    NonFiniteAmount,
    #[error("The account number must be an integer; got '{0}'.")]
    InvalidAccountNumber(String),
}

//! Primitive types shared across the ledger

/// Identifies an account; accounts are implicit and never registered up front.
pub type AccountNumber = i64;

/// A monetary amount.
///
/// Floating-point on purpose, to stay wire-compatible with existing clients.
pub type Amount = f64;

/// Unix time in seconds.
pub type Timestamp = i32;

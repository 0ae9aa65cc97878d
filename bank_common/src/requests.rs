use crate::tx::Transaction;
use crate::types::{AccountNumber, Amount};
use serde::{Deserialize, Serialize};

/// Body of a deposit or a withdrawal, as JSON or as a urlencoded form.
///
/// Both fields are optional on the wire, so that a missing one
/// can be reported as such instead of as a generic parse error.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TransactionRequest {
    pub amount: Option<Amount>,
    pub account_number: Option<AccountNumber>,
}

/// A [`TransactionRequest`] that passed validation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValidTransaction {
    pub account_number: AccountNumber,
    pub amount: Amount,
}

/// Query of the transaction listing.
///
/// Kept as raw strings; see [`ListRequest::bounds`].
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListRequest {
    pub start: Option<String>,
    pub finish: Option<String>,
}

impl ListRequest {
    /// **The requested `(start, finish)` bounds**
    ///
    /// Absent or unparseable values become 0.
    pub fn bounds(&self) -> (i64, i64) {
        (parse_bound(&self.start), parse_bound(&self.finish))
    }
}

fn parse_bound(bound: &Option<String>) -> i64 {
    bound
        .as_deref()
        .and_then(|b| b.trim().parse().ok())
        .unwrap_or(0)
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct BalanceResponse {
    pub balance: Amount,
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct ErrorResponse {
    pub message: String,
}

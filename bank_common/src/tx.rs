use crate::types::{AccountNumber, Amount, Timestamp};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// **A transaction record**
///
/// A single, immutable ledger entry.
///
/// Deposits are recorded as a positive `debit`, withdrawals as a negative `credit`,
/// so summing both columns for an account yields its balance.
/// The service never fills in both columns in one record.
///
/// Transactions should be able to rebuild every account's balance
/// when they are applied in the same sequence to an empty state.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct Transaction {
    pub debit: Amount,
    pub credit: Amount,
    pub account_number: AccountNumber,
    pub created: Timestamp,
}

impl Transaction {
    /// **Creates a deposit record stamped with the current time.**
    pub fn deposit(account_number: AccountNumber, amount: Amount) -> Self {
        Transaction {
            debit: amount,
            credit: 0.0,
            account_number,
            created: now(),
        }
    }

    /// **Creates a withdrawal record stamped with the current time.**
    ///
    /// The `amount` is given as a non-negative number and stored as a negative credit.
    /// A zero amount stays `0.0`, so it never turns into `-0.0` on the wire.
    pub fn withdrawal(account_number: AccountNumber, amount: Amount) -> Self {
        let credit = if amount > 0.0 { -amount } else { amount };

        Transaction {
            debit: 0.0,
            credit,
            account_number,
            created: now(),
        }
    }

    /// Whether this record belongs to the given account.
    pub fn is_for(&self, account_number: AccountNumber) -> bool {
        self.account_number == account_number
    }
}

/// Current Unix time in seconds, truncated to [`Timestamp`].
fn now() -> Timestamp {
    Utc::now().timestamp() as Timestamp
}

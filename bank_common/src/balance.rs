//! Balance aggregation
//!
//! An account's balance is never stored; it is computed on demand from a [`Snapshot`]
//! as the sum of its debits plus the sum of its credits. Credits are already negative.
//!
//! Both sums are computed by two concurrent tasks that each scan the full snapshot.
//! Every task owns its accumulator and reports it exactly once over its own channel,
//! so the result doesn't depend on scheduling.

use crate::ledger::Snapshot;
use crate::types::{AccountNumber, Amount};
use futures::future;
use tokio::sync::oneshot;

/// **Computes the balance of an account over the given snapshot**
///
/// Unknown accounts and empty snapshots yield `0.0`.
///
/// Deterministic for a fixed snapshot: each pass adds in the snapshot's insertion order.
pub async fn balance_of(snapshot: &Snapshot, account_number: AccountNumber) -> Amount {
    let (debits_tx, debits_rx) = oneshot::channel();
    let (credits_tx, credits_rx) = oneshot::channel();

    let debits_snapshot = snapshot.clone();
    tokio::spawn(async move {
        let _ = debits_tx.send(sum_debits(&debits_snapshot, account_number));
    });

    let credits_snapshot = snapshot.clone();
    tokio::spawn(async move {
        let _ = credits_tx.send(sum_credits(&credits_snapshot, account_number));
    });

    let (debits, credits) = future::join(debits_rx, credits_rx).await;

    let debits = partial_sum("debits", account_number, debits);
    let credits = partial_sum("credits", account_number, credits);

    debits + credits
}

/// Sums the debits of an account, in insertion order.
pub fn sum_debits(snapshot: &Snapshot, account_number: AccountNumber) -> Amount {
    snapshot
        .iter()
        .filter(|tx| tx.is_for(account_number))
        .fold(0.0, |sum, tx| sum + tx.debit)
}

/// Sums the credits of an account, in insertion order.
pub fn sum_credits(snapshot: &Snapshot, account_number: AccountNumber) -> Amount {
    snapshot
        .iter()
        .filter(|tx| tx.is_for(account_number))
        .fold(0.0, |sum, tx| sum + tx.credit)
}

/// A summation task only drops its sender without reporting if it panicked.
fn partial_sum(
    pass: &str,
    account_number: AccountNumber,
    received: Result<Amount, oneshot::error::RecvError>,
) -> Amount {
    received.unwrap_or_else(|err| {
        log::error!(
            "The {} pass for account {} didn't report back: {}",
            pass,
            account_number,
            err
        );
        0.0
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tx::Transaction;

    fn snapshot() -> Snapshot {
        Snapshot::from(vec![
            Transaction::deposit(1, 100.0),
            Transaction::deposit(2, 5.0),
            Transaction::withdrawal(1, 30.0),
            Transaction::withdrawal(2, 8.0),
            Transaction::deposit(1, 0.5),
        ])
    }

    #[test]
    fn sums_are_filtered_by_account() {
        let snapshot = snapshot();

        assert_eq!(100.5, sum_debits(&snapshot, 1));
        assert_eq!(-30.0, sum_credits(&snapshot, 1));
        assert_eq!(5.0, sum_debits(&snapshot, 2));
        assert_eq!(-8.0, sum_credits(&snapshot, 2));
    }

    #[tokio::test]
    async fn nets_debits_against_credits() {
        let snapshot = snapshot();

        assert_eq!(70.5, balance_of(&snapshot, 1).await);
        assert_eq!(-3.0, balance_of(&snapshot, 2).await);
    }

    #[tokio::test]
    async fn unknown_account_has_zero_balance() {
        assert_eq!(0.0, balance_of(&snapshot(), 99).await);
    }

    #[tokio::test]
    async fn empty_snapshot_has_zero_balance() {
        assert_eq!(0.0, balance_of(&Snapshot::default(), 1).await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn matches_sequential_sum_exactly() {
        let records = (0..1_000_i32)
            .map(|i| {
                let amount = f64::from(i) * 0.1;
                if i % 3 == 0 {
                    Transaction::withdrawal(i64::from(i % 4), amount)
                } else {
                    Transaction::deposit(i64::from(i % 4), amount)
                }
            })
            .collect::<Vec<_>>();
        let snapshot = Snapshot::from(records);

        for account in 0..4 {
            let expected = sum_debits(&snapshot, account) + sum_credits(&snapshot, account);
            for _ in 0..5 {
                assert_eq!(expected, balance_of(&snapshot, account).await);
            }
        }
    }
}

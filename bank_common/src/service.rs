use crate::balance;
use crate::ledger::LedgerStore;
use crate::tx::Transaction;
use crate::types::{AccountNumber, Amount};

/// Records deposits and withdrawals, and answers balance and history queries.
///
/// Cloning the service shares the underlying ledger.
#[derive(Clone, Debug, Default)]
pub struct LedgerService {
    store: LedgerStore,
}

impl LedgerService {
    /// **Creates a service on top of the given ledger.**
    pub fn new(store: LedgerStore) -> Self {
        LedgerService { store }
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    /// **Deposit funds**
    ///
    /// The `amount` is expected to be non-negative; callers validate it.
    ///
    /// Returns the account's balance right after the deposit was recorded.
    pub async fn deposit(&self, account_number: AccountNumber, amount: Amount) -> Amount {
        self.record(Transaction::deposit(account_number, amount)).await
    }

    /// **Withdraw funds**
    ///
    /// The `amount` is expected to be non-negative; it is stored as a negative credit.
    ///
    /// There is no overdraft check: a withdrawal is recorded even if
    /// it takes the balance below zero.
    ///
    /// Returns the account's balance right after the withdrawal was recorded.
    pub async fn withdraw(&self, account_number: AccountNumber, amount: Amount) -> Amount {
        self.record(Transaction::withdrawal(account_number, amount)).await
    }

    /// **Retrieves the balance of an account**
    ///
    /// Accounts that never transacted have a zero balance.
    pub async fn balance_of(&self, account_number: AccountNumber) -> Amount {
        let snapshot = self.store.snapshot().await;
        balance::balance_of(&snapshot, account_number).await
    }

    /// **Lists the transactions in `[start, finish)`, in insertion order**
    ///
    /// Out-of-range and inverted bounds are clamped, yielding an empty list at worst.
    pub async fn transactions(&self, start: i64, finish: i64) -> Vec<Transaction> {
        self.store.slice(start, finish).await
    }

    async fn record(&self, tx: Transaction) -> Amount {
        log::debug!("Recording {:?}", tx);
        self.store.append(tx).await;
        self.balance_of(tx.account_number).await
    }
}

pub mod balance;
pub mod cli;
pub mod errors;
pub mod ledger;
pub mod requests;
pub mod service;
pub mod tx;
pub mod types;
pub mod validation;

pub use ledger::{LedgerStore, Snapshot};
pub use requests::*;
pub use service::LedgerService;
pub use tx::Transaction;

//! Handler functions

use crate::errors::reject;
use bank_common::validation::parse_account_number;
use bank_common::{
    BalanceResponse, LedgerService, ListRequest, TransactionRequest, TransactionsResponse,
};
use std::convert::Infallible;
use warp::{Rejection, Reply};

/// The `balance_of` handler
///
/// Responds with the account's balance; accounts that never transacted have a zero balance.
///
/// GET /api/transactions/balance/{account_number}
pub async fn balance_of(
    account_number: String,
    service: LedgerService,
) -> Result<impl Reply, Rejection> {
    log::debug!("balance_of; account_number = {:?}", account_number);

    let account_number = parse_account_number(&account_number).map_err(reject)?;
    let balance = service.balance_of(account_number).await;

    Ok(warp::reply::json(&BalanceResponse { balance }))
}

/// The `deposit` handler
///
/// Responds with the account's balance after the deposit.
///
/// POST /api/transactions/deposit
pub async fn deposit(
    request: TransactionRequest,
    service: LedgerService,
) -> Result<impl Reply, Rejection> {
    log::debug!("deposit; request = {:?}", request);

    let request = request.validate().map_err(reject)?;
    let balance = service.deposit(request.account_number, request.amount).await;

    Ok(warp::reply::json(&BalanceResponse { balance }))
}

/// The `withdraw` handler
///
/// Responds with the account's balance after the withdrawal, which may be negative.
///
/// POST /api/transactions/withdraw
pub async fn withdraw(
    request: TransactionRequest,
    service: LedgerService,
) -> Result<impl Reply, Rejection> {
    log::debug!("withdraw; request = {:?}", request);

    let request = request.validate().map_err(reject)?;
    let balance = service.withdraw(request.account_number, request.amount).await;

    Ok(warp::reply::json(&BalanceResponse { balance }))
}

/// **Fetches a page of the transaction log**
///
/// The `transactions` handler
///
/// Returns the transactions in `[start, finish)`, in the order they were recorded.
///
/// Missing or unparseable bounds are treated as 0, and bounds are clamped
/// to the log's length, so this never fails; at worst the list is empty.
///
/// GET /api/transactions (start=0 and finish=0 by default, so an empty page)
///
/// GET /api/transactions?start=0&finish=10
pub async fn transactions(
    request: ListRequest,
    service: LedgerService,
) -> Result<impl Reply, Infallible> {
    log::debug!("transactions; request = {:?}", request);

    let (start, finish) = request.bounds();
    let transactions = service.transactions(start, finish).await;

    Ok(warp::reply::json(&TransactionsResponse { transactions }))
}

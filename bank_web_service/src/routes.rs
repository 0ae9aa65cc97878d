//! The service's routes, request tagging and error recovery

use crate::config::Config;
use crate::errors::handle_rejection;
use crate::handlers;
use bank_common::{LedgerService, ListRequest, TransactionRequest};
use std::convert::Infallible;
use uuid::Uuid;
use warp::reply::WithHeader;
use warp::{Filter, Rejection, Reply};

/// Header carrying the id generated for every request
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// **Builds all routes of the web service**
///
/// Every response, including error responses, is tagged with a fresh request id.
pub fn routes(
    service: LedgerService,
    config: &Config,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let service_state = warp::any().map(move || service.clone());

    let balance_of = warp::path!("api" / "transactions" / "balance" / String)
        .and(warp::get())
        .and(service_state.clone())
        .and_then(handlers::balance_of);

    let deposit = warp::path!("api" / "transactions" / "deposit")
        .and(warp::post())
        .and(transaction_body(config.body_limit))
        .and(service_state.clone())
        .and_then(handlers::deposit);

    let withdraw = warp::path!("api" / "transactions" / "withdraw")
        .and(warp::post())
        .and(transaction_body(config.body_limit))
        .and(service_state.clone())
        .and_then(handlers::withdraw);

    let transactions = warp::path!("api" / "transactions")
        .and(warp::get())
        .and(warp::query::<ListRequest>())
        .and(service_state)
        .and_then(handlers::transactions);

    balance_of
        .or(deposit)
        .or(withdraw)
        .or(transactions)
        .recover(handle_rejection)
        .map(|reply| with_request_id(reply))
        .with(warp::log("bank"))
}

/// **A deposit or withdrawal body**
///
/// The `Content-Type` header picks the decoder: JSON bodies must say so,
/// everything else, including a body without the header, is decoded as a urlencoded form.
fn transaction_body(
    limit: u64,
) -> impl Filter<Extract = (TransactionRequest,), Error = Rejection> + Clone {
    let json = json_content_type().and(warp::body::json());

    warp::body::content_length_limit(limit).and(json.or(warp::body::form()).unify())
}

fn json_content_type() -> impl Filter<Extract = (), Error = Rejection> + Clone {
    warp::header::optional::<String>("content-type")
        .and_then(|content_type: Option<String>| async move {
            match content_type {
                Some(content_type) if is_json(&content_type) => Ok(()),
                _ => Err(warp::reject::not_found()),
            }
        })
        .untuple_one()
}

fn is_json(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

fn with_request_id<R: Reply>(reply: R) -> WithHeader<R> {
    let request_id = Uuid::new_v4().to_string();
    log::trace!("Tagging response with request id {}", request_id);
    warp::reply::with_header(reply, REQUEST_ID_HEADER, request_id)
}

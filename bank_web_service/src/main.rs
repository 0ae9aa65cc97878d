//! The "Bank Web Service's" entry point.

use bank_common::{LedgerService, LedgerStore};
use bank_web_service::config::Config;
use bank_web_service::routes::routes;
use std::env;

/// The "Bank Web Service's" entry point.
#[tokio::main]
async fn main() {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "bank=info");
    }
    pretty_env_logger::init();

    let config = Config::from_env();
    let service = LedgerService::new(LedgerStore::new());

    log::info!("Listening on http://{}", config.addr);

    // Start up the server
    warp::serve(routes(service, &config)).run(config.addr).await;
}

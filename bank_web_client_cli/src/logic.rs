use crate::DEFAULT_BASE_URL;
use bank_common::cli::constants::*;
use bank_common::cli::helpers::*;
use bank_common::requests::*;
use bank_common::types::{AccountNumber, Amount};
use reqwest::{Client, StatusCode, Url};
use std::error::Error;

pub async fn main_loop(base_url: Url) -> Result<(), Box<dyn Error>> {
    let client = Client::new();

    loop {
        let line = match read_from_stdin(PROMPT) {
            Input::Line(line) => line,
            Input::Blank => continue,
            Input::Eof => break,
        };

        let words = line.split_whitespace().collect::<Vec<_>>();
        let cmd = words[0].to_lowercase();

        match cmd.as_str() {
            HELP | "h" => help(),
            DEPOSIT | "d" => deposit(words, &client, &base_url).await?,
            WITHDRAW | "w" => withdraw(words, &client, &base_url).await?,
            BALANCE | "b" => balance(words, &client, &base_url).await?,
            LIST | "l" => list(words, &client, &base_url).await?,
            QUIT | "q" => break,
            _ => println!("Unrecognized command; try `help`."),
        }
    }

    Ok(())
}

/// **Get base URL**
///
/// Tries to create a URL from the provided argument.
///
/// If that is not possible, falls back to a default.
///
/// It returns a URL in any case.
///
/// This is meant to be a base URL for all operations, so it should end with a slash.
///
/// - If the provided argument is the `None` variant,
///   returns a default value as the base URL.
/// - If it's a `String`, tries to parse it into URL.
///   - If it's a valid URL string, returns it as URL.
///   - If it's a malformed URL string, returns the default.
///
/// The default value is [`DEFAULT_BASE_URL`].
pub fn get_base_url(base_url: Option<String>) -> Url {
    let base_url = base_url.unwrap_or_else(|| {
        println!(
            "No CLI base URL provided; using default: {}",
            DEFAULT_BASE_URL
        );
        DEFAULT_BASE_URL.into()
    });

    Url::parse(base_url.as_str())
        .or_else(|_| {
            println!(
                "Provided base URL could not be parsed; using default: {}",
                DEFAULT_BASE_URL
            );
            Url::parse(DEFAULT_BASE_URL)
        })
        .expect("The default base URL is valid.")
}

/// **Send a POST request for `deposit` and `withdraw`**
///
/// Prints the account's balance after the transaction.
async fn transaction_request(
    client: &Client,
    base_url: &Url,
    path: &str,
    account_number: AccountNumber,
    amount: Amount,
) -> Result<(), Box<dyn Error>> {
    let url = base_url.join(path)?;

    let response = client
        .post(url)
        .json(&TransactionRequest {
            amount: Some(amount),
            account_number: Some(account_number),
        })
        .send()
        .await?;

    if response.status().is_success() {
        let balance: BalanceResponse = response.json().await?;
        println!(
            "The account {} has the following balance: {}.",
            account_number, balance.balance
        );
    } else {
        eprintln!("[ERROR] {} \"{}\"", response.status(), response.text().await?);
    }

    Ok(())
}

/// **Parses the `<account> <amount>` arguments of `deposit` and `withdraw`**
///
/// Prints the command's usage, or why an argument was rejected, and returns `None`
/// if the arguments can't be used.
fn account_and_amount(words: &[&str], command: &str) -> Option<(AccountNumber, Amount)> {
    if words.len() != 3 {
        println!("The {command} command: {command} <account number> <amount>");
        return None;
    }

    let account_number = parse_account(words[1])?;
    let amount = parse_amount(words[2])?;

    Some((account_number, amount))
}

/// **Deposit funds to an account**
///
/// Accounts don't need to exist in advance; an account exists as soon as it transacts.
/// Account number 0 is not allowed; the service rejects it.
///
/// Performs basic input validation of the account number, which should be an integer,
/// and of the amount, which should be a positive number.
async fn deposit(words: Vec<&str>, client: &Client, base_url: &Url) -> Result<(), Box<dyn Error>> {
    if let Some((account_number, amount)) = account_and_amount(&words, DEPOSIT) {
        transaction_request(client, base_url, DEPOSIT, account_number, amount).await?;
    }

    Ok(())
}

/// **Withdraw funds from an account**
///
/// There is no overdraft check, so the resulting balance may be negative.
///
/// Performs the same basic input validation as [`deposit`].
async fn withdraw(words: Vec<&str>, client: &Client, base_url: &Url) -> Result<(), Box<dyn Error>> {
    if let Some((account_number, amount)) = account_and_amount(&words, WITHDRAW) {
        transaction_request(client, base_url, WITHDRAW, account_number, amount).await?;
    }

    Ok(())
}

/// **Print the balance of a single account**
async fn balance(words: Vec<&str>, client: &Client, base_url: &Url) -> Result<(), Box<dyn Error>> {
    if words.len() != 2 {
        println!("The balance command: {BALANCE} <account number>");
        return Ok(());
    }

    let Some(account_number) = parse_account(words[1]) else {
        return Ok(());
    };

    let url = base_url.join(&format!("balance/{account_number}"))?;
    let response = client.get(url).send().await?;

    match response.status().as_u16() {
        200..=299 => {
            let balance: BalanceResponse = response.json().await?;
            println!(
                "The account {} has the following balance: {}.",
                account_number, balance.balance
            )
        }
        400..=599 => {
            eprintln!("[ERROR] {} \"{}\"", response.status(), response.text().await?);
        }
        _ => println!("[ERROR] Unexpected status code: {}", response.status()),
    }

    Ok(())
}

/// **Builds the query of the `list` command**
///
/// `list` alone covers the whole transaction log, `list <start>` everything from `start` on.
/// The bounds are passed on as given; the service treats unparseable ones as 0.
fn list_request(words: &[&str]) -> ListRequest {
    let start = words.get(1).copied().unwrap_or("0");
    let finish = words.get(2).map_or_else(|| i64::MAX.to_string(), |w| w.to_string());

    ListRequest {
        start: Some(start.to_string()),
        finish: Some(finish),
    }
}

/// **Print a page of the transaction log**
///
/// The command can optionally take a `start` and a `finish` position;
/// transactions in `[start, finish)` are printed in the order they were recorded.
async fn list(words: Vec<&str>, client: &Client, base_url: &Url) -> Result<(), Box<dyn Error>> {
    println!("The list command: {LIST} [start] [finish]");

    let response = client
        .get(base_url.clone())
        .query(&list_request(&words))
        .send()
        .await?;

    if response.status() == StatusCode::OK {
        let page: TransactionsResponse = response.json().await?;
        println!("The transaction log: {:#?}", page.transactions);
    } else {
        eprintln!("[ERROR] \"{}\"", response.text().await?);
    }

    Ok(())
}

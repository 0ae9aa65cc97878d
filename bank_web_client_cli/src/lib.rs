pub mod logic;

/// The web service's transactions API, as it listens by default
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080/api/transactions/";

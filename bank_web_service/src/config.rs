//! Web service configuration
//!
//! Read from the environment. Unset or malformed values fall back to defaults.

use std::env;
use std::net::SocketAddr;

/// Environment variable holding the address to listen on
pub const ADDR_VAR: &str = "BANK_ADDR";

/// Environment variable holding the maximum accepted request body size, in bytes
pub const BODY_LIMIT_VAR: &str = "BANK_BODY_LIMIT";

pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_BODY_LIMIT: u64 = 1024 * 16;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub addr: SocketAddr,
    pub body_limit: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            addr: default_addr(),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl Config {
    /// **Reads the configuration from the process environment.**
    pub fn from_env() -> Self {
        Self::from_vars(env::var(ADDR_VAR).ok(), env::var(BODY_LIMIT_VAR).ok())
    }

    /// **Builds the configuration from raw variable values.**
    ///
    /// - If a value is `None`, its default is used.
    /// - If a value can't be parsed, a warning is logged and its default is used.
    pub fn from_vars(addr: Option<String>, body_limit: Option<String>) -> Self {
        let addr = addr
            .map(|addr| {
                addr.trim().parse().unwrap_or_else(|_| {
                    log::warn!(
                        "{} could not be parsed from \"{}\"; using default: {}",
                        ADDR_VAR,
                        addr,
                        DEFAULT_ADDR
                    );
                    default_addr()
                })
            })
            .unwrap_or_else(default_addr);

        let body_limit = body_limit
            .map(|limit| {
                limit.trim().parse().unwrap_or_else(|_| {
                    log::warn!(
                        "{} could not be parsed from \"{}\"; using default: {}",
                        BODY_LIMIT_VAR,
                        limit,
                        DEFAULT_BODY_LIMIT
                    );
                    DEFAULT_BODY_LIMIT
                })
            })
            .unwrap_or(DEFAULT_BODY_LIMIT);

        Config { addr, body_limit }
    }
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

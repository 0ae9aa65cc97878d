/// CLI Commands

pub const HELP: &str = "help";
pub const DEPOSIT: &str = "deposit";
pub const WITHDRAW: &str = "withdraw";
pub const BALANCE: &str = "balance";
pub const LIST: &str = "list";
pub const QUIT: &str = "quit";

/// Various CLI constants

pub const PROMPT: &str = "> ";

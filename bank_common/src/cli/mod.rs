//! Building blocks shared by the CLI apps

pub mod constants;
pub mod helpers;

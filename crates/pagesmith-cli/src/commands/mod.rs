//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod deps;
pub mod export;
pub mod frameworks;
pub mod init;

mod options;

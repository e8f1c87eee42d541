//! Entry points behind the command line

mod browse;
mod config;

pub use browse::cmd_browse;
pub use config::cmd_config;

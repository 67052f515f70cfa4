//! Configuration for the lobby generator host.
//!
//! Settings persist to disk as `config.ron`, tolerate missing and unknown
//! fields, and can be overridden from the command line via clap.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CONFIG_FILE, Config, DebugConfig, GeneratorConfig};
pub use error::ConfigError;

//! `gpicker`: command-line front end for the picker data model.
//!
//! The library half exists so integration tests and other tools can drive
//! the same argument model and dispatch as the binary.

mod args;
mod commands;
pub mod config;
pub mod error;
mod handlers;
pub mod logging;
mod output;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;

//! Testing infrastructure for gpicker tests.
//!
//! - `fixtures`: canonical picker payloads (document records, callback results)
//! - `assertions`: JSON structure checks for CLI output
//! - `TestWorld`: isolated temp directory for running the `gpicker` binary

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};

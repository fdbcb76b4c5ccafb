// src/lib.rs
#![crate_type = "lib"]
#![crate_name = "bookmark"]

// Core modules
pub mod domain;

// CLI modules
pub mod cli;
pub mod config;
pub mod exitcode;
pub mod util;

/// Name used to prefix every diagnostic written to stderr
pub const TOOL_NAME: &str = "bookmark";

//! Command implementations for the CLI
//!
//! - start: Start the report web server
//! - calc: Compute a report in the terminal
//! - test: Test configuration validity
//! - config: Configuration display and validation

pub mod calc;
pub mod config;
pub mod start;
pub mod test;

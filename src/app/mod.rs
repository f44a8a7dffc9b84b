//! Application assembly: CLI parsing, logging setup and command dispatch

pub mod cli;
pub mod startup;

//! Command construction, process execution and output parsing.

pub mod client;
pub mod command;
pub mod parser;
pub mod runner;

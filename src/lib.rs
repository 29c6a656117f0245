//! # nordtray
//!
//! A convenience layer over the `nordvpn` command-line client. It builds the
//! client's argument vectors, runs it, and turns its human-readable output
//! into typed snapshots.
//!
//! ## Modules
//! - [`core`]: Process runner, argument builders, output parsers and the [`NordVpn`] facade.
//! - [`state`]: Status and settings snapshots plus setting/technology/protocol enumerations.
//! - [`config`]: `config.toml` loading.
//! - [`constants`]: Defaults and every literal matched in the client's output.
//! - [`error`]: Error type.

pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod state;

pub use crate::core::client::NordVpn;
pub use crate::core::runner::{CommandRunner, SystemRunner};
pub use error::{Error, Result};

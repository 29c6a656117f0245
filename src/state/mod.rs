//! Typed snapshots of the external client's state.
//!
//! Every snapshot is built fresh from one invocation's output and never
//! merged with an earlier one.

mod connection;
mod settings;

pub use connection::{ClientWarning, ConnectionDetails, ConnectionState, Status};
pub use settings::{canonical_token, Protocol, SettingName, Settings, Technology};

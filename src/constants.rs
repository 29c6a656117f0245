//! Application-wide constants and configuration values.
//!
//! This module defines all static configuration values used throughout nordtray,
//! including timing defaults, the labels and phrases matched in the external
//! client's output, and UI messages. Every literal the `nordvpn` CLI is expected
//! to print lives here, so drift in the tool's phrasing is a one-place fix.

// === Application Metadata ===

/// Application name and title (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Timing Defaults ===
// Compiled-in defaults. Users can override them via config.toml.
// AppConfig::default() references these so there is exactly one source of truth.

/// Default UI refresh rate in milliseconds.
pub const DEFAULT_TICK_RATE: u64 = 1000;
/// Default interval between status polls (seconds).
pub const DEFAULT_STATUS_POLL_SECS: u64 = 5;
/// Default lifetime of a toast notification (seconds).
pub const DEFAULT_TOAST_SECS: u64 = 3;
/// Maximum number of lines kept in the activity log.
pub const MAX_LOG_LINES: usize = 1000;

// === Path Configuration ===

/// Name of the configuration directory under the platform config root.
pub const CONFIG_DIR_NAME: &str = "nordtray";
/// Fallback configuration directory when no platform config root exists.
pub const FALLBACK_CONFIG_DIR: &str = ".nordtray";
/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// === External Client ===

/// Default program name of the external VPN client.
pub const DEFAULT_BINARY: &str = "nordvpn";

/// Tokens the client uses for a truthy setting value.
pub const TRUTHY_TOKENS: [&str; 3] = ["enabled", "on", "true"];
/// Value token for switching a setting on.
pub const VALUE_ON: &str = "on";
/// Value token for switching a setting off.
pub const VALUE_OFF: &str = "off";

// === Client Messages ===

/// Prefix of the confirmation printed after a successful connect.
pub const MSG_CONNECT_SUCCESS: &str = "You are connected to";
/// Confirmation printed after a successful disconnect.
pub const MSG_DISCONNECT_SUCCESS: &str = "You are disconnected from NordVPN";
/// The one stable message printed for a rejected command.
pub const MSG_INVALID_COMMAND: &str = "The command you entered is not valid.";
/// Printed by `cities` for countries without city-level servers.
pub const MSG_INVALID_CITIES_COMMAND: &str = "Servers by city are not available for this country";
/// Printed when the installed client is outdated.
pub const MSG_UPDATE_WARNING: &str =
    "A new version of NordVpn is available! Please update the application.";
/// Printed when the client has no logged-in account.
pub const MSG_LOGIN_WARNING: &str = "Please enter your login details.";

// === Status Labels ===

/// Label of the connection state line.
pub const LABEL_STATUS: &str = "Status";
/// Label of the current server hostname.
pub const LABEL_CURRENT_SERVER: &str = "Current server";
/// Label of the server country.
pub const LABEL_COUNTRY: &str = "Country";
/// Label of the server city.
pub const LABEL_CITY: &str = "City";
/// Label of the server address.
pub const LABEL_SERVER_IP: &str = "Server IP";
/// Label of the transport protocol.
pub const LABEL_PROTOCOL: &str = "Current protocol";
/// Label of the tunnel technology.
pub const LABEL_TECHNOLOGY: &str = "Current technology";
/// Label of the transfer summary.
pub const LABEL_TRANSFER: &str = "Transfer";
/// Label of the session uptime.
pub const LABEL_UPTIME: &str = "Uptime";

// === UI Messages ===

/// Backend initialization message.
pub const MSG_BACKEND_INIT: &str = "IO: Querying nordvpn client...";
/// Ready state message.
pub const MSG_READY: &str = "SUCCESS: Indicator active. Press [?] for keys.";
/// Connection in progress message template.
pub const MSG_CONNECTING: &str = "Connecting to {}";
/// Data fetching placeholder.
pub const MSG_FETCHING: &str = "Fetching...";
/// No data available placeholder.
pub const MSG_NO_DATA: &str = "---";

// === Messages: CLI Output ===

pub const CLI_MSG_CONNECTED: &str = "Connected";
pub const CLI_MSG_CONNECT_FAILED: &str = "Connection failed";
pub const CLI_MSG_DISCONNECTED: &str = "Disconnected";
pub const CLI_MSG_DISCONNECT_FAILED: &str = "Disconnect failed";
pub const CLI_MSG_APPLIED: &str = "Applied";
pub const CLI_MSG_REJECTED: &str = "Rejected by nordvpn: ";
pub const CLI_MSG_NO_ENTRIES: &str = "(none)";

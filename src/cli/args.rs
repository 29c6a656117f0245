//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use nordtray::state::{Protocol, SettingName, Technology};
use std::path::PathBuf;

/// nordtray - terminal indicator and scriptable wrapper for the nordvpn client
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding config.toml
    #[arg(long, global = true, env = "NORDTRAY_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Enable debug logging on stderr (overridden by `RUST_LOG`)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print snapshots and lists as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute; without one the indicator starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the connection status
    Status,
    /// Show the client settings
    Settings,
    /// List available countries
    Countries,
    /// List available server groups
    Groups,
    /// List cities with servers in a country
    Cities {
        /// Country name (spaces are fine)
        country: String,
    },
    /// Connect to a server, optionally in a country, group or city
    Connect {
        #[arg(long, conflicts_with_all = ["group", "city"])]
        country: Option<String>,
        #[arg(long, conflicts_with = "city")]
        group: Option<String>,
        #[arg(long)]
        city: Option<String>,
    },
    /// Disconnect from the current server
    Disconnect,
    /// Change a client setting
    Set {
        #[command(subcommand)]
        setting: SetCommand,
    },
    /// Manage whitelisted subnets and ports
    Whitelist {
        #[command(subcommand)]
        action: WhitelistCommand,
    },
    /// Show the client's help for a setting
    HelpSetting {
        /// Setting label or token, e.g. "Kill Switch" or killswitch
        setting: SettingName,
    },
    /// Show the resolved configuration
    Config,
}

/// On/off switch value.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Switch {
    On,
    Off,
}

impl Switch {
    pub fn enabled(self) -> bool {
        self == Switch::On
    }
}

#[derive(Subcommand, Debug)]
pub enum SetCommand {
    /// Tunnel technology (nordlynx or openvpn)
    Technology { technology: Technology },
    Firewall { state: Switch },
    Killswitch { state: Switch },
    Cybersec { state: Switch },
    Notify { state: Switch },
    Ipv6 { state: Switch },
    /// Auto-connect, optionally to a given country, city, group or server
    Autoconnect {
        state: Switch,
        /// Target tokens, passed through unchanged
        args: Vec<String>,
    },
    /// Custom DNS servers, or `off`
    Dns {
        #[arg(required = true, num_args = 1..)]
        servers: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum WhitelistCommand {
    Add {
        #[command(subcommand)]
        target: WhitelistTarget,
    },
    Remove {
        #[command(subcommand)]
        target: WhitelistTarget,
    },
}

#[derive(Subcommand, Debug)]
pub enum WhitelistTarget {
    /// A subnet in CIDR notation
    Subnet { cidr: String },
    /// A port, optionally restricted to UDP or TCP
    Port {
        port: String,
        protocol: Option<Protocol>,
    },
}

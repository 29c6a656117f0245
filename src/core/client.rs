//! Client facade over the `nordvpn` command-line tool.
//!
//! Each operation is one round trip: build the argument vector, run the
//! client, and reduce its text to a success flag, a snapshot or a name list.
//! Nothing is cached between calls.

use crate::config::AppConfig;
use crate::constants;
use crate::core::command::{self, WhitelistAction};
use crate::core::parser;
use crate::core::runner::{CommandRunner, SystemRunner};
use crate::error::Result;
use crate::state::{Protocol, SettingName, Settings, Status, Technology};

/// Handle on the external client.
///
/// Cheap to build and holds no state besides the runner, so it can be
/// shared across threads; overlapping calls race only inside the client.
///
/// # Example
///
/// ```ignore
/// let vpn = NordVpn::new();
/// if vpn.get_status()?.is_connected() {
///     vpn.disconnect()?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct NordVpn<R = SystemRunner> {
    runner: R,
    program: String,
}

impl NordVpn<SystemRunner> {
    /// Client running the `nordvpn` binary from `$PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_runner(SystemRunner)
    }

    /// Client running the binary named in the config.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new().with_program(&config.binary)
    }
}

impl Default for NordVpn<SystemRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> NordVpn<R> {
    /// Client using a custom runner.
    pub fn with_runner(runner: R) -> Self {
        Self {
            runner,
            program: constants::DEFAULT_BINARY.to_string(),
        }
    }

    /// Overrides the program name or path.
    #[must_use]
    pub fn with_program(mut self, program: &str) -> Self {
        self.program = program.to_string();
        self
    }

    /// Program name or path used for every invocation.
    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    fn run(&self, args: Vec<String>) -> Result<String> {
        let mut argv = Vec::with_capacity(args.len() + 1);
        argv.push(self.program.clone());
        argv.extend(args);
        self.runner.run(&argv)
    }

    fn run_connect(&self, target: Option<&str>) -> Result<bool> {
        let output = self.run(command::connect(target))?;
        Ok(output.contains(constants::MSG_CONNECT_SUCCESS))
    }

    /// Runs a `set`/`whitelist` command; only the invalid-command message counts as failure.
    fn run_checked(&self, args: Vec<String>) -> Result<bool> {
        let output = self.run(args)?;
        let accepted = !output.contains(constants::MSG_INVALID_COMMAND);
        if !accepted {
            tracing::debug!(%output, "client rejected command");
        }
        Ok(accepted)
    }

    fn run_names(&self, args: Vec<String>) -> Result<Vec<String>> {
        let output = self.run(args)?;
        Ok(parser::parse_names(&output))
    }

    // === Connection ===

    /// Connects to the server the client picks.
    ///
    /// # Errors
    ///
    /// Returns an error only if the client cannot be launched.
    pub fn connect(&self) -> Result<bool> {
        self.run_connect(None)
    }

    /// Connects to a server in `country`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the client cannot be launched.
    pub fn connect_to_country(&self, country: &str) -> Result<bool> {
        self.run_connect(Some(country))
    }

    /// Connects to a server in `group` (e.g. `P2P`, `Double VPN`).
    ///
    /// # Errors
    ///
    /// Returns an error only if the client cannot be launched.
    pub fn connect_to_group(&self, group: &str) -> Result<bool> {
        self.run_connect(Some(group))
    }

    /// Connects to a server in `city`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the client cannot be launched.
    pub fn connect_to_city(&self, city: &str) -> Result<bool> {
        self.run_connect(Some(city))
    }

    /// # Errors
    ///
    /// Returns an error only if the client cannot be launched.
    pub fn disconnect(&self) -> Result<bool> {
        let output = self.run(command::disconnect())?;
        Ok(output.contains(constants::MSG_DISCONNECT_SUCCESS))
    }

    // === Queries ===

    /// # Errors
    ///
    /// Returns an error only if the client cannot be launched.
    pub fn get_status(&self) -> Result<Status> {
        let output = self.run(command::status())?;
        Ok(Status::parse(&output))
    }

    /// # Errors
    ///
    /// Returns an error only if the client cannot be launched.
    pub fn get_settings(&self) -> Result<Settings> {
        let output = self.run(command::settings())?;
        Ok(Settings::parse(&output))
    }

    /// Available countries, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error only if the client cannot be launched.
    pub fn get_countries(&self) -> Result<Vec<String>> {
        self.run_names(command::countries())
    }

    /// Available server groups, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error only if the client cannot be launched.
    pub fn get_groups(&self) -> Result<Vec<String>> {
        self.run_names(command::groups())
    }

    /// Cities with servers in `country`, sorted; empty for countries
    /// without city-level servers.
    ///
    /// # Errors
    ///
    /// Returns an error only if the client cannot be launched.
    pub fn get_cities(&self, country: &str) -> Result<Vec<String>> {
        let output = self.run(command::cities(country))?;
        if output.contains(constants::MSG_INVALID_CITIES_COMMAND) {
            return Ok(Vec::new());
        }
        Ok(parser::parse_names(&output))
    }

    /// The client's help text for `setting`, verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error only if the client cannot be launched.
    pub fn get_settings_help(&self, setting: SettingName) -> Result<String> {
        self.run(command::settings_help(setting))
    }

    // === Settings ===

    /// # Errors
    ///
    /// Returns an error only if the client cannot be launched.
    pub fn set_technology(&self, technology: Technology) -> Result<bool> {
        self.run_checked(command::set_technology(technology))
    }

    /// # Errors
    ///
    /// Returns an error only if the client cannot be launched.
    pub fn set_firewall(&self, enabled: bool) -> Result<bool> {
        self.run_checked(command::set_switch(SettingName::Firewall, enabled))
    }

    /// # Errors
    ///
    /// Returns an error only if the client cannot be launched.
    pub fn set_kill_switch(&self, enabled: bool) -> Result<bool> {
        self.run_checked(command::set_switch(SettingName::KillSwitch, enabled))
    }

    /// # Errors
    ///
    /// Returns an error only if the client cannot be launched.
    pub fn set_cybersec(&self, enabled: bool) -> Result<bool> {
        self.run_checked(command::set_switch(SettingName::CyberSec, enabled))
    }

    /// # Errors
    ///
    /// Returns an error only if the client cannot be launched.
    pub fn set_notify(&self, enabled: bool) -> Result<bool> {
        self.run_checked(command::set_switch(SettingName::Notify, enabled))
    }

    /// Enables auto-connect, optionally to a specific target given as
    /// discrete tokens, or disables it.
    ///
    /// # Errors
    ///
    /// Returns an error only if the client cannot be launched.
    pub fn set_auto_connect(&self, enabled: bool, args: &[&str]) -> Result<bool> {
        self.run_checked(command::set_auto_connect(enabled, args))
    }

    /// # Errors
    ///
    /// Returns an error only if the client cannot be launched.
    pub fn set_ipv6(&self, enabled: bool) -> Result<bool> {
        self.run_checked(command::set_switch(SettingName::Ipv6, enabled))
    }

    /// Sets custom DNS servers, or turns custom DNS off (ignoring `servers`).
    ///
    /// # Errors
    ///
    /// Returns an error only if the client cannot be launched.
    pub fn set_dns(&self, enabled: bool, servers: &[&str]) -> Result<bool> {
        self.run_checked(command::set_dns(enabled, servers))
    }

    /// Sends `set <setting> on|off` for any setting.
    ///
    /// The client decides what it accepts; `set dns on`, for one, is rejected
    /// and reported as `false`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the client cannot be launched.
    pub fn set_flag(&self, setting: SettingName, enabled: bool) -> Result<bool> {
        self.run_checked(command::set_switch(setting, enabled))
    }

    /// # Errors
    ///
    /// Returns an error only if the client cannot be launched.
    pub fn add_whitelisted_subnet(&self, subnet: &str) -> Result<bool> {
        self.run_checked(command::whitelist_subnet(WhitelistAction::Add, subnet))
    }

    /// # Errors
    ///
    /// Returns an error only if the client cannot be launched.
    pub fn remove_whitelisted_subnet(&self, subnet: &str) -> Result<bool> {
        self.run_checked(command::whitelist_subnet(WhitelistAction::Remove, subnet))
    }

    /// # Errors
    ///
    /// Returns an error only if the client cannot be launched.
    pub fn add_whitelisted_port(&self, port: &str, protocol: Option<Protocol>) -> Result<bool> {
        self.run_checked(command::whitelist_port(WhitelistAction::Add, port, protocol))
    }

    /// # Errors
    ///
    /// Returns an error only if the client cannot be launched.
    pub fn remove_whitelisted_port(&self, port: &str, protocol: Option<Protocol>) -> Result<bool> {
        self.run_checked(command::whitelist_port(WhitelistAction::Remove, port, protocol))
    }
}

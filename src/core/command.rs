//! Argument vectors for each `nordvpn` operation.
//!
//! Builders return the arguments after the program name as discrete tokens.
//! Nothing here joins arguments into a string, so values are never re-split.

use crate::constants;
use crate::state::{Protocol, SettingName, Technology};

/// Direction of a whitelist change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhitelistAction {
    Add,
    Remove,
}

impl WhitelistAction {
    const fn token(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }
}

/// Normalizes a user supplied country, city or group name for the client.
///
/// Trims the name and joins its words with underscores:
/// `"United Kingdom"` becomes `"United_Kingdom"`.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("_")
}

fn args<I, S>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    tokens.into_iter().map(Into::into).collect()
}

const fn switch(enabled: bool) -> &'static str {
    if enabled {
        constants::VALUE_ON
    } else {
        constants::VALUE_OFF
    }
}

/// `connect [target]`, with the target normalized.
#[must_use]
pub fn connect(target: Option<&str>) -> Vec<String> {
    let mut argv = args(["connect"]);
    if let Some(target) = target.map(normalize_name).filter(|t| !t.is_empty()) {
        argv.push(target);
    }
    argv
}

#[must_use]
pub fn disconnect() -> Vec<String> {
    args(["disconnect"])
}

#[must_use]
pub fn status() -> Vec<String> {
    args(["status"])
}

#[must_use]
pub fn settings() -> Vec<String> {
    args(["settings"])
}

#[must_use]
pub fn countries() -> Vec<String> {
    args(["countries"])
}

#[must_use]
pub fn groups() -> Vec<String> {
    args(["groups"])
}

/// `cities <country>`, with the country normalized.
#[must_use]
pub fn cities(country: &str) -> Vec<String> {
    args(["cities".to_string(), normalize_name(country)])
}

/// `set <token> --help`
#[must_use]
pub fn settings_help(setting: SettingName) -> Vec<String> {
    args([String::from("set"), setting.token(), String::from("--help")])
}

/// `set <token> <values...>`
#[must_use]
pub fn set<I, S>(setting: SettingName, values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut argv = args([String::from("set"), setting.token()]);
    argv.extend(values.into_iter().map(Into::into));
    argv
}

/// `set <token> on|off`
#[must_use]
pub fn set_switch(setting: SettingName, enabled: bool) -> Vec<String> {
    set(setting, [switch(enabled)])
}

/// `set technology <nordlynx|openvpn>`
#[must_use]
pub fn set_technology(technology: Technology) -> Vec<String> {
    set(SettingName::Technology, [technology.token()])
}

/// `set autoconnect on [args...]` or `set autoconnect off`.
///
/// Extra arguments are only sent when enabling.
#[must_use]
pub fn set_auto_connect(enabled: bool, extra: &[&str]) -> Vec<String> {
    let mut argv = set_switch(SettingName::AutoConnect, enabled);
    if enabled {
        argv.extend(extra.iter().map(|arg| (*arg).to_string()));
    }
    argv
}

/// `set dns <servers...>` or `set dns off`; servers are ignored when disabling.
#[must_use]
pub fn set_dns(enabled: bool, servers: &[&str]) -> Vec<String> {
    if enabled {
        set(SettingName::Dns, servers.iter().copied())
    } else {
        set_switch(SettingName::Dns, false)
    }
}

/// `whitelist add|remove subnet <cidr>`
#[must_use]
pub fn whitelist_subnet(action: WhitelistAction, subnet: &str) -> Vec<String> {
    args(["whitelist", action.token(), "subnet", subnet.trim()])
}

/// `whitelist add|remove port <port> [protocol]`
#[must_use]
pub fn whitelist_port(action: WhitelistAction, port: &str, protocol: Option<Protocol>) -> Vec<String> {
    let mut argv = args(["whitelist", action.token(), "port", port.trim()]);
    if let Some(protocol) = protocol {
        argv.push(protocol.token().to_string());
    }
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("United Kingdom"), "United_Kingdom");
        assert_eq!(normalize_name("  Bosnia And  Herzegovina "), "Bosnia_And_Herzegovina");
        assert_eq!(normalize_name("Hong_Kong"), "Hong_Kong");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn test_connect() {
        assert_eq!(connect(None), vec!["connect"]);
        assert_eq!(connect(Some("South Africa")), vec!["connect", "South_Africa"]);
        assert_eq!(connect(Some("  ")), vec!["connect"]);
    }

    #[test]
    fn test_queries() {
        assert_eq!(status(), vec!["status"]);
        assert_eq!(settings(), vec!["settings"]);
        assert_eq!(countries(), vec!["countries"]);
        assert_eq!(groups(), vec!["groups"]);
        assert_eq!(cities("United Kingdom"), vec!["cities", "United_Kingdom"]);
    }

    #[test]
    fn test_help_uses_same_token_as_set() {
        for name in SettingName::ALL {
            let help = settings_help(name);
            let set = set_switch(name, true);
            assert_eq!(help[1], set[1]);
            assert_eq!(help.last().map(String::as_str), Some("--help"));
        }
        assert_eq!(settings_help(SettingName::KillSwitch), vec!["set", "killswitch", "--help"]);
    }

    #[test]
    fn test_switches() {
        assert_eq!(set_switch(SettingName::Firewall, true), vec!["set", "firewall", "on"]);
        assert_eq!(set_switch(SettingName::Ipv6, false), vec!["set", "ipv6", "off"]);
        assert_eq!(set_technology(Technology::OpenVpn), vec!["set", "technology", "openvpn"]);
    }

    #[test]
    fn test_auto_connect() {
        assert_eq!(set_auto_connect(true, &[]), vec!["set", "autoconnect", "on"]);
        assert_eq!(
            set_auto_connect(true, &["United_States"]),
            vec!["set", "autoconnect", "on", "United_States"]
        );
        assert_eq!(set_auto_connect(false, &["ignored"]), vec!["set", "autoconnect", "off"]);
    }

    #[test]
    fn test_auto_connect_keeps_spaced_argument_whole() {
        let argv = set_auto_connect(true, &["two words"]);
        assert_eq!(argv.len(), 4);
        assert_eq!(argv[3], "two words");
    }

    #[test]
    fn test_dns() {
        assert_eq!(
            set_dns(true, &["1.1.1.1", "2.2.2.2"]),
            vec!["set", "dns", "1.1.1.1", "2.2.2.2"]
        );
        assert_eq!(set_dns(false, &["1.1.1.1"]), vec!["set", "dns", "off"]);
        assert_eq!(set_dns(false, &[]), vec!["set", "dns", "off"]);
    }

    #[test]
    fn test_whitelist() {
        assert_eq!(
            whitelist_subnet(WhitelistAction::Add, "192.168.0.0/16"),
            vec!["whitelist", "add", "subnet", "192.168.0.0/16"]
        );
        assert_eq!(
            whitelist_port(WhitelistAction::Remove, "1234", None),
            vec!["whitelist", "remove", "port", "1234"]
        );
        assert_eq!(
            whitelist_port(WhitelistAction::Add, "1234", Some(Protocol::Udp)),
            vec!["whitelist", "add", "port", "1234", "UDP"]
        );
    }
}

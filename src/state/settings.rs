//! Client settings types.
//!
//! [`SettingName`] is the single table tying each setting's display label
//! (as printed by `nordvpn settings`) to the token used on the command line.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::core::parser::{find_bool_value, find_list_value, find_string_value};

/// Canonicalizes a setting label into its command token.
///
/// Lowercases and strips spaces and hyphens: `"Kill Switch"` becomes
/// `"killswitch"`. Applying it to a token returns the token unchanged.
#[must_use]
pub fn canonical_token(label: &str) -> String {
    label
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Settings understood by `nordvpn set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingName {
    Technology,
    Firewall,
    KillSwitch,
    CyberSec,
    Notify,
    AutoConnect,
    Ipv6,
    Dns,
    WhitelistedSubnets,
}

impl SettingName {
    /// Every setting, in the order the client lists them.
    pub const ALL: [SettingName; 9] = [
        Self::Technology,
        Self::Firewall,
        Self::KillSwitch,
        Self::CyberSec,
        Self::Notify,
        Self::AutoConnect,
        Self::Ipv6,
        Self::Dns,
        Self::WhitelistedSubnets,
    ];

    /// Label as printed in the client's settings output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Firewall => "Firewall",
            Self::KillSwitch => "Kill Switch",
            Self::CyberSec => "CyberSec",
            Self::Notify => "Notify",
            Self::AutoConnect => "Auto-connect",
            Self::Ipv6 => "IPv6",
            Self::Dns => "DNS",
            Self::WhitelistedSubnets => "Whitelisted subnets",
        }
    }

    /// Token used to build `nordvpn set <token> ...`.
    #[must_use]
    pub fn token(self) -> String {
        canonical_token(self.label())
    }
}

impl fmt::Display for SettingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SettingName {
    type Err = String;

    /// Accepts a display label or a command token, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = canonical_token(s.trim());
        Self::ALL
            .into_iter()
            .find(|name| name.token() == wanted)
            .ok_or_else(|| format!("Unknown setting: {s}"))
    }
}

/// Tunnel technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Technology {
    #[serde(rename = "NORDLYNX")]
    NordLynx,
    #[serde(rename = "OpenVPN")]
    OpenVpn,
}

impl Technology {
    /// Name as the client prints it.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NordLynx => "NORDLYNX",
            Self::OpenVpn => "OpenVPN",
        }
    }

    /// Value passed to `nordvpn set technology`.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::NordLynx => "nordlynx",
            Self::OpenVpn => "openvpn",
        }
    }

    /// Matches a technology name case-insensitively; `None` for anything else.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "nordlynx" => Some(Self::NordLynx),
            "openvpn" => Some(Self::OpenVpn),
            _ => None,
        }
    }
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Technology {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| format!("Unknown technology: {s}"))
    }
}

/// Transport protocol for whitelisted ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Protocol {
    #[serde(rename = "UDP")]
    Udp,
    #[serde(rename = "TCP")]
    Tcp,
}

impl Protocol {
    /// Token passed to `nordvpn whitelist ... port <port> <token>`.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Udp => "UDP",
            Self::Tcp => "TCP",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Protocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "UDP" => Ok(Self::Udp),
            "TCP" => Ok(Self::Tcp),
            _ => Err(format!("Unknown protocol: {s}")),
        }
    }
}

/// Snapshot of the client's configuration.
///
/// Each field is `None` when its label was missing from the output. A label
/// that was found always yields `Some`, even for unrecognized values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub technology: Option<Technology>,
    pub firewall: Option<bool>,
    pub kill_switch: Option<bool>,
    pub cybersec: Option<bool>,
    pub notify: Option<bool>,
    pub auto_connect: Option<bool>,
    pub ipv6: Option<bool>,
    pub dns: Option<bool>,
    /// CIDR strings in source order, kept as the client printed them between
    /// commas; empty when none are declared.
    pub whitelisted_subnets: Vec<String>,
}

impl Settings {
    /// Parses the output of `nordvpn settings`.
    ///
    /// Every field is extracted independently; one unparseable entry never
    /// blanks the others.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let flag = |name: SettingName| find_bool_value(name.label(), raw);

        let technology = find_string_value(SettingName::Technology.label(), raw)
            .and_then(|value| {
                let technology = Technology::from_label(&value);
                if technology.is_none() {
                    tracing::debug!(%value, "unknown technology in settings output");
                }
                technology
            });

        // An empty value splits into one empty item; that means no subnets.
        let whitelisted_subnets = find_list_value(SettingName::WhitelistedSubnets.label(), raw)
            .filter(|items| !matches!(items.as_slice(), [only] if only.trim().is_empty()))
            .unwrap_or_default();

        Self {
            technology,
            firewall: flag(SettingName::Firewall),
            kill_switch: flag(SettingName::KillSwitch),
            cybersec: flag(SettingName::CyberSec),
            notify: flag(SettingName::Notify),
            auto_connect: flag(SettingName::AutoConnect),
            ipv6: flag(SettingName::Ipv6),
            dns: flag(SettingName::Dns),
            whitelisted_subnets,
        }
    }

    /// Current value of a boolean setting, `None` for non-boolean settings.
    #[must_use]
    pub fn flag(&self, name: SettingName) -> Option<bool> {
        match name {
            SettingName::Firewall => self.firewall,
            SettingName::KillSwitch => self.kill_switch,
            SettingName::CyberSec => self.cybersec,
            SettingName::Notify => self.notify,
            SettingName::AutoConnect => self.auto_connect,
            SettingName::Ipv6 => self.ipv6,
            SettingName::Dns => self.dns,
            SettingName::Technology | SettingName::WhitelistedSubnets => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETTINGS: &str = "Technology: NORDLYNX
Firewall: enabled
Kill Switch: disabled
CyberSec: enabled
Notify: disabled
Auto-connect: disabled
IPv6: disabled
DNS: disabled
Whitelisted subnets:
    192.168.0.0/24,172.16.0.0/16
";

    #[test]
    fn test_canonical_tokens() {
        let tokens: Vec<String> = SettingName::ALL.iter().map(|s| s.token()).collect();
        assert_eq!(
            tokens,
            vec![
                "technology",
                "firewall",
                "killswitch",
                "cybersec",
                "notify",
                "autoconnect",
                "ipv6",
                "dns",
                "whitelistedsubnets"
            ]
        );
    }

    #[test]
    fn test_canonical_token_idempotent() {
        for name in SettingName::ALL {
            let token = name.token();
            assert_eq!(canonical_token(&token), token);
            assert!(!token.contains(' ') && !token.contains('-'));
            assert_eq!(token, token.to_lowercase());
        }
    }

    #[test]
    fn test_setting_name_from_str() {
        assert_eq!("Kill Switch".parse(), Ok(SettingName::KillSwitch));
        assert_eq!("killswitch".parse(), Ok(SettingName::KillSwitch));
        assert_eq!("auto-connect".parse(), Ok(SettingName::AutoConnect));
        assert!("meshnet".parse::<SettingName>().is_err());
    }

    #[test]
    fn test_technology_from_label() {
        assert_eq!(Technology::from_label("NORDLYNX"), Some(Technology::NordLynx));
        assert_eq!(Technology::from_label("OpenVPN"), Some(Technology::OpenVpn));
        assert_eq!(Technology::from_label("OPENVPN"), Some(Technology::OpenVpn));
        assert_eq!(Technology::from_label("IKEv2"), None);
    }

    #[test]
    fn test_protocol_from_str() {
        assert_eq!("udp".parse(), Ok(Protocol::Udp));
        assert_eq!("TCP".parse(), Ok(Protocol::Tcp));
        assert!("sctp".parse::<Protocol>().is_err());
    }

    #[test]
    fn test_parse_settings() {
        let settings = Settings::parse(SETTINGS);
        assert_eq!(settings.technology, Some(Technology::NordLynx));
        assert_eq!(settings.firewall, Some(true));
        assert_eq!(settings.kill_switch, Some(false));
        assert_eq!(settings.cybersec, Some(true));
        assert_eq!(settings.notify, Some(false));
        assert_eq!(settings.auto_connect, Some(false));
        assert_eq!(settings.ipv6, Some(false));
        assert_eq!(settings.dns, Some(false));
        assert_eq!(
            settings.whitelisted_subnets,
            vec!["192.168.0.0/24", "172.16.0.0/16"]
        );
    }

    #[test]
    fn test_parse_settings_unknown_technology_keeps_others() {
        let raw = SETTINGS.replace("NORDLYNX", "IKEv2");
        let settings = Settings::parse(&raw);
        assert_eq!(settings.technology, None);
        assert_eq!(settings.firewall, Some(true));
        assert_eq!(settings.whitelisted_subnets.len(), 2);
    }

    #[test]
    fn test_parse_settings_missing_keys() {
        let settings = Settings::parse("Firewall: enabled");
        assert_eq!(settings.firewall, Some(true));
        assert_eq!(settings.kill_switch, None);
        assert_eq!(settings.technology, None);
        assert!(settings.whitelisted_subnets.is_empty());
        assert_eq!(Settings::parse(""), Settings::default());
    }

    #[test]
    fn test_parse_subnets_keeps_items_as_printed() {
        let settings = Settings::parse("Whitelisted subnets: 10.0.0.0/8, ,192.168.0.0/24");
        assert_eq!(
            settings.whitelisted_subnets,
            vec!["10.0.0.0/8", " ", "192.168.0.0/24"]
        );

        let settings = Settings::parse("DNS: disabled\nWhitelisted subnets: ");
        assert!(settings.whitelisted_subnets.is_empty());
    }

    #[test]
    fn test_settings_flag_lookup() {
        let settings = Settings::parse(SETTINGS);
        assert_eq!(settings.flag(SettingName::Firewall), Some(true));
        assert_eq!(settings.flag(SettingName::KillSwitch), Some(false));
        assert_eq!(settings.flag(SettingName::Technology), None);
    }
}

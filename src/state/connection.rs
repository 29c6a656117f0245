//! VPN connection status types.

use serde::Serialize;
use std::fmt;

use crate::constants;
use crate::core::parser::find_string_value;

/// Tunnel state as reported by `nordvpn status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ConnectionState {
    /// Tunnel is up.
    Connected,
    /// No tunnel. Also the fallback for unparseable output.
    #[default]
    Disconnected,
    /// Tunnel is being established.
    Connecting,
}

impl ConnectionState {
    /// Token the client prints after `Status:`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Connected => "Connected",
            Self::Disconnected => "Disconnected",
            Self::Connecting => "Connecting",
        }
    }

    /// Matches a state token exactly; `None` for anything else.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        [Self::Connected, Self::Disconnected, Self::Connecting]
            .into_iter()
            .find(|state| state.as_str() == token)
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Technical details of an established connection.
///
/// Only ever built as a whole: if any of the labels is missing, no details
/// are reported at all.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ConnectionDetails {
    /// Server hostname (e.g. `uk2462.nordvpn.com`).
    pub server: String,
    pub country: String,
    pub city: String,
    /// Server address, dotted quad.
    pub ip: String,
    /// Transport protocol token (e.g. `UDP`).
    pub protocol: String,
    /// Tunnel technology token (e.g. `NORDLYNX`).
    pub technology: String,
    /// Free-text transfer summary.
    pub transfer: String,
    /// Free-text session duration.
    pub uptime: String,
}

impl ConnectionDetails {
    fn parse(raw: &str) -> Option<Self> {
        Some(Self {
            server: find_string_value(constants::LABEL_CURRENT_SERVER, raw)?,
            country: find_string_value(constants::LABEL_COUNTRY, raw)?,
            city: find_string_value(constants::LABEL_CITY, raw)?,
            ip: find_string_value(constants::LABEL_SERVER_IP, raw)?,
            protocol: find_string_value(constants::LABEL_PROTOCOL, raw)?,
            technology: find_string_value(constants::LABEL_TECHNOLOGY, raw)?,
            transfer: find_string_value(constants::LABEL_TRANSFER, raw)?,
            uptime: find_string_value(constants::LABEL_UPTIME, raw)?,
        })
    }
}

/// Notices the client may print alongside any output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClientWarning {
    /// The installed client is outdated.
    UpdateAvailable,
    /// No account is logged in.
    LoginRequired,
}

impl ClientWarning {
    /// Scans `raw` for known notices, in declaration order.
    #[must_use]
    pub fn scan(raw: &str) -> Vec<Self> {
        [
            (Self::UpdateAvailable, constants::MSG_UPDATE_WARNING),
            (Self::LoginRequired, constants::MSG_LOGIN_WARNING),
        ]
        .into_iter()
        .filter(|(_, message)| raw.contains(message))
        .map(|(warning, _)| warning)
        .collect()
    }

    /// Message as printed by the client.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::UpdateAvailable => constants::MSG_UPDATE_WARNING,
            Self::LoginRequired => constants::MSG_LOGIN_WARNING,
        }
    }
}

/// Snapshot of the connection at query time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Status {
    pub state: ConnectionState,
    /// Present only when connected and every detail label was found.
    pub details: Option<ConnectionDetails>,
    pub warnings: Vec<ClientWarning>,
    #[serde(skip)]
    raw: String,
}

impl Status {
    /// Parses the output of `nordvpn status`.
    ///
    /// An unrecognized or missing `Status:` value reports a disconnected
    /// tunnel without details; the raw text and warnings are still kept so
    /// the client's own message reaches [`Status::summary`]. Details are
    /// only read for a connected tunnel.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let parsed =
            find_string_value(constants::LABEL_STATUS, raw).and_then(|s| ConnectionState::from_token(&s));

        let (state, details) = match parsed {
            Some(ConnectionState::Connected) => {
                (ConnectionState::Connected, ConnectionDetails::parse(raw))
            }
            Some(state) => (state, None),
            None => {
                tracing::debug!("status output did not parse, reporting disconnected");
                (ConnectionState::default(), None)
            }
        };

        Self {
            state,
            details,
            warnings: ClientWarning::scan(raw),
            raw: raw.to_string(),
        }
    }

    /// Whether the tunnel is up.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected
    }

    /// One-line label for the indicator.
    ///
    /// The client prefixes its output with a `-\|/` spinner, so everything
    /// up to the last `-` is dropped. Falls back to the state name.
    #[must_use]
    pub fn summary(&self) -> String {
        let tail = self.raw.rsplit('-').next().unwrap_or_default().trim();
        if tail.is_empty() {
            self.state.to_string()
        } else {
            tail.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONNECTED: &str = "Status: Connected
Current server: aserver.nordvpn.com
Country: ACountry
City: ACity
Server IP: 1.1.1.1
Current technology: NORDLYNX
Current protocol: UDP
Transfer: 17.16 KiB received, 21.23 KiB sent
Uptime: 3 seconds";

    #[test]
    fn test_state_from_token() {
        assert_eq!(ConnectionState::from_token("Connected"), Some(ConnectionState::Connected));
        assert_eq!(ConnectionState::from_token("Connecting"), Some(ConnectionState::Connecting));
        assert_eq!(ConnectionState::from_token("connected"), None);
        assert_eq!(ConnectionState::from_token(""), None);
    }

    #[test]
    fn test_parse_connected() {
        let status = Status::parse(CONNECTED);
        assert!(status.is_connected());
        let details = status.details.expect("details present");
        assert_eq!(details.server, "aserver.nordvpn.com");
        assert_eq!(details.country, "ACountry");
        assert_eq!(details.city, "ACity");
        assert_eq!(details.ip, "1.1.1.1");
        assert_eq!(details.protocol, "UDP");
        assert_eq!(details.technology, "NORDLYNX");
        assert_eq!(details.transfer, "17.16 KiB received, 21.23 KiB sent");
        assert_eq!(details.uptime, "3 seconds");
    }

    #[test]
    fn test_parse_connected_missing_label_drops_all_details() {
        let raw = CONNECTED.replace("Uptime: 3 seconds", "");
        let status = Status::parse(&raw);
        assert_eq!(status.state, ConnectionState::Connected);
        assert_eq!(status.details, None);
    }

    #[test]
    fn test_parse_connecting_ignores_details() {
        let raw = CONNECTED.replace("Status: Connected", "Status: Connecting");
        let status = Status::parse(&raw);
        assert_eq!(status.state, ConnectionState::Connecting);
        assert_eq!(status.details, None);
    }

    #[test]
    fn test_parse_relabeled_is_disconnected() {
        let raw = CONNECTED.replace(": ", "WRONG: ");
        let status = Status::parse(&raw);
        assert_eq!(status.state, ConnectionState::Disconnected);
        assert_eq!(status.details, None);
    }

    #[test]
    fn test_parse_unknown_state_is_disconnected() {
        let status = Status::parse("Status: Reconnecting\nCountry: X");
        assert_eq!(status.state, ConnectionState::Disconnected);
        assert_eq!(status.details, None);
        assert_eq!(Status::parse(""), Status::default());
    }

    #[test]
    fn test_unparsed_status_keeps_client_message() {
        let status = Status::parse(constants::MSG_LOGIN_WARNING);
        assert_eq!(status.state, ConnectionState::Disconnected);
        assert_eq!(status.details, None);
        assert_eq!(status.warnings, vec![ClientWarning::LoginRequired]);
        assert_eq!(status.summary(), constants::MSG_LOGIN_WARNING);
    }

    #[test]
    fn test_summary_strips_spinner() {
        let status = Status::parse("\r-\r  \r\\\r  \r|\r  \r-\r  \rStatus: Disconnected");
        assert_eq!(status.summary(), "Status: Disconnected");
        assert_eq!(Status::default().summary(), "Disconnected");
    }

    #[test]
    fn test_warnings_detected() {
        let raw = format!("{}\nStatus: Disconnected", constants::MSG_UPDATE_WARNING);
        let status = Status::parse(&raw);
        assert_eq!(status.warnings, vec![ClientWarning::UpdateAvailable]);
        assert_eq!(status.state, ConnectionState::Disconnected);
    }
}

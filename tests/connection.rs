mod common;

use common::{client, CONNECT_OK, MissingBinaryRunner};
use nordtray::{Error, NordVpn};

#[test]
fn test_connect() {
    let vpn = client(CONNECT_OK);
    assert!(vpn.connect().unwrap());
    vpn.runner().assert_called_once_with("nordvpn connect");
}

#[test]
fn test_connect_fail() {
    let vpn = client("Error");
    assert!(!vpn.connect().unwrap());
    vpn.runner().assert_called_once_with("nordvpn connect");
}

#[test]
fn test_connect_requires_exact_phrase() {
    // Success is a case-sensitive substring match, whatever the exit code.
    assert!(!client("you are connected to Italy #12").connect().unwrap());
    assert!(client(&format!("Connecting...\n{CONNECT_OK}")).connect().unwrap());
}

#[test]
fn test_connect_to_country() {
    let vpn = client(CONNECT_OK);
    assert!(vpn.connect_to_country("Birmania").unwrap());
    vpn.runner().assert_called_once_with("nordvpn connect Birmania");
}

#[test]
fn test_connect_to_country_with_spaces() {
    let vpn = client(CONNECT_OK);
    assert!(vpn.connect_to_country("United Kingdom").unwrap());
    vpn.runner().assert_called_once_with("nordvpn connect United_Kingdom");
}

#[test]
fn test_connect_to_country_fail() {
    let vpn = client("Error");
    assert!(!vpn.connect_to_country("Birmania").unwrap());
    vpn.runner().assert_called_once_with("nordvpn connect Birmania");
}

#[test]
fn test_connect_to_group() {
    let vpn = client(CONNECT_OK);
    assert!(vpn.connect_to_group("secret_group").unwrap());
    vpn.runner().assert_called_once_with("nordvpn connect secret_group");
}

#[test]
fn test_connect_to_group_fail() {
    let vpn = client("Error");
    assert!(!vpn.connect_to_group("Double VPN").unwrap());
    vpn.runner().assert_called_once_with("nordvpn connect Double_VPN");
}

#[test]
fn test_connect_to_city() {
    let vpn = client(CONNECT_OK);
    assert!(vpn.connect_to_city("Tortona").unwrap());
    vpn.runner().assert_called_once_with("nordvpn connect Tortona");
}

#[test]
fn test_connect_to_city_fail() {
    let vpn = client("Error");
    assert!(!vpn.connect_to_city("Tortona").unwrap());
    vpn.runner().assert_called_once_with("nordvpn connect Tortona");
}

#[test]
fn test_disconnect() {
    let vpn = client("You are disconnected from NordVPN");
    assert!(vpn.disconnect().unwrap());
    vpn.runner().assert_called_once_with("nordvpn disconnect");
}

#[test]
fn test_disconnect_fail() {
    let vpn = client("Error");
    assert!(!vpn.disconnect().unwrap());
    vpn.runner().assert_called_once_with("nordvpn disconnect");
}

#[test]
fn test_custom_program() {
    let vpn = client(CONNECT_OK).with_program("/opt/nordvpn/bin/nordvpn");
    assert!(vpn.connect().unwrap());
    vpn.runner()
        .assert_called_once_with("/opt/nordvpn/bin/nordvpn connect");
}

#[test]
fn test_missing_binary_propagates() {
    let vpn = NordVpn::with_runner(MissingBinaryRunner);
    assert!(matches!(vpn.connect(), Err(Error::Launch { .. })));
    assert!(matches!(vpn.get_status(), Err(Error::Launch { .. })));
    assert!(matches!(vpn.set_firewall(true), Err(Error::Launch { .. })));
}

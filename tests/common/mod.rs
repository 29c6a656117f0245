//! Shared test helpers: a runner that replays canned client output.

#![allow(dead_code)]

use std::sync::Mutex;

use nordtray::{CommandRunner, Error, NordVpn, Result};

/// Returns the same output for every invocation and records each argv.
pub struct FakeRunner {
    output: String,
    calls: Mutex<Vec<Vec<String>>>,
}

impl FakeRunner {
    pub fn new(output: &str) -> Self {
        Self {
            output: output.to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    /// Asserts exactly one invocation whose argv equals the whitespace
    /// separated `expected`.
    pub fn assert_called_once_with(&self, expected: &str) {
        assert_eq!(self.calls(), vec![argv(expected)]);
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, argv: &[String]) -> Result<String> {
        self.calls.lock().unwrap().push(argv.to_vec());
        Ok(self.output.clone())
    }
}

/// Behaves like a machine without the client installed.
pub struct MissingBinaryRunner;

impl CommandRunner for MissingBinaryRunner {
    fn run(&self, argv: &[String]) -> Result<String> {
        Err(Error::Launch {
            program: argv[0].clone(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })
    }
}

pub fn client(output: &str) -> NordVpn<FakeRunner> {
    NordVpn::with_runner(FakeRunner::new(output))
}

pub fn argv(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

pub const CONNECT_OK: &str = "You are connected to United Kingdom #2462 (uk2462.nordvpn.com)!";
pub const INVALID: &str = "The command you entered is not valid.";

pub const BANNER: &str = "New feature - Meshnet! Link remote devices in Meshnet to connect to them directly over encrypted private tunnels, and route your traffic through another device. Use the `nordvpn meshnet --help` command to get started. Learn more: https://nordvpn.com/features/meshnet/";

pub const COUNTRIES: &str = "Albania\t\t\tEstonia\t\t\tLatvia\t\t\tSlovakia
Argentina\t\tFinland\t\t\tLithuania\t\tSlovenia
Australia\t\tFrance\t\t\tLuxembourg\t\tSouth_Africa
Austria\t\t\tGeorgia\t\t\tMalaysia\t\tSouth_Korea
Belgium\t\t\tGermany\t\t\tMexico\t\t\tSpain
Bosnia_And_Herzegovina\tGreece\t\t\tMoldova\t\t\tSweden
Brazil\t\t\tHong_Kong\t\tNetherlands\t\tSwitzerland
Bulgaria\t\tHungary\t\t\tNew_Zealand\t\tTaiwan
Canada\t\t\tIceland\t\t\tNorth_Macedonia\t\tThailand
Chile\t\t\tIndia\t\t\tNorway\t\t\tTurkey
Costa_Rica\t\tIndonesia\t\tPoland\t\t\tUkraine
Croatia\t\t\tIreland\t\t\tPortugal\t\tUnited_Kingdom
Cyprus\t\t\tIsrael\t\t\tRomania\t\t\tUnited_States
Czech_Republic\t\tItaly\t\t\tSerbia\t\t\tVietnam
Denmark\t\t\tJapan\t\t\tSingapore";

pub const GROUPS: &str = "Africa_The_Middle_East_And_India\tOnion_Over_VPN
Asia_Pacific\t\t\t\tP2P
Double_VPN\t\t\t\tStandard_VPN_Servers
Europe\t\t\t\t\tThe_Americas
";

pub const STATUS_CONNECTED: &str = "Status: Connected
Current server: aserver.nordvpn.com
Country: ACountry
City: ACity
Server IP: 1.1.1.1
Current technology: NORDLYNX
Current protocol: UDP
Transfer: 17.16 KiB received, 21.23 KiB sent
Uptime: 3 seconds";

pub const SETTINGS: &str = "Technology: NORDLYNX
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

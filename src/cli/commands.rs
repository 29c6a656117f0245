//! CLI command handlers.

use crate::cli::args::{Commands, SetCommand, WhitelistCommand, WhitelistTarget};
use color_eyre::Result;
use nordtray::config::{AppConfig, ConfigSource};
use nordtray::constants;
use nordtray::state::{Settings, Status};
use nordtray::NordVpn;
use serde::Serialize;
use std::path::Path;

/// Where the running configuration came from, for `nordtray config`.
pub struct ConfigInfo<'a> {
    pub dir: &'a Path,
    pub source: ConfigSource,
    pub config: &'a AppConfig,
}

/// Runs a one-shot command.
///
/// Returns `false` when the client reported the operation as unsuccessful,
/// so the caller can exit non-zero.
///
/// # Errors
///
/// Returns an error if the client cannot be launched or output fails to serialize.
pub fn handle_command(
    command: &Commands,
    vpn: &NordVpn,
    json: bool,
    info: &ConfigInfo<'_>,
) -> Result<bool> {
    match command {
        Commands::Status => {
            let status = vpn.get_status()?;
            if json {
                print_json(&status)?;
            } else {
                print_status(&status);
            }
            Ok(true)
        }
        Commands::Settings => {
            let settings = vpn.get_settings()?;
            if json {
                print_json(&settings)?;
            } else {
                print_settings(&settings);
            }
            Ok(true)
        }
        Commands::Countries => print_names(&vpn.get_countries()?, json),
        Commands::Groups => print_names(&vpn.get_groups()?, json),
        Commands::Cities { country } => print_names(&vpn.get_cities(country)?, json),
        Commands::Connect {
            country,
            group,
            city,
        } => {
            let connected = match (country, group, city) {
                (Some(country), _, _) => vpn.connect_to_country(country)?,
                (_, Some(group), _) => vpn.connect_to_group(group)?,
                (_, _, Some(city)) => vpn.connect_to_city(city)?,
                _ => vpn.connect()?,
            };
            report(
                connected,
                constants::CLI_MSG_CONNECTED,
                constants::CLI_MSG_CONNECT_FAILED,
            );
            Ok(connected)
        }
        Commands::Disconnect => {
            let done = vpn.disconnect()?;
            report(
                done,
                constants::CLI_MSG_DISCONNECTED,
                constants::CLI_MSG_DISCONNECT_FAILED,
            );
            Ok(done)
        }
        Commands::Set { setting } => {
            let applied = handle_set(setting, vpn)?;
            report_applied(applied);
            Ok(applied)
        }
        Commands::Whitelist { action } => {
            let applied = handle_whitelist(action, vpn)?;
            report_applied(applied);
            Ok(applied)
        }
        Commands::HelpSetting { setting } => {
            println!("{}", vpn.get_settings_help(*setting)?);
            Ok(true)
        }
        Commands::Config => {
            print_config(info)?;
            Ok(true)
        }
    }
}

fn handle_set(setting: &SetCommand, vpn: &NordVpn) -> Result<bool> {
    let applied = match setting {
        SetCommand::Technology { technology } => vpn.set_technology(*technology)?,
        SetCommand::Firewall { state } => vpn.set_firewall(state.enabled())?,
        SetCommand::Killswitch { state } => vpn.set_kill_switch(state.enabled())?,
        SetCommand::Cybersec { state } => vpn.set_cybersec(state.enabled())?,
        SetCommand::Notify { state } => vpn.set_notify(state.enabled())?,
        SetCommand::Ipv6 { state } => vpn.set_ipv6(state.enabled())?,
        SetCommand::Autoconnect { state, args } => {
            let args: Vec<&str> = args.iter().map(String::as_str).collect();
            vpn.set_auto_connect(state.enabled(), &args)?
        }
        SetCommand::Dns { servers } => {
            let disable = servers.len() == 1 && servers[0].eq_ignore_ascii_case(constants::VALUE_OFF);
            let servers: Vec<&str> = servers.iter().map(String::as_str).collect();
            vpn.set_dns(!disable, &servers)?
        }
    };
    Ok(applied)
}

fn handle_whitelist(action: &WhitelistCommand, vpn: &NordVpn) -> Result<bool> {
    let applied = match action {
        WhitelistCommand::Add { target } => match target {
            WhitelistTarget::Subnet { cidr } => vpn.add_whitelisted_subnet(cidr)?,
            WhitelistTarget::Port { port, protocol } => vpn.add_whitelisted_port(port, *protocol)?,
        },
        WhitelistCommand::Remove { target } => match target {
            WhitelistTarget::Subnet { cidr } => vpn.remove_whitelisted_subnet(cidr)?,
            WhitelistTarget::Port { port, protocol } => {
                vpn.remove_whitelisted_port(port, *protocol)?
            }
        },
    };
    Ok(applied)
}

fn report(ok: bool, success: &str, failure: &str) {
    if ok {
        println!("✅ {success}");
    } else {
        eprintln!("❌ {failure}");
    }
}

fn report_applied(applied: bool) {
    if applied {
        println!("✅ {}", constants::CLI_MSG_APPLIED);
    } else {
        eprintln!("❌ {}{}", constants::CLI_MSG_REJECTED, constants::MSG_INVALID_COMMAND);
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_names(names: &[String], json: bool) -> Result<bool> {
    if json {
        print_json(&names)?;
    } else if names.is_empty() {
        println!("{}", constants::CLI_MSG_NO_ENTRIES);
    } else {
        for name in names {
            println!("{name}");
        }
    }
    Ok(true)
}

fn print_status(status: &Status) {
    for warning in &status.warnings {
        eprintln!("⚠️  {}", warning.message());
    }
    println!("  Status:       {}", status.state);
    if let Some(details) = &status.details {
        println!("  Server:       {}", details.server);
        println!("  Location:     {}, {}", details.city, details.country);
        println!("  Server IP:    {}", details.ip);
        println!("  Technology:   {} ({})", details.technology, details.protocol);
        println!("  Transfer:     {}", details.transfer);
        println!("  Uptime:       {}", details.uptime);
    }
}

fn print_settings(settings: &Settings) {
    let flag = |value: Option<bool>| match value {
        Some(true) => "enabled",
        Some(false) => "disabled",
        None => constants::MSG_NO_DATA,
    };

    let technology = settings
        .technology
        .map_or_else(|| constants::MSG_NO_DATA.to_string(), |t| t.to_string());

    println!("  Technology:   {technology}");
    println!("  Firewall:     {}", flag(settings.firewall));
    println!("  Kill Switch:  {}", flag(settings.kill_switch));
    println!("  CyberSec:     {}", flag(settings.cybersec));
    println!("  Notify:       {}", flag(settings.notify));
    println!("  Auto-connect: {}", flag(settings.auto_connect));
    println!("  IPv6:         {}", flag(settings.ipv6));
    println!("  DNS:          {}", flag(settings.dns));
    if settings.whitelisted_subnets.is_empty() {
        println!("  Whitelisted:  {}", constants::CLI_MSG_NO_ENTRIES);
    } else {
        println!("  Whitelisted:  {}", settings.whitelisted_subnets.join(", "));
    }
}

fn print_config(info: &ConfigInfo<'_>) -> Result<()> {
    println!("# {} ({})", info.dir.join(constants::CONFIG_FILE_NAME).display(), info.source);
    print!("{}", toml::to_string(info.config)?);
    Ok(())
}

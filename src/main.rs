// Space Access - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/space-access --users-file users.csv --list
// ```
//
// Or check a code at a given time:
//
// ```console
// $ ./target/release/space-access --users-file users.csv --check-code 123456 --at '2024-03-01 18:30'
// ```
//
// Or replace the code of a record:
//
// ```console
// $ ./target/release/space-access --users-file users.csv --set-code 246810 --for-contact jane@example.org
// ```

use anyhow::{anyhow, bail, Context};
use chrono::{Local, NaiveDateTime};
use clap::Parser;
use serde::Serialize;
use space_access::store::{LoadReport, UserRegistry};
use space_access::types::{
    format_timestamp, parse_timestamp, truncate_to_minute, AccessConfig, CliArgs,
};
use space_access::user::{Sha256CodeHasher, User};
use space_access::{authorize, AccessDecision, AccessHours, LoggingConfig};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::process;
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();

    if args.print_config {
        match AccessConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Load configuration from CLI arguments and optional config file
    let config = match AccessConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let mut logging = if args.debug {
        LoggingConfig::new().with_level(tracing::Level::DEBUG)
    } else if args.verbose {
        LoggingConfig::new().with_level(tracing::Level::INFO)
    } else {
        LoggingConfig::new().with_level(tracing::Level::WARN)
    };
    if let Some(dir) = &config.log_directory {
        logging = logging.with_file_logging(dir.clone());
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - users file will not be loaded.");
        eprintln!("  Users file: {}", config.users_file);
        eprintln!("  Minimum code length: {}", config.min_code_length);
        return;
    }

    if let Err(e) = run(&args, &config) {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: &CliArgs, config: &AccessConfig) -> anyhow::Result<()> {
    let now = reference_time(args.at.as_deref())?;
    let (mut registry, report) = load_registry(&config.users_file)?;
    let hasher = Sha256CodeHasher::new(config.code_salt.clone());

    if let (Some(code), Some(contact)) = (&args.set_code, &args.for_contact) {
        if !report.is_clean() {
            bail!("Refusing to rewrite '{}' while it has malformed rows", config.users_file);
        }
        set_code(&mut registry, contact, code, config, &hasher)?;
    }

    if args.list {
        for user in registry.iter() {
            print_status(&UserStatus::new(user, now), args.json)?;
        }
    }

    if let Some(code) = &args.check_code {
        match registry.find_by_code(code, &hasher) {
            Some(user) => print_status(&UserStatus::new(user, now), args.json)?,
            None => {
                info!("Code not found");
                println!("unknown code: denied");
            }
        }
    }

    Ok(())
}

fn set_code(
    registry: &mut UserRegistry,
    contact: &str,
    code: &str,
    config: &AccessConfig,
    hasher: &Sha256CodeHasher,
) -> anyhow::Result<()> {
    let user = registry
        .find_by_contact_mut(contact)
        .ok_or_else(|| anyhow!("No record with contact '{}'", contact))?;
    if !user.set_auth_code(code, &config.code_policy(), hasher) {
        bail!("Code rejected: at least {} letters or digits required", config.min_code_length);
    }
    let name = user.name.to_string();

    let file = File::create(&config.users_file)
        .with_context(|| format!("Failed to create users file '{}'", config.users_file))?;
    registry
        .write_csv(BufWriter::new(file))
        .with_context(|| format!("Failed to write users file '{}'", config.users_file))?;

    info!(user = %name, "Code replaced");
    eprintln!("Code replaced for {}", name);
    Ok(())
}

fn reference_time(at: Option<&str>) -> anyhow::Result<NaiveDateTime> {
    match at {
        Some(text) => parse_timestamp(text)
            .with_context(|| format!("Invalid --at time '{}'", text))?
            .ok_or_else(|| anyhow!("--at must not be empty")),
        None => Ok(truncate_to_minute(Local::now().naive_local())),
    }
}

fn load_registry(path: &str) -> anyhow::Result<(UserRegistry, LoadReport)> {
    let file =
        File::open(path).with_context(|| format!("Failed to open users file '{}'", path))?;
    let (registry, report) = UserRegistry::load_csv(BufReader::new(file))
        .with_context(|| format!("Failed to read users file '{}'", path))?;

    eprintln!(
        "Loaded {} users from {} ({} comments, {} rows skipped)",
        report.loaded,
        path,
        report.comments,
        report.skipped.len()
    );
    for skipped in &report.skipped {
        eprintln!("  line {}: {}", skipped.line, skipped.error);
    }
    Ok((registry, report))
}

/// Status of one record at the reference time
#[derive(Debug, Serialize)]
struct UserStatus<'a> {
    name: &'a str,
    level: &'a str,
    has_contact_info: bool,
    valid_from: String,
    expires: String,
    in_validity_period: bool,
    access_hours: AccessHours,
    decision: AccessDecision,
}

impl<'a> UserStatus<'a> {
    fn new(user: &'a User, now: NaiveDateTime) -> Self {
        Self {
            name: user.name.as_str(),
            level: user.level.as_str(),
            has_contact_info: user.has_contact_info(),
            valid_from: format_timestamp(user.valid_from),
            expires: format_timestamp(user.expiry_date(now)),
            in_validity_period: user.in_validity_period(now),
            access_hours: user.access_hours(),
            decision: authorize(user, now),
        }
    }
}

fn print_status(status: &UserStatus<'_>, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(status)?);
        return Ok(());
    }

    let name = if status.name.is_empty() { "(anonymous)" } else { status.name };
    let expires = if status.expires.is_empty() { "never" } else { status.expires.as_str() };
    println!(
        "{:<24} {:<15} hours {:<13} expires {:<16} {}",
        name,
        status.level,
        status.access_hours.to_string(),
        expires,
        status.decision
    );
    Ok(())
}

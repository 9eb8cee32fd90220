//! Tests for CLI argument parsing and configuration precedence

use clap::Parser;
use space_access::types::config::{credentials, AccessConfig, CliArgs};
use std::io::Write;

/// Test defaults when no arguments are given
#[test]
fn test_default_arguments() {
    let args = CliArgs::try_parse_from(["space-access"]).unwrap();
    assert!(args.users_file.is_none());
    assert!(args.check_code.is_none());
    assert!(!args.list);
    assert!(!args.json);

    let config = AccessConfig::from_cli_args(args).unwrap();
    assert_eq!(config, AccessConfig::default());
}

/// Test parsing of all value arguments
#[test]
fn test_value_arguments() {
    let args = CliArgs::try_parse_from([
        "space-access",
        "--users-file",
        "/etc/door/users.csv",
        "--min-code-length",
        "8",
        "--code-salt",
        "pepper",
        "--at",
        "2024-03-01 18:30",
        "--check-code",
        "12345678",
        "--list",
        "--json",
    ])
    .unwrap();

    assert_eq!(args.at.as_deref(), Some("2024-03-01 18:30"));
    assert_eq!(args.check_code.as_deref(), Some("12345678"));
    assert!(args.list);
    assert!(args.json);

    let config = AccessConfig::from_cli_args(args).unwrap();
    assert_eq!(config.users_file, "/etc/door/users.csv");
    assert_eq!(config.min_code_length, 8);
    assert_eq!(config.code_salt, "pepper");
}

/// Test that CLI arguments override the config file
#[test]
fn test_cli_overrides_config_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"users_file": "from-file.csv", "min_code_length": 10}}"#).unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let args =
        CliArgs::try_parse_from(["space-access", "--config", path.as_str(), "--min-code-length", "7"])
            .unwrap();
    let config = AccessConfig::from_cli_args(args).unwrap();

    assert_eq!(config.users_file, "from-file.csv");
    assert_eq!(config.min_code_length, 7);
    assert!(config.validate().is_ok());
}

/// Test that a zero minimum code length parses but fails validation
#[test]
fn test_invalid_min_code_length() {
    let args = CliArgs::try_parse_from(["space-access", "--min-code-length", "0"]).unwrap();
    let config = AccessConfig::from_cli_args(args).unwrap();
    assert!(config.validate().is_err());
    assert_ne!(config.min_code_length, credentials::DEFAULT_MIN_CODE_LENGTH);
}

/// Test that non-numeric lengths are rejected by the parser
#[test]
fn test_non_numeric_length_rejected() {
    assert!(CliArgs::try_parse_from(["space-access", "--min-code-length", "six"]).is_err());
}

/// Test that --set-code and --for-contact must be given together
#[test]
fn test_set_code_requires_contact() {
    assert!(CliArgs::try_parse_from(["space-access", "--set-code", "246810"]).is_err());
    assert!(CliArgs::try_parse_from(["space-access", "--for-contact", "jane@example.org"]).is_err());

    let args = CliArgs::try_parse_from([
        "space-access",
        "--set-code",
        "246810",
        "--for-contact",
        "jane@example.org",
    ])
    .unwrap();
    assert_eq!(args.set_code.as_deref(), Some("246810"));
    assert_eq!(args.for_contact.as_deref(), Some("jane@example.org"));
}

/// Test that the configured minimum code length governs which codes are accepted
#[test]
fn test_min_code_length_reaches_code_policy() {
    use space_access::{Level, Sha256CodeHasher, User};

    let args = CliArgs::try_parse_from(["space-access", "--min-code-length", "8"]).unwrap();
    let config = AccessConfig::from_cli_args(args).unwrap();
    let hasher = Sha256CodeHasher::new(config.code_salt.clone());

    let mut user = User::new("jane", "jane@example.org", Level::Member);
    assert!(!user.set_auth_code("1234567", &config.code_policy(), &hasher));
    assert!(user.codes.is_empty());
    assert!(user.set_auth_code("12345678", &config.code_policy(), &hasher));
    assert!(user.has_code("12345678", &hasher));
}

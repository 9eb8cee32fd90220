//! Configuration structures for the access tool
//!
//! This module contains the configuration structure and validation logic used by the
//! `space-access` binary to locate the users file and to build the credential
//! collaborators.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::user::MinimumLengthPolicy;

/// Credential policy defaults
pub mod credentials {
    /// Minimum number of characters a plaintext code must have
    pub const DEFAULT_MIN_CODE_LENGTH: usize = 6;
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "space-access",
    version = "0.1.0",
    about = "Space access - inspects the users file of a door access system",
    long_about = "Loads the users file of a physical-space entry system and answers access questions: which records are currently valid, what hours each level may enter, and whether a given code would open the door right now.

EXAMPLES:
    # Load the users file and report what was loaded
    space-access --users-file users.csv

    # List every record with its validity at a given time
    space-access --users-file users.csv --list --at '2024-03-01 18:30'

    # Check whether a code would open the door now
    space-access --users-file users.csv --check-code 123456

    # Replace the code of the record with this contact and save the file
    space-access --users-file users.csv --set-code 246810 --for-contact jane@example.org

    # Generate configuration template
    space-access --print-config > access.json

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Path of the users CSV file
    #[arg(long, help = "Path of the users CSV file")]
    pub users_file: Option<String>,

    /// Minimum length of a plaintext code
    #[arg(long, help = "Minimum length of a plaintext code")]
    pub min_code_length: Option<usize>,

    /// Salt mixed into code hashes
    #[arg(long, help = "Salt mixed into code hashes")]
    pub code_salt: Option<String>,

    /// Reference time for decisions instead of the current local time
    #[arg(
        long,
        help = "Reference time (YYYY-MM-DD HH:MM)",
        long_help = "Reference time used for validity and access-hour decisions, in the users file format YYYY-MM-DD HH:MM. Default: current local time"
    )]
    pub at: Option<String>,

    /// Plaintext code to check
    #[arg(long, help = "Check whether this code opens the door")]
    pub check_code: Option<String>,

    /// New plaintext code to store for the record given by `--for-contact`
    #[arg(
        long,
        requires = "for_contact",
        help = "Replace the code of a record and save the users file",
        long_help = "Replace the code list of the record selected by --for-contact with this code and write the users file back. The code must meet the minimum code length."
    )]
    pub set_code: Option<String>,

    /// Contact information selecting the record for `--set-code`
    #[arg(long, requires = "set_code", help = "Contact information of the record to update")]
    pub for_contact: Option<String>,

    /// List all records
    #[arg(long, help = "List all records with their status")]
    pub list: bool,

    /// Emit JSON lines instead of text
    #[arg(long, help = "Emit JSON lines instead of text")]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without loading users
    #[arg(long, help = "Validate configuration without loading the users file")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Path of the users CSV file
    pub users_file: Option<String>,

    /// Minimum length of a plaintext code
    pub min_code_length: Option<usize>,

    /// Salt mixed into code hashes
    pub code_salt: Option<String>,

    /// Directory for rolling log files
    pub log_directory: Option<String>,
}

/// Configuration for the access tool
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessConfig {
    /// Path of the users CSV file
    pub users_file: String,

    /// Minimum length of a plaintext code
    pub min_code_length: usize,

    /// Salt mixed into code hashes
    pub code_salt: String,

    /// Directory for rolling log files (console only when unset)
    pub log_directory: Option<String>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for the access configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Users file path is empty
    #[error("Users file path must not be empty")]
    EmptyUsersFile,

    /// Minimum code length is invalid
    #[error("Minimum code length must be greater than 0, got {0}")]
    InvalidMinCodeLength(usize),
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            users_file: "users.csv".to_string(),
            min_code_length: credentials::DEFAULT_MIN_CODE_LENGTH,
            code_salt: String::new(),
            log_directory: None,
        }
    }
}

impl AccessConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file, merging with defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            users_file: config_file.users_file.unwrap_or(defaults.users_file),
            min_code_length: config_file.min_code_length.unwrap_or(defaults.min_code_length),
            code_salt: config_file.code_salt.unwrap_or(defaults.code_salt),
            log_directory: config_file.log_directory.or(defaults.log_directory),
        }
    }

    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.users_file {
            config.users_file = value;
        }
        if let Some(value) = args.min_code_length {
            config.min_code_length = value;
        }
        if let Some(value) = args.code_salt {
            config.code_salt = value;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.users_file.trim().is_empty() {
            return Err(ConfigValidationError::EmptyUsersFile);
        }
        if self.min_code_length == 0 {
            return Err(ConfigValidationError::InvalidMinCodeLength(self.min_code_length));
        }
        Ok(())
    }

    /// Code policy for new codes, built from `min_code_length`
    pub fn code_policy(&self) -> MinimumLengthPolicy {
        MinimumLengthPolicy::new(self.min_code_length)
    }

    /// Serialize the configuration as pretty JSON
    pub fn print_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = AccessConfig::default();
        assert_eq!(config.min_code_length, credentials::DEFAULT_MIN_CODE_LENGTH);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_errors() {
        let config = AccessConfig { users_file: "  ".to_string(), ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::EmptyUsersFile)));

        let config = AccessConfig { min_code_length: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidMinCodeLength(0))));
    }

    #[test]
    fn test_code_policy_uses_min_code_length() {
        use crate::user::CodePolicy;

        let config = AccessConfig { min_code_length: 8, ..Default::default() };
        assert_eq!(config.code_policy().min_length, 8);
        assert!(!config.code_policy().meets_minimum("1234567"));
        assert!(config.code_policy().meets_minimum("12345678"));
    }

    #[test]
    fn test_partial_config_file_merges_with_defaults() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"users_file": "/var/lib/door/users.csv", "code_salt": "pepper"}}"#)
            .unwrap();

        let config = AccessConfig::from_file(file.path()).unwrap();
        assert_eq!(config.users_file, "/var/lib/door/users.csv");
        assert_eq!(config.code_salt, "pepper");
        assert_eq!(config.min_code_length, credentials::DEFAULT_MIN_CODE_LENGTH);
        assert!(config.log_directory.is_none());
    }

    #[test]
    fn test_unsupported_extension() {
        let file = NamedTempFile::new().unwrap();
        let result = AccessConfig::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = AccessConfig::from_file("/nonexistent/access.json");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_print_json_round_trips() {
        let config = AccessConfig::default();
        let json = config.print_json().unwrap();
        let parsed: AccessConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}

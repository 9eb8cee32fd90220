//! Space Access
//!
//! Access-control records for a physical-space entry system and the rules that
//! decide whether a credential may currently open a door.
//!
//! # Overview
//!
//! Every credential holder (or anonymous card) is one [`User`] record: a display
//! name, contact information, an access [`Level`], hashed sponsor and credential
//! codes, and optional validity bounds. The engine answers two questions per
//! access attempt:
//!
//! - **Is the record valid right now?** The validity window is open at both ends.
//!   Records without a real name and contact information are anonymous and
//!   expire at the latest thirty days after their start.
//! - **Is this hour permitted for the level?** Each level maps to a half-open
//!   hour-of-day interval.
//!
//! ## Quick Start
//!
//! ```rust
//! use space_access::*;
//!
//! let data = "alice,alice@example.org,user,,,,\n";
//! let (registry, report) = UserRegistry::load_csv(data.as_bytes())?;
//! assert!(report.is_clean());
//!
//! let now = parse_timestamp("2024-03-05 23:15").unwrap().unwrap();
//! let alice = registry.iter().next().unwrap();
//! assert!(alice.in_validity_period(now));
//! assert!(!authorize(alice, now).is_granted()); // users may enter 11:00..21:59
//! # Ok::<(), StoreError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: levels, the timestamp format, and configuration
//! - [`user`]: the record model and credential collaborators
//! - [`access`]: validity window, access hours and access decisions
//! - [`store`]: the CSV users file and the owned [`UserRegistry`]
//! - [`logging`]: tracing subscriber setup
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │◄───┤    User     │◄───┤   Access    │
//! │             │    │             │    │             │
//! │ Level       │    │ Record      │    │ Validity    │
//! │ Timestamps  │    │ Credentials │    │ Hours       │
//! │ Config      │    │             │    │ Decision    │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!        ▲                  ▲
//!        │                  │
//!        │           ┌─────────────┐
//!        └───────────┤    Store    │
//!                    │             │
//!                    │ CSV codec   │
//!                    │ Registry    │
//!                    └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod access;
pub mod logging;
pub mod store;
pub mod types;
pub mod user;

// Core types
pub use types::{
    format_timestamp,
    parse_timestamp,
    // Configuration
    AccessConfig,
    CliArgs,
    ConfigError,
    ConfigValidationError,
    // Enums
    Level,
    TIMESTAMP_FORMAT,
};

// Record model and credentials
pub use user::{
    CodeHasher, CodePolicy, DisplayName, MinimumLengthPolicy, Sha256CodeHasher, User,
};

// Validity and access engine
pub use access::{
    anonymous_validity_period, authorize, AccessDecision, AccessHours, DenialReason,
    ANONYMOUS_VALIDITY_DAYS,
};

// Persistence
pub use store::{
    LoadReport, RecordError, SkippedRow, StoreError, StoreResult, UserReader, UserRegistry,
    UserWriter,
};

pub use logging::LoggingConfig;

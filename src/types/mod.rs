//! Core types for the access record engine
//!
//! This module contains the fundamental types shared by the record model, the
//! validity engine and the persistence adapter.
//!
//! # Overview
//!
//! - **Enums**: the closed [`Level`] enumeration
//! - **Timestamps**: the minute-precision, zone-less format of the users file
//! - **Configuration**: tool configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use space_access::types::*;
//!
//! let level: Level = "fulltimeuser".parse().unwrap();
//! assert_eq!(level, Level::FulltimeUser);
//!
//! let from = parse_timestamp("2024-03-01 18:30").unwrap();
//! assert_eq!(format_timestamp(from), "2024-03-01 18:30");
//! ```

pub mod config;
pub mod enums;
pub mod timestamp;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use timestamp::*;

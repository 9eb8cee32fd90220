//! Validity and access engine
//!
//! This module decides whether a user record may currently open a door.
//!
//! # Overview
//!
//! - **Validity**: contact-info detection, effective expiry (including the forced
//!   expiry of anonymous cards) and the open validity window
//! - **AccessHours**: the half-open hour-of-day interval each level may enter in
//! - **AccessDecision**: both checks combined for a single attempt
//!
//! # Usage Example
//!
//! ```rust
//! use space_access::access::*;
//! use space_access::types::{parse_timestamp, Level};
//! use space_access::user::User;
//!
//! let now = parse_timestamp("2024-03-05 12:00").unwrap().unwrap();
//! let user = User::new("alice", "alice@example.org", Level::User);
//!
//! assert!(user.in_validity_period(now));
//! assert_eq!(user.access_hours(), AccessHours { from: 11, to: 22 });
//! assert!(authorize(&user, now).is_granted());
//! ```

pub mod decision;
pub mod hours;
pub mod validity;

// Re-export all public types for convenience
pub use decision::{authorize, AccessDecision, DenialReason};
pub use hours::AccessHours;
pub use validity::{anonymous_validity_period, ANONYMOUS_VALIDITY_DAYS};

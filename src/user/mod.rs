//! User records and credentials
//!
//! This module contains the record model of the access system: who a credential
//! holder is, which level they have, the bounds of their validity and the hashed
//! codes they open doors with.
//!
//! # Overview
//!
//! - **User**: one record per credential holder or anonymous card
//! - **DisplayName**: a human-assigned or frontend-generated name
//! - **CodeHasher / CodePolicy**: collaborators for storing and accepting codes
//!
//! # Usage Example
//!
//! ```rust
//! use space_access::user::*;
//! use space_access::types::Level;
//!
//! let hasher = Sha256CodeHasher::new("salt");
//! let policy = MinimumLengthPolicy::default();
//!
//! let mut user = User::new("alice", "alice@example.org", Level::Member);
//! assert!(user.set_auth_code("424242", &policy, &hasher));
//! assert!(user.has_code("424242", &hasher));
//!
//! // Too short: rejected, codes untouched
//! assert!(!user.set_auth_code("42", &policy, &hasher));
//! assert_eq!(user.codes.len(), 1);
//! ```

pub mod credentials;
#[allow(clippy::module_inception)]
pub mod user;

// Re-export all public types for convenience
pub use credentials::{CodeHasher, CodePolicy, MinimumLengthPolicy, Sha256CodeHasher};
pub use user::{DisplayName, User, GENERATED_NAME_SENTINEL};

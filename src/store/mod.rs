//! CSV persistence of user records
//!
//! This module translates user records to and from rows of the users file and
//! keeps loaded records in an owned [`UserRegistry`]. Opening, locking and
//! replacing the file itself is left to the caller.
//!
//! # Overview
//!
//! - **record**: row codec plus the [`UserReader`] / [`UserWriter`] stream adapters
//! - **registry**: best-effort loading with a [`LoadReport`], writing, lookups
//! - **error**: per-row [`RecordError`] and stream-level [`StoreError`]
//!
//! # Usage Example
//!
//! ```rust
//! use space_access::store::*;
//!
//! let data = "#comment,,,,,,\nalice,alice@example.org,member,,,,\nbroken,row\n";
//! let (registry, report) = UserRegistry::load_csv(data.as_bytes())?;
//! assert_eq!(registry.len(), 1);
//! assert_eq!(report.comments, 1);
//! assert_eq!(report.skipped.len(), 1);
//!
//! let mut out = Vec::new();
//! registry.write_csv(&mut out)?;
//! assert_eq!(String::from_utf8(out).unwrap(), "alice,alice@example.org,member,,,,\n");
//! # Ok::<(), StoreError>(())
//! ```

pub mod error;
pub mod record;
pub mod registry;

// Re-export all public types for convenience
pub use error::{RecordError, StoreError, StoreResult, FIELD_COUNT};
pub use record::{decode_row, encode_row, ReadOutcome, RowOutcome, UserReader, UserWriter};
pub use registry::{LoadReport, SkippedRow, UserRegistry};

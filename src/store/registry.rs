//! Owned collection of user records
//!
//! The registry is the in-memory form of the users file. It is a plain value:
//! whoever holds it owns the records, and serializing access to the file it was
//! loaded from is up to that owner.

use std::io::{Read, Write};
use tracing::{debug, info, warn};

use crate::store::error::{RecordError, StoreResult};
use crate::store::record::{ReadOutcome, UserReader, UserWriter};
use crate::user::{CodeHasher, User};

/// A row that did not produce a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// Line the row started on (1-based)
    pub line: u64,
    /// Why it was skipped
    pub error: RecordError,
}

/// Summary of a best-effort load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of records loaded
    pub loaded: usize,
    /// Number of comment rows
    pub comments: usize,
    /// Rows skipped as malformed
    pub skipped: Vec<SkippedRow>,
}

impl LoadReport {
    /// Whether every non-comment row produced a record
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// All user records of one space
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRegistry {
    users: Vec<User>,
}

impl UserRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding `users`
    pub fn from_users(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Load every valid record from a CSV stream
    ///
    /// Malformed rows are skipped and listed in the report; only a failing
    /// stream aborts the load.
    pub fn load_csv<R: Read>(reader: R) -> StoreResult<(Self, LoadReport)> {
        let mut reader = UserReader::new(reader);
        let mut registry = Self::new();
        let mut report = LoadReport::default();

        loop {
            match reader.read_next()? {
                ReadOutcome::User(user) => {
                    registry.users.push(user);
                    report.loaded += 1;
                }
                ReadOutcome::Comment => report.comments += 1,
                ReadOutcome::Skipped { line, error } => {
                    if error.is_logged() {
                        warn!(line, category = error.category(), "Skipping row: {}", error);
                    } else {
                        debug!(line, "Skipping row: {}", error);
                    }
                    report.skipped.push(SkippedRow { line, error });
                }
                ReadOutcome::Done => break,
            }
        }

        info!(
            loaded = report.loaded,
            comments = report.comments,
            skipped = report.skipped.len(),
            "Loaded users"
        );
        Ok((registry, report))
    }

    /// Write every record to a CSV stream, in registry order
    pub fn write_csv<W: Write>(&self, writer: W) -> StoreResult<()> {
        let mut writer = UserWriter::new(writer);
        for user in &self.users {
            writer.write_user(user)?;
        }
        writer.flush()?;
        debug!(count = self.users.len(), "Wrote users");
        Ok(())
    }

    /// Add a record
    pub fn push(&mut self, user: User) {
        self.users.push(user);
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the registry holds no records
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Iterate over the records
    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    /// Iterate mutably over the records
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut User> {
        self.users.iter_mut()
    }

    /// The record holding `plaintext` as one of its codes
    pub fn find_by_code(&self, plaintext: &str, hasher: &impl CodeHasher) -> Option<&User> {
        let hashed = hasher.hash(plaintext);
        self.users.iter().find(|user| user.codes.contains(&hashed))
    }

    /// Mutable access to the record holding `plaintext` as one of its codes
    pub fn find_by_code_mut(
        &mut self,
        plaintext: &str,
        hasher: &impl CodeHasher,
    ) -> Option<&mut User> {
        let hashed = hasher.hash(plaintext);
        self.users.iter_mut().find(|user| user.codes.contains(&hashed))
    }

    /// The record with the given (non-empty) contact information
    pub fn find_by_contact(&self, contact_info: &str) -> Option<&User> {
        if contact_info.is_empty() {
            return None;
        }
        self.users.iter().find(|user| user.contact_info == contact_info)
    }

    /// Mutable access to the record with the given (non-empty) contact information
    pub fn find_by_contact_mut(&mut self, contact_info: &str) -> Option<&mut User> {
        if contact_info.is_empty() {
            return None;
        }
        self.users.iter_mut().find(|user| user.contact_info == contact_info)
    }
}

impl IntoIterator for UserRegistry {
    type Item = User;
    type IntoIter = std::vec::IntoIter<User>;

    fn into_iter(self) -> Self::IntoIter {
        self.users.into_iter()
    }
}

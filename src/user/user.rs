//! Core user record
//!
//! This module contains the [`User`] record and its display name. Validity and
//! access rules operating on a record live in [`crate::access`].

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Level;

/// First character of names generated by the keypad frontend
pub const GENERATED_NAME_SENTINEL: char = '<';

/// Name a user goes by in the space (not necessarily a real name)
///
/// Names handed out automatically by the keypad frontend are kept apart from
/// names a person chose, because only the latter count as contact information.
/// The kind is decided from the stored text when the name is built, so a name
/// starting with the sentinel is always generated and keeps the sentinel when
/// written back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct DisplayName(NameKind);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum NameKind {
    /// Chosen by or for a person; may be empty for anonymous codes
    Assigned(String),
    /// Generated by the frontend, stored with the leading sentinel
    Generated(String),
}

impl DisplayName {
    /// Classify a name as read from storage
    pub fn from_stored(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.starts_with(GENERATED_NAME_SENTINEL) {
            DisplayName(NameKind::Generated(name))
        } else {
            DisplayName(NameKind::Assigned(name))
        }
    }

    /// Build a generated name from a frontend label, e.g. `<card-17>`
    pub fn generated(label: &str) -> Self {
        DisplayName(NameKind::Generated(format!("{}{}>", GENERATED_NAME_SENTINEL, label)))
    }

    /// The stored text of the name
    pub fn as_str(&self) -> &str {
        match &self.0 {
            NameKind::Assigned(name) | NameKind::Generated(name) => name,
        }
    }

    /// Whether this is a human-assigned, non-empty name
    pub fn is_real_name(&self) -> bool {
        matches!(&self.0, NameKind::Assigned(name) if !name.is_empty())
    }

    /// Whether the name was generated by the frontend
    pub fn is_generated(&self) -> bool {
        matches!(self.0, NameKind::Generated(_))
    }
}

impl Default for DisplayName {
    fn default() -> Self {
        DisplayName(NameKind::Assigned(String::new()))
    }
}

impl From<String> for DisplayName {
    fn from(name: String) -> Self {
        Self::from_stored(name)
    }
}

impl From<&str> for DisplayName {
    fn from(name: &str) -> Self {
        Self::from_stored(name)
    }
}

impl From<DisplayName> for String {
    fn from(name: DisplayName) -> Self {
        match name.0 {
            NameKind::Assigned(name) | NameKind::Generated(name) => name,
        }
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One credential holder or anonymous card
///
/// All codes and sponsors are stored hashed (see [`crate::user::CodeHasher`]).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    /// Name to go by in the space
    pub name: DisplayName,
    /// Way to contact the user; empty means no contact
    pub contact_info: String,
    /// Level of access
    pub level: Level,
    /// Hashed codes of the sponsors who added or updated this record
    pub sponsors: Vec<String>,
    /// Start of validity, e.g. for a temporary class PIN
    pub valid_from: Option<NaiveDateTime>,
    /// End of validity, for day visitors or temporary PINs
    pub valid_to: Option<NaiveDateTime>,
    /// Hashed codes associated with the user
    pub codes: Vec<String>,
}

impl User {
    /// Create a record for a named person without codes or validity bounds
    pub fn new(name: impl Into<String>, contact_info: impl Into<String>, level: Level) -> Self {
        Self {
            name: DisplayName::from_stored(name),
            contact_info: contact_info.into(),
            level,
            ..Default::default()
        }
    }

    /// Create an anonymous card record as registered through the keypad
    ///
    /// Such records have a generated name and no contact, so they expire a fixed
    /// period after `valid_from` unless someone adds contact information.
    pub fn anonymous(label: &str, level: Level, valid_from: NaiveDateTime) -> Self {
        Self {
            name: DisplayName::generated(label),
            level,
            valid_from: Some(valid_from),
            ..Default::default()
        }
    }

    /// Record a sponsor (already hashed) adding or updating this user
    pub fn add_sponsor(&mut self, sponsor_hash: impl Into<String>) {
        self.sponsors.push(sponsor_hash.into());
    }
}

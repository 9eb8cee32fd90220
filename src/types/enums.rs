//! Enumeration types for the access record engine
//!
//! This module contains the closed set of access levels a user record can carry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Access level of a user record
///
/// The storage names (see [`Level::as_str`]) are what the users file contains.
/// Any other value is rejected at the parse boundary. The default is
/// [`Level::Hiatus`], which grants no access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// No time constraints on access; may add users
    Member,
    /// Daytime access only, 11:00..21:59
    User,
    /// Like a regular user with less strict daytime constraints, 07:00..23:59
    FulltimeUser,
    /// Currently inactive (leave of absence or blocked); any code is inactive
    #[default]
    Hiatus,
    /// Around-the-clock access, but cannot add users
    Philanthropist,
}

impl Level {
    /// All levels in declaration order
    pub fn all() -> [Level; 5] {
        [Level::Member, Level::User, Level::FulltimeUser, Level::Hiatus, Level::Philanthropist]
    }

    /// Name used in the persisted users file
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Member => "member",
            Level::User => "user",
            Level::FulltimeUser => "fulltimeuser",
            Level::Hiatus => "hiatus",
            Level::Philanthropist => "philanthropist",
        }
    }

    /// Whether holders of this level may sponsor new users
    pub fn can_add_users(&self) -> bool {
        matches!(self, Level::Member)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    /// Parses a storage name. Matching is exact; the file format is case sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "member" => Ok(Level::Member),
            "user" => Ok(Level::User),
            "fulltimeuser" => Ok(Level::FulltimeUser),
            "hiatus" => Ok(Level::Hiatus),
            "philanthropist" => Ok(Level::Philanthropist),
            _ => Err(format!("Unknown level: {}", s)),
        }
    }
}

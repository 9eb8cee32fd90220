//! Hours of the day each level may open doors

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Level;
use crate::user::User;

/// Half-open hour-of-day interval `[from, to)`, `0 <= from <= to <= 24`
///
/// `(7, 24)` means from 07:00 up to and including 23:59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessHours {
    /// First hour included
    pub from: u32,
    /// First hour excluded
    pub to: u32,
}

impl AccessHours {
    /// Unrestricted access
    pub const ALL_DAY: AccessHours = AccessHours { from: 0, to: 24 };
    /// No access at any hour
    pub const NONE: AccessHours = AccessHours { from: 0, to: 0 };

    /// Hours permitted for a level
    pub fn for_level(level: Level) -> Self {
        match level {
            Level::Member | Level::Philanthropist => Self::ALL_DAY,
            Level::FulltimeUser => AccessHours { from: 7, to: 24 },
            Level::User => AccessHours { from: 11, to: 22 },
            Level::Hiatus => Self::NONE,
        }
    }

    /// Hours permitted for a stored level name; unknown names get no access
    pub fn for_level_name(name: &str) -> Self {
        name.parse::<Level>().map(Self::for_level).unwrap_or(Self::NONE)
    }

    /// Whether `hour` (0..=23) lies inside the interval
    pub fn contains(&self, hour: u32) -> bool {
        self.from <= hour && hour < self.to
    }

    /// Whether no hour is permitted at all
    pub fn is_empty(&self) -> bool {
        self.from >= self.to
    }

    /// The interval as a `(from, to)` tuple
    pub fn as_tuple(&self) -> (u32, u32) {
        (self.from, self.to)
    }
}

impl fmt::Display for AccessHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "no access");
        }
        write!(f, "{:02}:00..{:02}:59", self.from, self.to - 1)
    }
}

impl User {
    /// Interval in hours this user may open doors
    pub fn access_hours(&self) -> AccessHours {
        AccessHours::for_level(self.level)
    }
}

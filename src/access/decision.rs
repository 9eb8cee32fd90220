//! Access decision for a single attempt
//!
//! Combines the validity window of a record with the access hours of its level.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::access::AccessHours;
use crate::user::User;

/// Why an attempt was denied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DenialReason {
    /// The level grants no hours at all (e.g. hiatus)
    NoAccess,
    /// `valid_from` has not passed yet
    NotYetValid,
    /// The effective expiry has passed
    Expired,
    /// Valid record, but the hour is outside the level's interval
    OutsideAccessHours {
        /// Hour of the attempt
        hour: u32,
        /// Permitted interval
        hours: AccessHours,
    },
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenialReason::NoAccess => write!(f, "level grants no access"),
            DenialReason::NotYetValid => write!(f, "not yet valid"),
            DenialReason::Expired => write!(f, "expired"),
            DenialReason::OutsideAccessHours { hour, hours } => {
                write!(f, "hour {:02} outside access hours {}", hour, hours)
            }
        }
    }
}

/// Outcome of an access attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessDecision {
    /// The door may open
    Granted,
    /// The door stays closed
    Denied(DenialReason),
}

impl AccessDecision {
    /// Whether the door may open
    pub fn is_granted(&self) -> bool {
        matches!(self, AccessDecision::Granted)
    }

    /// The denial reason, if denied
    pub fn denial_reason(&self) -> Option<DenialReason> {
        match self {
            AccessDecision::Granted => None,
            AccessDecision::Denied(reason) => Some(*reason),
        }
    }
}

impl fmt::Display for AccessDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessDecision::Granted => write!(f, "granted"),
            AccessDecision::Denied(reason) => write!(f, "denied ({})", reason),
        }
    }
}

/// Decide whether `user` may open a door at `now`
pub fn authorize(user: &User, now: NaiveDateTime) -> AccessDecision {
    let hours = user.access_hours();
    let decision = if hours.is_empty() {
        AccessDecision::Denied(DenialReason::NoAccess)
    } else if !user.in_validity_period(now) {
        if user.valid_from.is_some_and(|from| from >= now) {
            AccessDecision::Denied(DenialReason::NotYetValid)
        } else {
            AccessDecision::Denied(DenialReason::Expired)
        }
    } else if !hours.contains(now.hour()) {
        AccessDecision::Denied(DenialReason::OutsideAccessHours { hour: now.hour(), hours })
    } else {
        AccessDecision::Granted
    };

    debug!(user = %user.name, level = %user.level, %decision, "Access decision");
    decision
}

impl User {
    /// Decide whether this user may open a door at `now`
    pub fn authorize(&self, now: NaiveDateTime) -> AccessDecision {
        authorize(self, now)
    }
}

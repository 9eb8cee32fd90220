//! Validity window of a user record
//!
//! A record is valid in the open interval between its start and its effective
//! expiry. Records without usable contact information expire at the latest
//! [`ANONYMOUS_VALIDITY_DAYS`] days after their start, since a lost or stolen
//! anonymous card cannot otherwise be traced back for revocation.

use chrono::{Duration, NaiveDateTime};
use tracing::warn;

use crate::user::User;

/// Lifetime in days of a record without contact information, counted from its start
pub const ANONYMOUS_VALIDITY_DAYS: i64 = 30;

/// Hours before `now` at which a broken anonymous record is considered expired
const MISSING_START_EXPIRED_HOURS: i64 = 24;

/// Lifetime of a record without contact information
pub fn anonymous_validity_period() -> Duration {
    Duration::days(ANONYMOUS_VALIDITY_DAYS)
}

impl User {
    /// Whether the record has a real name and contact information
    ///
    /// Frontend-generated names do not count as a name.
    pub fn has_contact_info(&self) -> bool {
        self.name.is_real_name() && !self.contact_info.is_empty()
    }

    /// The effective end of validity, `None` meaning no upper bound
    ///
    /// Without contact information the record is limited to
    /// [`anonymous_validity_period`] after `valid_from`, or `valid_to` if that is
    /// earlier. An anonymous record without `valid_from` is a data error and is
    /// reported as already expired.
    pub fn expiry_date(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        if self.has_contact_info() {
            return self.valid_to;
        }

        let Some(valid_from) = self.valid_from else {
            warn!(user = %self.name, "No start date for anonymous code, treating as expired");
            let expired = now
                .checked_sub_signed(Duration::hours(MISSING_START_EXPIRED_HOURS))
                .unwrap_or(NaiveDateTime::MIN);
            return Some(expired);
        };

        // Past the end of the calendar there is no earlier cap than valid_to
        let Some(anonymous_limit) = valid_from.checked_add_signed(anonymous_validity_period())
        else {
            return self.valid_to;
        };
        match self.valid_to {
            Some(valid_to) if valid_to < anonymous_limit => Some(valid_to),
            _ => Some(anonymous_limit),
        }
    }

    /// Whether `now` falls strictly inside the validity window
    pub fn in_validity_period(&self, now: NaiveDateTime) -> bool {
        let started = self.valid_from.map_or(true, |from| from < now);
        let not_expired = self.expiry_date(now).map_or(true, |expiry| expiry > now);
        started && not_expired
    }
}

//! Tests for contact detection, expiry and the validity window

use chrono::{Duration, NaiveDate, NaiveDateTime};
use space_access::*;

fn at(month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap().and_hms_opt(hour, minute, 0).unwrap()
}

fn contactable() -> User {
    User::new("dana", "+49 170 0000000", Level::FulltimeUser)
}

/// Test that a real name plus contact counts as contact information
#[test]
fn test_has_contact_info_truth_table() {
    assert!(contactable().has_contact_info());

    let mut no_contact = contactable();
    no_contact.contact_info = String::new();
    assert!(!no_contact.has_contact_info());

    let mut no_name = contactable();
    no_name.name = DisplayName::default();
    assert!(!no_name.has_contact_info());

    let mut generated = contactable();
    generated.name = DisplayName::from_stored("<keypad 4>");
    assert!(!generated.has_contact_info());
}

/// Test the thirty-day cap for anonymous records
#[test]
fn test_anonymous_expiry_without_valid_to() {
    let start = at(2, 10, 14, 0);
    let user = User::anonymous("keypad", Level::User, start);

    assert_eq!(user.expiry_date(at(2, 11, 0, 0)), Some(start + Duration::days(30)));
    assert_eq!(anonymous_validity_period(), Duration::days(ANONYMOUS_VALIDITY_DAYS));
}

/// Test that the earlier of valid_to and the cap wins
#[test]
fn test_anonymous_expiry_earlier_bound_wins() {
    let start = at(2, 10, 14, 0);
    let mut user = User::anonymous("keypad", Level::User, start);

    user.valid_to = Some(start + Duration::days(40));
    assert_eq!(user.expiry_date(start), Some(start + Duration::days(30)));

    user.valid_to = Some(start + Duration::days(3));
    assert_eq!(user.expiry_date(start), Some(start + Duration::days(3)));
}

/// Test that contact information lifts the cap
#[test]
fn test_contact_info_makes_record_permanent() {
    let start = at(1, 1, 0, 0);
    let mut user = User::anonymous("keypad", Level::User, start);
    let later = start + Duration::days(90);
    assert!(!user.in_validity_period(later));

    user.name = DisplayName::from_stored("erin");
    user.contact_info = "erin@example.org".to_string();
    assert_eq!(user.expiry_date(later), None);
    assert!(user.in_validity_period(later));
}

/// Test that a named record expires exactly at valid_to, regardless of valid_from
#[test]
fn test_named_expiry_ignores_valid_from() {
    let mut user = contactable();
    user.valid_to = Some(at(6, 1, 0, 0));
    assert_eq!(user.expiry_date(at(1, 1, 0, 0)), Some(at(6, 1, 0, 0)));

    user.valid_from = Some(at(1, 1, 0, 0));
    assert_eq!(user.expiry_date(at(1, 1, 0, 0)), Some(at(6, 1, 0, 0)));
}

/// Test the fallback for anonymous records without a start
#[test]
fn test_anonymous_without_start_expired_before_now() {
    let user = User { name: DisplayName::generated("lost"), ..Default::default() };
    for now in [at(1, 1, 0, 0), at(7, 15, 12, 30), at(12, 31, 23, 59)] {
        let expiry = user.expiry_date(now).unwrap();
        assert!(expiry < now);
        assert!(!user.in_validity_period(now));
    }
}

/// Test that both ends of the window are exclusive
#[test]
fn test_validity_window_boundaries() {
    let start = at(3, 1, 9, 0);
    let user = User::anonymous("day-pass", Level::Member, start);
    let expiry = user.expiry_date(start).unwrap();

    assert!(!user.in_validity_period(start));
    assert!(user.in_validity_period(start + Duration::minutes(1)));
    assert!(user.in_validity_period(expiry - Duration::minutes(1)));
    assert!(!user.in_validity_period(expiry));
}

/// Test that a future start blocks a named record
#[test]
fn test_future_start_not_yet_valid() {
    let mut user = contactable();
    user.valid_from = Some(at(9, 1, 0, 0));
    assert!(!user.in_validity_period(at(8, 31, 23, 59)));
    assert!(user.in_validity_period(at(9, 1, 0, 1)));
}

/// Test that a start date at the end of the calendar loads and is simply not yet valid
#[test]
fn test_far_future_start_does_not_overflow() {
    let data = "<card>,,user,,+262142-12-20 00:00,,\n";
    let (registry, report) = UserRegistry::load_csv(data.as_bytes()).unwrap();
    assert!(report.is_clean());

    let user = registry.iter().next().unwrap();
    let now = at(3, 5, 12, 0);
    assert_eq!(user.expiry_date(now), None);
    assert!(!user.in_validity_period(now));
    assert_eq!(
        authorize(user, now),
        AccessDecision::Denied(DenialReason::NotYetValid)
    );
}

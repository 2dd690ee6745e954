//! Local precondition checks for the start flow.
//!
//! These run before any external call: a rejection here mutates nothing.

use chrono::{Months, NaiveDate};

/// Display names are trimmed, non-empty, reasonably short, and printable.
pub const MAX_NAME_LEN: usize = 64;

/// Minimum age, in years, required to create an account.
pub const MINIMUM_AGE_YEARS: u32 = 16;

/// Whether `birthdate` is at least `years` calendar years before `today`.
///
/// Calendar-correct: someone born on Feb 29 comes of age on Feb 28 in
/// non-leap years (chrono clamps the day when adding months).
pub fn old_enough(birthdate: NaiveDate, today: NaiveDate, years: u32) -> bool {
    match birthdate.checked_add_months(Months::new(years * 12)) {
        Some(threshold) => threshold <= today,
        None => false,
    }
}

/// Whether `name` is acceptable as a published display name.
pub fn is_valid_name(name: &str) -> bool {
    let trimmed = name.trim();
    !trimmed.is_empty()
        && trimmed.chars().count() <= MAX_NAME_LEN
        && !trimmed.chars().any(char::is_control)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn sixteenth_birthday_is_old_enough() {
        let today = date(2026, 8, 24);
        assert!(old_enough(date(2010, 8, 24), today, 16));
    }

    #[test]
    fn day_before_sixteenth_birthday_is_not() {
        let today = date(2026, 8, 24);
        assert!(!old_enough(date(2010, 8, 25), today, 16));
    }

    #[test]
    fn clearly_old_enough() {
        let today = date(2026, 8, 24);
        assert!(old_enough(date(1990, 1, 1), today, 16));
    }

    #[test]
    fn leap_day_birthdate_clamps() {
        // Born Feb 29 2008; 16 years later chrono clamps to Feb 28 2024.
        assert!(old_enough(date(2008, 2, 29), date(2024, 2, 28), 16));
        assert!(!old_enough(date(2008, 2, 29), date(2024, 2, 27), 16));
    }

    #[test]
    fn name_rules() {
        assert!(is_valid_name("Alice"));
        assert!(is_valid_name("  Alice  "));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("   "));
        assert!(!is_valid_name("line\nbreak"));
        assert!(!is_valid_name(&"x".repeat(MAX_NAME_LEN + 1)));
        assert!(is_valid_name(&"x".repeat(MAX_NAME_LEN)));
    }
}

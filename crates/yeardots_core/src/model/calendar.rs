//! Calendar year math.
//!
//! # Responsibility
//! - Derive day ordinal, year length and elapsed percentage from one date.
//! - Keep every function pure so callers can re-evaluate on each frame.
//!
//! # Invariants
//! - Leap years follow the Gregorian rule (4, except 100, unless 400).
//! - `day_of_year` is 1-based: January 1 yields 1.
//! - `YearProgress::today()` reads the wall clock on every call.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Days in a common year.
pub const COMMON_YEAR_DAYS: u32 = 365;
/// Days in a leap year.
pub const LEAP_YEAR_DAYS: u32 = 366;

/// Returns whether `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns 366 for leap years and 365 otherwise.
pub fn total_days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        LEAP_YEAR_DAYS
    } else {
        COMMON_YEAR_DAYS
    }
}

/// Returns the 1-based ordinal of `date` within its year.
///
/// Counted as whole days elapsed since December 31 of the prior year, so the
/// result only depends on the local calendar date, never on a time of day.
pub fn day_of_year(date: NaiveDate) -> u32 {
    match NaiveDate::from_ymd_opt(date.year() - 1, 12, 31) {
        Some(epoch) => date.signed_duration_since(epoch).num_days() as u32,
        // Year before chrono's minimum representable date.
        None => date.ordinal(),
    }
}

/// Returns `round(100 * day_of_year / total_days)` with halves rounded up.
pub fn percent_elapsed(date: NaiveDate) -> u32 {
    percent_of(day_of_year(date), total_days_in_year(date.year()))
}

/// Returns the number of days left after `date` in its year.
pub fn days_remaining(date: NaiveDate) -> u32 {
    total_days_in_year(date.year()).saturating_sub(day_of_year(date))
}

fn percent_of(day: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let day = u64::from(day.min(total));
    let total = u64::from(total);
    ((200 * day + total) / (2 * total)) as u32
}

/// Year progress derived from one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearProgress {
    pub year: i32,
    /// 1-based day ordinal.
    pub day_of_year: u32,
    pub total_days: u32,
    pub days_remaining: u32,
    /// Elapsed share of the year in whole percent, `0..=100`.
    pub percent: u32,
}

impl YearProgress {
    /// Builds the snapshot for a caller-provided date.
    pub fn for_date(date: NaiveDate) -> Self {
        let year = date.year();
        let total_days = total_days_in_year(year);
        let day = day_of_year(date);
        Self {
            year,
            day_of_year: day,
            total_days,
            days_remaining: total_days.saturating_sub(day),
            percent: percent_of(day, total_days),
        }
    }

    /// Builds the snapshot for the current local date.
    pub fn today() -> Self {
        Self::for_date(Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::{day_of_year, percent_of, YearProgress};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn day_of_year_matches_chrono_ordinal() {
        use chrono::Datelike;
        for raw in [date(2023, 3, 1), date(2024, 3, 1), date(2024, 7, 19)] {
            assert_eq!(day_of_year(raw), raw.ordinal());
        }
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent_of(1, 200), 1);
        assert_eq!(percent_of(0, 365), 0);
        assert_eq!(percent_of(365, 365), 100);
    }

    #[test]
    fn snapshot_fields_are_consistent() {
        let progress = YearProgress::for_date(date(2024, 12, 31));
        assert_eq!(progress.year, 2024);
        assert_eq!(progress.day_of_year, 366);
        assert_eq!(progress.total_days, 366);
        assert_eq!(progress.days_remaining, 0);
        assert_eq!(progress.percent, 100);
    }
}

use chrono::NaiveDate;
use yeardots_core::{
    day_of_year, days_remaining, is_leap_year, percent_elapsed, total_days_in_year, YearProgress,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn leap_years_follow_gregorian_rule() {
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(1900));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(2023));
    assert!(!is_leap_year(2100));
    assert!(is_leap_year(2400));
}

#[test]
fn year_length_is_366_only_for_leap_years() {
    for year in 1890..2110 {
        let total = total_days_in_year(year);
        assert!(total == 365 || total == 366);
        assert_eq!(total == 366, is_leap_year(year), "year {year}");
    }
}

#[test]
fn january_first_is_day_one() {
    for year in [1900, 2000, 2023, 2024] {
        assert_eq!(day_of_year(date(year, 1, 1)), 1);
    }
}

#[test]
fn december_31_is_last_day() {
    assert_eq!(day_of_year(date(2023, 12, 31)), 365);
    assert_eq!(day_of_year(date(2024, 12, 31)), 366);
    assert_eq!(days_remaining(date(2024, 12, 31)), 0);
}

#[test]
fn leap_day_shifts_march() {
    assert_eq!(day_of_year(date(2024, 2, 29)), 60);
    assert_eq!(day_of_year(date(2024, 3, 1)), 61);
    assert_eq!(day_of_year(date(2023, 3, 1)), 60);
}

#[test]
fn percent_for_day_183_of_common_year_is_50() {
    let day_183 = date(2023, 7, 2);
    assert_eq!(day_of_year(day_183), 183);
    assert_eq!(percent_elapsed(day_183), 50);
    assert_eq!(days_remaining(day_183), 182);
}

#[test]
fn percent_stays_within_bounds() {
    assert_eq!(percent_elapsed(date(2023, 1, 1)), 0);
    assert_eq!(percent_elapsed(date(2023, 12, 31)), 100);
}

#[test]
fn progress_snapshot_agrees_with_free_functions() {
    let today = date(2025, 10, 16);
    let progress = YearProgress::for_date(today);

    assert_eq!(progress.year, 2025);
    assert_eq!(progress.day_of_year, day_of_year(today));
    assert_eq!(progress.total_days, total_days_in_year(2025));
    assert_eq!(progress.days_remaining, days_remaining(today));
    assert_eq!(progress.percent, percent_elapsed(today));
}

//! Working-day arithmetic for a single month of the Gregorian calendar.
//!
//! The calculator is a pure function: it takes a month, a year and the
//! holiday records fetched for that month, and returns the working-day
//! count together with the national holidays that fall on weekdays.

use crate::error::{WorkdayError, WorkdayResult};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Years accepted by [`compute`]. Fixed bounds keep the calculator a pure
/// function of its arguments (no clock read).
pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

/// One calendar holiday as reported by the holiday provider.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct HolidayRecord {
    #[serde(rename = "holiday_date")]
    pub date: NaiveDate,
    #[serde(rename = "holiday_name")]
    pub name: String,
    #[serde(rename = "is_national_holiday")]
    pub national: bool,
}

/// Outcome of a working-day calculation for one month.
///
/// `total_working_days` is signed: inconsistent holiday data can drive it
/// negative, and the value is returned as-is rather than clamped so the
/// caller can surface the data-quality problem.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CalculationResult {
    pub total_working_days: i64,
    pub national_holiday_count: i64,
    /// National holidays falling on a weekday, ascending by date.
    /// Duplicate dates are kept so the list mirrors the provider data.
    pub national_holidays: Vec<HolidayRecord>,
}

/// Count working days in the given month.
///
/// A working day is a Monday through Friday that is not a national holiday.
/// Holidays already falling on a weekend are not subtracted, since those
/// days are excluded as weekend days to begin with.
pub fn compute(month: u32, year: i32, holidays: &[HolidayRecord]) -> WorkdayResult<CalculationResult> {
    validate_month_year(month, year)?;

    let mut weekday_count: i64 = 0;
    for day in 1..last_day_of_month(year, month) + 1 {
        if !is_weekend(from_ymd(year, month, day)) {
            weekday_count += 1;
        }
    }

    let mut national_holidays: Vec<HolidayRecord> = holidays
        .iter()
        .filter(|h| h.national && !is_weekend(h.date))
        .cloned()
        .collect();
    national_holidays.sort_by_key(|h| h.date);
    let national_holiday_count = national_holidays.len() as i64;

    Ok(CalculationResult {
        total_working_days: weekday_count - national_holiday_count,
        national_holiday_count,
        national_holidays,
    })
}

/// Bounds check shared by the calculator and the calculation entry point.
pub fn validate_month_year(month: u32, year: i32) -> WorkdayResult<()> {
    if !(1..=12).contains(&month) {
        return Err(WorkdayError::InvalidInput("month out of range".to_string()));
    }
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(WorkdayError::InvalidInput("year out of range".to_string()));
    }
    Ok(())
}

/// Returns true if the date falls on a Saturday or Sunday
pub fn is_weekend(date: NaiveDate) -> bool {
    let weekday = date.weekday();
    weekday == Weekday::Sat || weekday == Weekday::Sun
}

/// Returns true if the specified year is a leap year (i.e. Feb 29th exists for this year)
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Calculate the last day of a given month in a given year
pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month + 1, 1)
        .unwrap_or_else(|| from_ymd(year + 1, 1, 1))
        .pred_opt()
        .unwrap()
        .day()
}

/// Build a date from components known to be in range.
pub fn from_ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

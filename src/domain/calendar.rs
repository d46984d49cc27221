//! Observed-holiday predicates for billing.
//!
//! Two U.S. holidays affect billing: Labor Day (first Monday of September)
//! and Independence Day (July 4, shifted to the nearest weekday when it
//! lands on a weekend). All functions here are pure and total over any
//! valid calendar date.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// True when `date` is Labor Day, the first Monday of September.
#[must_use]
pub fn is_labor_day(date: NaiveDate) -> bool {
    if date.month() != 9 || date.weekday() != Weekday::Mon {
        return false;
    }

    // A Monday in September is the first one iff a week earlier is still August.
    date.checked_sub_days(Days::new(7))
        .is_some_and(|prior| prior.month() == 8)
}

/// The calendar date on which Independence Day is observed for `year`.
///
/// Nominally July 4. When July 4 falls on a Saturday the holiday is observed
/// on the preceding Friday (July 3); on a Sunday, the following Monday
/// (July 5).
#[must_use]
pub fn observed_independence_day(year: i32) -> NaiveDate {
    let nominal = NaiveDate::from_ymd_opt(year, 7, 4).expect("July 4 exists in every year");

    match nominal.weekday() {
        Weekday::Sat => nominal.pred_opt().expect("July 3 exists in every year"),
        Weekday::Sun => nominal.succ_opt().expect("July 5 exists in every year"),
        _ => nominal,
    }
}

/// True when `date` is the observed Independence Day of its own year.
#[must_use]
pub fn is_independence_day_observed(date: NaiveDate) -> bool {
    date == observed_independence_day(date.year())
}

/// True when `date` is one of the observed billing holidays.
#[must_use]
pub fn is_holiday(date: NaiveDate) -> bool {
    is_labor_day(date) || is_independence_day_observed(date)
}

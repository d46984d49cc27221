//! Chargeable-day counting over a rental window.

use chrono::{Days, NaiveDate};

use super::tool::ToolType;

/// Count the billable days in a rental window.
///
/// The rental period covers offsets 1 through `rental_duration` after
/// `checkout_date`; the checkout day itself is never charged. The count
/// starts at the full duration and drops by one for every day the tool's
/// charge policy marks free. A non-positive duration yields an empty window
/// and is rejected downstream by agreement construction.
#[must_use]
pub fn chargeable_days(
    tool_type: &ToolType,
    checkout_date: NaiveDate,
    rental_duration: i32,
) -> i32 {
    let mut chargeable = rental_duration;

    for offset in 1..=rental_duration {
        let day = checkout_date + Days::new(offset as u64);
        if !tool_type.charges_on(day) {
            chargeable -= 1;
        }
    }

    chargeable
}

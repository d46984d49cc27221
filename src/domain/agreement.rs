//! Rental agreement construction and pricing.
//!
//! [`RentalAgreement`] is the priced outcome of a checkout: an immutable
//! value object that validates its inputs at construction and computes the
//! due date and all monetary fields exactly once. There are no setters and
//! nothing is ever recomputed; an agreement either fully satisfies its
//! invariants or is never built.

use std::fmt;

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use super::error::DomainError;
use super::money::{round_to_cents, Price};
use super::tool::Tool;

const MIN_RENTAL_DURATION: i32 = 1;
const MIN_DISCOUNT: i32 = 0;
const MAX_DISCOUNT: i32 = 100;
const MIN_CHARGEABLE_DAYS: i32 = 0;

/// A fully priced tool rental.
///
/// Construction validates the caller's inputs, then derives the due date
/// and the three monetary fields. Each monetary step rounds to whole cents
/// half-up independently:
///
/// - pre-discount price = daily charge × chargeable days
/// - discount amount = pre-discount price × discount fraction
/// - final price = pre-discount price − discount amount
///
/// The agreement owns a read-only snapshot of the [`Tool`] it priced.
/// Whether `chargeable_days` actually fits the rental window is the
/// caller's guarantee; only negative counts are rejected here, so a broken
/// day-count upstream surfaces instead of being clamped away.
///
/// # Example
///
/// ```
/// use toolbooth::domain::agreement::RentalAgreement;
/// use toolbooth::domain::tool::{Tool, ToolCode, ToolType};
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let ladder = Tool::try_new(
///     ToolCode::new("LADW"),
///     ToolType::try_new("Ladder", dec!(1.99), true, true, false).unwrap(),
///     "Werner",
/// ).unwrap();
///
/// let agreement = RentalAgreement::try_new(
///     ladder,
///     3,
///     NaiveDate::from_ymd_opt(2020, 7, 2).unwrap(),
///     2,
///     10,
/// ).unwrap();
///
/// assert_eq!(agreement.final_price(), dec!(3.58));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalAgreement {
    tool: Tool,
    rental_duration: i32,
    checkout_date: NaiveDate,
    due_date: NaiveDate,
    chargeable_days: i32,
    discount_percent: i32,
    pre_discount_price: Price,
    discount_amount: Price,
    final_price: Price,
}

impl RentalAgreement {
    /// Create a new rental agreement with domain invariant validation.
    ///
    /// # Domain Invariants
    ///
    /// - `rental_duration` must be 1 or greater
    /// - `discount_percent` must be between 0 and 100 inclusive
    /// - `chargeable_days` must be 0 or greater
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if any invariant is violated. Checks run in
    /// order and fail fast on the first violation.
    pub fn try_new(
        tool: Tool,
        rental_duration: i32,
        checkout_date: NaiveDate,
        chargeable_days: i32,
        discount_percent: i32,
    ) -> Result<Self, DomainError> {
        if rental_duration < MIN_RENTAL_DURATION {
            return Err(DomainError::InvalidRentalDuration {
                days: rental_duration,
            });
        }

        if !(MIN_DISCOUNT..=MAX_DISCOUNT).contains(&discount_percent) {
            return Err(DomainError::DiscountOutOfRange {
                percent: discount_percent,
            });
        }

        if chargeable_days < MIN_CHARGEABLE_DAYS {
            return Err(DomainError::NegativeChargeableDays {
                days: chargeable_days,
            });
        }

        let pre_discount_price =
            round_to_cents(tool.tool_type().daily_charge() * Decimal::from(chargeable_days));

        // Exact fraction; whole percents divide 100 without remainder.
        let discount_fraction = Decimal::from(discount_percent) / Decimal::ONE_HUNDRED;
        let discount_amount = round_to_cents(pre_discount_price * discount_fraction);
        let final_price = round_to_cents(pre_discount_price - discount_amount);

        let due_date = checkout_date + Days::new(rental_duration as u64);

        Ok(Self {
            tool,
            rental_duration,
            checkout_date,
            due_date,
            chargeable_days,
            discount_percent,
            pre_discount_price,
            discount_amount,
            final_price,
        })
    }

    /// Get the rented tool.
    #[must_use]
    pub const fn tool(&self) -> &Tool {
        &self.tool
    }

    /// Get the rental duration in days.
    #[must_use]
    pub const fn rental_duration(&self) -> i32 {
        self.rental_duration
    }

    /// Get the checkout date. Charges start the day after.
    #[must_use]
    pub const fn checkout_date(&self) -> NaiveDate {
        self.checkout_date
    }

    /// Get the date the tool is due back.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Get the number of billable days.
    #[must_use]
    pub const fn chargeable_days(&self) -> i32 {
        self.chargeable_days
    }

    /// Get the whole-percent discount.
    #[must_use]
    pub const fn discount_percent(&self) -> i32 {
        self.discount_percent
    }

    /// Get the charge before the discount is applied.
    #[must_use]
    pub const fn pre_discount_price(&self) -> Price {
        self.pre_discount_price
    }

    /// Get the amount subtracted from the pre-discount charge.
    #[must_use]
    pub const fn discount_amount(&self) -> Price {
        self.discount_amount
    }

    /// Get the final charge after the discount.
    #[must_use]
    pub const fn final_price(&self) -> Price {
        self.final_price
    }
}

impl fmt::Display for RentalAgreement {
    /// Renders the agreement as the customer-facing receipt block, with
    /// MM/DD/YY dates and dollar amounts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tool code: {}", self.tool.code())?;
        writeln!(f, "Tool type: {}", self.tool.tool_type().name())?;
        writeln!(f, "Brand: {}", self.tool.brand())?;
        writeln!(f, "Checkout date: {}", self.checkout_date.format("%m/%d/%y"))?;
        writeln!(f, "Rental duration: {} days", self.rental_duration)?;
        writeln!(f, "Due date: {}", self.due_date.format("%m/%d/%y"))?;
        writeln!(
            f,
            "Daily rental charge: ${:.2}",
            self.tool.tool_type().daily_charge()
        )?;
        writeln!(f, "Charged days: {} days", self.chargeable_days)?;
        writeln!(f, "Charge before discount: ${:.2}", self.pre_discount_price)?;
        writeln!(f, "Discount rate: {}%", self.discount_percent)?;
        writeln!(f, "Total discount: ${:.2}", self.discount_amount)?;
        writeln!(f, "Final charge: ${:.2}", self.final_price)
    }
}

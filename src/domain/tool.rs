//! Tool-related domain types.
//!
//! - [`ToolCode`] - Unique rental-counter identifier for a tool
//! - [`ToolType`] - A category of tool with its daily charge policy
//! - [`Tool`] - A rentable tool: code, type, and brand

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calendar;
use super::error::DomainError;

/// Tool identifier - newtype for type safety.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToolCode(String);

impl ToolCode {
    /// Create a new `ToolCode` from a string.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the tool code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToolCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ToolCode {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ToolCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A category of rentable tool and its charge policy.
///
/// The daily charge applies only on days the policy flags as billable:
/// `weekday_charge` covers Monday through Friday, `weekend_charge` covers
/// Saturday and Sunday, and `holiday_charge` decides whether an observed
/// holiday is billed at all. Two tools of the same type always price
/// identically, so `ToolType` compares by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolType {
    name: String,
    daily_charge: Decimal,
    weekday_charge: bool,
    weekend_charge: bool,
    holiday_charge: bool,
}

impl ToolType {
    /// Create a new tool type with domain invariant validation.
    ///
    /// # Domain Invariants
    ///
    /// - `name` must not be empty
    /// - `daily_charge` must not be negative
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if any invariant is violated.
    pub fn try_new(
        name: impl Into<String>,
        daily_charge: Decimal,
        weekday_charge: bool,
        weekend_charge: bool,
        holiday_charge: bool,
    ) -> Result<Self, DomainError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(DomainError::RequiredField { field: "name" });
        }

        if daily_charge.is_sign_negative() && !daily_charge.is_zero() {
            return Err(DomainError::NegativeDailyCharge {
                charge: daily_charge,
            });
        }

        Ok(Self {
            name,
            daily_charge,
            weekday_charge,
            weekend_charge,
            holiday_charge,
        })
    }

    /// Get the tool type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the daily rental charge.
    #[must_use]
    pub const fn daily_charge(&self) -> Decimal {
        self.daily_charge
    }

    /// Whether this type bills on weekdays.
    #[must_use]
    pub const fn weekday_charge(&self) -> bool {
        self.weekday_charge
    }

    /// Whether this type bills on weekends.
    #[must_use]
    pub const fn weekend_charge(&self) -> bool {
        self.weekend_charge
    }

    /// Whether this type bills on observed holidays.
    #[must_use]
    pub const fn holiday_charge(&self) -> bool {
        self.holiday_charge
    }

    /// Decide whether a single rental day is billable for this type.
    ///
    /// The holiday rule is evaluated first: a free-holiday type pays nothing
    /// on an observed holiday no matter which day of the week it lands on.
    /// A type that does charge on holidays falls through to the
    /// weekday/weekend flag of the day itself.
    #[must_use]
    pub fn charges_on(&self, date: NaiveDate) -> bool {
        if calendar::is_holiday(date) && !self.holiday_charge {
            return false;
        }

        if is_weekend(date) {
            self.weekend_charge
        } else {
            self.weekday_charge
        }
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// A rentable tool: a catalog entry pairing a [`ToolCode`] with its
/// [`ToolType`] and brand.
///
/// # Example
///
/// ```
/// use toolbooth::domain::tool::{Tool, ToolCode, ToolType};
/// use rust_decimal_macros::dec;
///
/// let tool = Tool::try_new(
///     ToolCode::new("LADW"),
///     ToolType::try_new("Ladder", dec!(1.99), true, true, false).unwrap(),
///     "Werner",
/// ).unwrap();
///
/// assert_eq!(tool.code().as_str(), "LADW");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    code: ToolCode,
    tool_type: ToolType,
    brand: String,
}

impl Tool {
    /// Create a new tool with domain invariant validation.
    ///
    /// # Domain Invariants
    ///
    /// - `code` must not be empty
    /// - `brand` must not be empty
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if any invariant is violated.
    pub fn try_new(
        code: ToolCode,
        tool_type: ToolType,
        brand: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let brand = brand.into();

        if code.as_str().trim().is_empty() {
            return Err(DomainError::RequiredField { field: "toolCode" });
        }

        if brand.trim().is_empty() {
            return Err(DomainError::RequiredField { field: "brandName" });
        }

        Ok(Self {
            code,
            tool_type,
            brand,
        })
    }

    /// Get the tool code.
    #[must_use]
    pub const fn code(&self) -> &ToolCode {
        &self.code
    }

    /// Get the tool type.
    #[must_use]
    pub const fn tool_type(&self) -> &ToolType {
        &self.tool_type
    }

    /// Get the brand name.
    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn ladder_type() -> ToolType {
        ToolType::try_new("Ladder", dec!(1.99), true, true, false).unwrap()
    }

    fn chainsaw_type() -> ToolType {
        ToolType::try_new("Chainsaw", dec!(1.49), true, false, true).unwrap()
    }

    fn jackhammer_type() -> ToolType {
        ToolType::try_new("Jackhammer", dec!(2.99), true, false, false).unwrap()
    }

    #[test]
    fn free_holiday_overrides_weekday_charge() {
        // July 3, 2015 is the observed Independence Day (a Friday). The
        // ladder bills weekdays but not holidays, so the day is free.
        assert!(!ladder_type().charges_on(date(2015, 7, 3)));
    }

    #[test]
    fn charged_holiday_falls_through_to_day_of_week() {
        // The chainsaw bills holidays, and July 3, 2015 is a weekday.
        assert!(chainsaw_type().charges_on(date(2015, 7, 3)));
        // Labor Day 2015 is a Monday; the jackhammer is weekday-only and
        // holiday-free.
        assert!(!jackhammer_type().charges_on(date(2015, 9, 7)));
    }

    #[test]
    fn weekend_flag_decides_plain_weekends() {
        let saturday = date(2020, 7, 11);
        assert!(ladder_type().charges_on(saturday));
        assert!(!chainsaw_type().charges_on(saturday));
        assert!(!jackhammer_type().charges_on(saturday));
    }

    #[test]
    fn weekday_flag_decides_plain_weekdays() {
        let tuesday = date(2020, 7, 7);
        assert!(ladder_type().charges_on(tuesday));
        assert!(chainsaw_type().charges_on(tuesday));
        assert!(jackhammer_type().charges_on(tuesday));
    }

    #[test]
    fn tool_type_rejects_empty_name() {
        let result = ToolType::try_new("", dec!(1.99), true, true, false);
        assert!(matches!(
            result,
            Err(DomainError::RequiredField { field: "name" })
        ));
    }

    #[test]
    fn tool_type_rejects_negative_daily_charge() {
        let result = ToolType::try_new("Ladder", dec!(-1.99), true, true, false);
        assert!(matches!(
            result,
            Err(DomainError::NegativeDailyCharge { .. })
        ));
    }

    #[test]
    fn tool_rejects_empty_code_and_brand() {
        let result = Tool::try_new(ToolCode::new(""), ladder_type(), "Werner");
        assert!(matches!(
            result,
            Err(DomainError::RequiredField { field: "toolCode" })
        ));

        let result = Tool::try_new(ToolCode::new("LADW"), ladder_type(), "  ");
        assert!(matches!(
            result,
            Err(DomainError::RequiredField { field: "brandName" })
        ));
    }

    #[test]
    fn tool_types_compare_by_value() {
        assert_eq!(jackhammer_type(), jackhammer_type());
        assert_ne!(jackhammer_type(), ladder_type());
    }
}

//! Domain validation errors for core domain types.
//!
//! This module defines errors that occur when domain invariants are violated.
//! These errors are returned by `try_new` constructors that validate inputs.
//!
//! # Examples
//!
//! Handling validation errors:
//!
//! ```
//! use toolbooth::domain::error::DomainError;
//! use toolbooth::domain::agreement::RentalAgreement;
//! use toolbooth::domain::tool::{Tool, ToolCode, ToolType};
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let ladder = Tool::try_new(
//!     ToolCode::new("LADW"),
//!     ToolType::try_new("Ladder", dec!(1.99), true, true, false).unwrap(),
//!     "Werner",
//! ).unwrap();
//!
//! // A zero-day rental fails validation
//! let result = RentalAgreement::try_new(
//!     ladder,
//!     0, // invalid!
//!     NaiveDate::from_ymd_opt(2020, 7, 2).unwrap(),
//!     0,
//!     10,
//! );
//!
//! assert!(matches!(result, Err(DomainError::InvalidRentalDuration { days: 0 })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
///
/// These errors are returned by `try_new` constructors and other methods
/// that validate domain rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A mandatory field was absent or empty.
    #[error("required field missing: {field}")]
    RequiredField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// Rentals run for at least one day.
    #[error("rental duration must be 1 or greater, got {days}")]
    InvalidRentalDuration {
        /// The invalid duration that was provided.
        days: i32,
    },

    /// Discounts are whole percentages between 0 and 100.
    #[error("discount percent must be between 0 and 100, got {percent}")]
    DiscountOutOfRange {
        /// The invalid percentage that was provided.
        percent: i32,
    },

    /// A day count can never be negative.
    #[error("chargeable days must be 0 or greater, got {days}")]
    NegativeChargeableDays {
        /// The invalid day count that was provided.
        days: i32,
    },

    /// Daily charges are non-negative amounts.
    #[error("daily charge must not be negative, got {charge}")]
    NegativeDailyCharge {
        /// The invalid charge that was provided.
        charge: rust_decimal::Decimal,
    },
}

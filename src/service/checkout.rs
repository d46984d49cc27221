//! Checkout orchestration.

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{chargeable_days, RentalAgreement};
use crate::domain::error::DomainError;
use crate::error::{Error, Result};
use crate::port::ToolCatalog;

/// Prices tool rentals against a catalog.
///
/// The service resolves the tool, scans the rental window for billable
/// days, and hands the count to [`RentalAgreement::try_new`], which
/// re-validates its inputs independently. Range checks are not duplicated
/// here; every failure propagates to the caller and nothing is partially
/// constructed.
#[derive(Debug)]
pub struct CheckoutService<C> {
    catalog: C,
}

impl<C: ToolCatalog> CheckoutService<C> {
    /// Create a checkout service over a tool catalog.
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Get the underlying catalog.
    #[must_use]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Check out a tool and produce the priced rental agreement.
    ///
    /// Charges start the day after `checkout_date`; the window covers the
    /// `rental_duration` days that follow it.
    ///
    /// # Errors
    ///
    /// - `DomainError::RequiredField` when `tool_code` is blank
    /// - `Error::UnknownToolCode` when the catalog has no such code
    /// - `DomainError::InvalidRentalDuration`, `DiscountOutOfRange`, or
    ///   `NegativeChargeableDays` from agreement construction
    pub fn checkout(
        &self,
        tool_code: &str,
        checkout_date: NaiveDate,
        rental_duration: i32,
        discount_percent: i32,
    ) -> Result<RentalAgreement> {
        if tool_code.trim().is_empty() {
            return Err(DomainError::RequiredField { field: "toolCode" }.into());
        }

        let tool = self
            .catalog
            .lookup(tool_code)
            .ok_or_else(|| Error::UnknownToolCode {
                code: tool_code.to_owned(),
            })?;

        let chargeable = chargeable_days(tool.tool_type(), checkout_date, rental_duration);

        let agreement = RentalAgreement::try_new(
            tool,
            rental_duration,
            checkout_date,
            chargeable,
            discount_percent,
        )?;

        debug!(
            tool_code,
            checkout_date = %checkout_date,
            rental_duration,
            chargeable_days = chargeable,
            final_price = %agreement.final_price(),
            "Checkout priced"
        );

        Ok(agreement)
    }
}

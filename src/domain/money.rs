//! Monetary types for rental charge representation.

use rust_decimal::{Decimal, RoundingStrategy};

/// Price represented as a Decimal for precision.
pub type Price = Decimal;

/// Round a monetary amount to whole cents, half-up.
///
/// Every pricing step rounds independently, so cent-level drift cannot
/// accumulate across the derivation chain.
#[must_use]
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

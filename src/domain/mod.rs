//! Storage-agnostic rental domain logic.

pub mod agreement;
pub mod calendar;
pub mod charge;
pub mod error;
pub mod money;
pub mod tool;

// Core domain types
pub use agreement::RentalAgreement;
pub use error::DomainError;
pub use money::Price;
pub use tool::{Tool, ToolCode, ToolType};

// Chargeable-day scan
pub use charge::chargeable_days;

//! Toolbooth - Tool rental checkout and pricing.
//!
//! This crate prices tool rentals: given a tool code, a checkout date, a
//! rental duration, and a whole-percent discount, it counts the billable
//! days in the rental window and derives the agreement's pre-discount
//! price, discount amount, and final price.
//!
//! # Architecture
//!
//! The pricing core is pure and storage-agnostic; everything that touches
//! the outside world sits behind a port:
//!
//! - **`domain`** - Immutable value types and the billing rules
//!   - `calendar` - Observed-holiday predicates (Independence Day, Labor Day)
//!   - `tool` - Tool, tool type, and the per-day charge policy
//!   - `charge` - Chargeable-day scan over a rental window
//!   - `agreement` - Validated, fully priced rental agreements
//! - **`port`** - The `ToolCatalog` lookup capability the core consumes
//! - **`adapter`** - Catalog implementations (in-memory map, JSON data file)
//! - **`service`** - `CheckoutService`, the orchestration seam
//! - **`cli`** - The `toolbooth` command-line surface
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Rental domain types and billing rules
//! - [`error`] - Error types for the crate
//! - [`port`] - Trait definitions for external collaborators
//! - [`adapter`] - Catalog adapters
//! - [`service`] - Checkout orchestration
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```
//! use toolbooth::adapter::JsonCatalog;
//! use toolbooth::service::CheckoutService;
//! use chrono::NaiveDate;
//!
//! # fn main() -> toolbooth::error::Result<()> {
//! let catalog = JsonCatalog::from_json(
//!     r#"[{
//!         "toolCode": "LADW",
//!         "toolType": {
//!             "name": "Ladder",
//!             "dailyCharge": "1.99",
//!             "hasWeekdayCharge": true,
//!             "hasWeekendCharge": true,
//!             "hasHolidayCharge": false
//!         },
//!         "brandName": "Werner"
//!     }]"#,
//! )?;
//!
//! let service = CheckoutService::new(catalog);
//! let date = NaiveDate::from_ymd_opt(2020, 7, 2).unwrap();
//! let agreement = service.checkout("LADW", date, 3, 10)?;
//!
//! assert_eq!(agreement.chargeable_days(), 2);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
pub mod service;

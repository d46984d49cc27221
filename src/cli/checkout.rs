//! The `checkout` command: price a rental and print the agreement.

use std::path::Path;

use super::output;
use super::CheckoutArgs;
use crate::adapter::JsonCatalog;
use crate::error::Result;
use crate::service::CheckoutService;

/// Price the requested rental against the catalog and print the receipt.
pub fn execute(args: &CheckoutArgs, catalog_path: &Path) -> Result<()> {
    let catalog = JsonCatalog::load(catalog_path)?;
    let service = CheckoutService::new(catalog);

    let agreement = service.checkout(&args.tool, args.date, args.days, args.discount)?;

    output::section("Rental agreement");
    print!("{agreement}");

    Ok(())
}

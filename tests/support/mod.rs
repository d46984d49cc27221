#![allow(dead_code)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use toolbooth::adapter::InMemoryCatalog;
use toolbooth::domain::{Tool, ToolCode, ToolType};
use toolbooth::service::CheckoutService;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

pub fn chainsaw() -> Tool {
    Tool::try_new(
        ToolCode::new("CHNS"),
        ToolType::try_new("Chainsaw", dec!(1.49), true, false, true).expect("valid tool type"),
        "Stihl",
    )
    .expect("valid tool")
}

pub fn ladder() -> Tool {
    Tool::try_new(
        ToolCode::new("LADW"),
        ToolType::try_new("Ladder", dec!(1.99), true, true, false).expect("valid tool type"),
        "Werner",
    )
    .expect("valid tool")
}

pub fn jackhammer(code: &str, brand: &str) -> Tool {
    Tool::try_new(
        ToolCode::new(code),
        ToolType::try_new("Jackhammer", dec!(2.99), true, false, false).expect("valid tool type"),
        brand,
    )
    .expect("valid tool")
}

/// The stock four-tool rental counter.
pub fn stock_catalog() -> InMemoryCatalog {
    InMemoryCatalog::from_tools([
        chainsaw(),
        ladder(),
        jackhammer("JAKD", "DeWalt"),
        jackhammer("JAKR", "Ridgid"),
    ])
}

pub fn stock_service() -> CheckoutService<InMemoryCatalog> {
    CheckoutService::new(stock_catalog())
}

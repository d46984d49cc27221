//! Integration tests for the checkout flow.

mod support;

use rust_decimal_macros::dec;

use support::{date, stock_service};
use toolbooth::domain::error::DomainError;
use toolbooth::error::Error;

#[test]
fn ladder_over_july_4th_weekend_skips_the_observed_holiday() {
    // July 4, 2020 is a Saturday, observed Friday July 3. The ladder bills
    // weekends but not holidays, so only the 4th and 5th are charged.
    let agreement = stock_service()
        .checkout("LADW", date(2020, 7, 2), 3, 10)
        .unwrap();

    assert_eq!(agreement.chargeable_days(), 2);
    assert_eq!(agreement.due_date(), date(2020, 7, 5));
    assert_eq!(agreement.pre_discount_price(), dec!(3.98));
    assert_eq!(agreement.discount_amount(), dec!(0.40));
    assert_eq!(agreement.final_price(), dec!(3.58));
}

#[test]
fn chainsaw_bills_the_observed_holiday_but_not_the_weekend() {
    // July 3, 2015 is the observed holiday (a Friday); the chainsaw charges
    // holidays, skips Saturday and Sunday, then bills Monday and Tuesday.
    let agreement = stock_service()
        .checkout("CHNS", date(2015, 7, 2), 5, 25)
        .unwrap();

    assert_eq!(agreement.chargeable_days(), 3);
    assert_eq!(agreement.due_date(), date(2015, 7, 7));
    assert_eq!(agreement.pre_discount_price(), dec!(4.47));
    assert_eq!(agreement.discount_amount(), dec!(1.12));
    assert_eq!(agreement.final_price(), dec!(3.35));
}

#[test]
fn jackhammer_over_labor_day_bills_weekdays_only() {
    // Window Sep 4..=9, 2015: Friday billed, weekend free, Labor Day
    // Monday free, Tuesday and Wednesday billed.
    let agreement = stock_service()
        .checkout("JAKD", date(2015, 9, 3), 6, 0)
        .unwrap();

    assert_eq!(agreement.chargeable_days(), 3);
    assert_eq!(agreement.due_date(), date(2015, 9, 9));
    assert_eq!(agreement.pre_discount_price(), dec!(8.97));
    assert_eq!(agreement.discount_amount(), dec!(0.00));
    assert_eq!(agreement.final_price(), dec!(8.97));
}

#[test]
fn jackhammer_over_july_4th_weekend_bills_a_single_day() {
    let agreement = stock_service()
        .checkout("JAKR", date(2020, 7, 2), 4, 50)
        .unwrap();

    assert_eq!(agreement.chargeable_days(), 1);
    assert_eq!(agreement.due_date(), date(2020, 7, 6));
    assert_eq!(agreement.pre_discount_price(), dec!(2.99));
    assert_eq!(agreement.discount_amount(), dec!(1.50));
    assert_eq!(agreement.final_price(), dec!(1.49));
}

#[test]
fn nine_day_jackhammer_rental_across_the_holiday_weekend() {
    // Window July 3..=11, 2015: observed holiday Friday free, two weekends
    // free, five plain weekdays billed.
    let agreement = stock_service()
        .checkout("JAKR", date(2015, 7, 2), 9, 0)
        .unwrap();

    assert_eq!(agreement.chargeable_days(), 5);
    assert_eq!(agreement.due_date(), date(2015, 7, 11));
    assert_eq!(agreement.pre_discount_price(), dec!(14.95));
    assert_eq!(agreement.final_price(), dec!(14.95));
}

#[test]
fn discount_above_100_is_rejected() {
    let result = stock_service().checkout("JAKR", date(2015, 9, 3), 5, 101);

    assert!(matches!(
        result,
        Err(Error::Domain(DomainError::DiscountOutOfRange { percent: 101 }))
    ));
}

#[test]
fn negative_discount_is_rejected() {
    let result = stock_service().checkout("LADW", date(2015, 9, 3), 5, -1);

    assert!(matches!(
        result,
        Err(Error::Domain(DomainError::DiscountOutOfRange { percent: -1 }))
    ));
}

#[test]
fn zero_and_negative_durations_are_rejected() {
    for days in [0, -5] {
        let result = stock_service().checkout("CHNS", date(2020, 7, 2), days, 10);

        assert!(matches!(
            result,
            Err(Error::Domain(DomainError::InvalidRentalDuration { days: got })) if got == days
        ));
    }
}

#[test]
fn unknown_tool_code_is_rejected_by_name() {
    let result = stock_service().checkout("INVL", date(2020, 7, 2), 3, 0);

    match result {
        Err(Error::UnknownToolCode { code }) => assert_eq!(code, "INVL"),
        other => panic!("expected unknown tool code error, got {other:?}"),
    }
}

#[test]
fn blank_tool_code_is_a_missing_required_field() {
    for code in ["", "   "] {
        let result = stock_service().checkout(code, date(2020, 7, 2), 3, 0);

        assert!(matches!(
            result,
            Err(Error::Domain(DomainError::RequiredField { field: "toolCode" }))
        ));
    }
}

#[test]
fn chargeable_days_never_exceed_the_duration() {
    for duration in 1..=28 {
        let agreement = stock_service()
            .checkout("CHNS", date(2021, 6, 25), duration, 0)
            .unwrap();

        assert!(agreement.chargeable_days() >= 0);
        assert!(agreement.chargeable_days() <= duration);
    }
}

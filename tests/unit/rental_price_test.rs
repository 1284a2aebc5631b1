// Property-based tests for the rental price calculator:
// - determinism for fixed inputs
// - deposit is a fixed fraction of base price, independent of tenure
// - quotes are never negative
//
// Uses proptest across a wide range of base prices.

use std::sync::Arc;

use proptest::prelude::*;
use rentkaro::core::AppError;
use rentkaro::pricing::{PricelistResolver, ProductPriceInput, RentalPriceCalculator, Tenure};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn calculator() -> RentalPriceCalculator {
    let resolver =
        PricelistResolver::built_in(dec!(0.10), "standard").expect("built-in pricelists are valid");
    RentalPriceCalculator::new(Arc::new(resolver))
}

fn product(base_price: Decimal) -> ProductPriceInput {
    ProductPriceInput {
        product_id: "FURN-001".to_string(),
        base_price,
    }
}

fn tenure_strategy() -> impl Strategy<Value = Tenure> {
    prop_oneof![
        Just(Tenure::Hour),
        Just(Tenure::Day),
        Just(Tenure::Week),
        Just(Tenure::Month),
    ]
}

proptest! {
    #[test]
    fn test_quote_is_deterministic(
        base_paise in 1u64..1_000_000_000u64,
        tenure in tenure_strategy()
    ) {
        let calc = calculator();
        let input = product(Decimal::new(base_paise as i64, 2));

        let first = calc.calculate(&input, tenure, None, Some("standard")).unwrap();
        let second = calc.calculate(&input, tenure, None, Some("standard")).unwrap();

        prop_assert_eq!(first, second, "Same inputs must quote the same price");
    }

    #[test]
    fn test_deposit_is_tenure_independent_fraction(
        base_paise in 1u64..1_000_000_000u64,
        tenure in tenure_strategy()
    ) {
        let calc = calculator();
        let base_price = Decimal::new(base_paise as i64, 2);
        let quote = calc
            .calculate(&product(base_price), tenure, None, Some("standard"))
            .unwrap();

        prop_assert_eq!(quote.deposit, base_price * dec!(0.10));
    }

    #[test]
    fn test_quote_is_never_negative(
        base_paise in 1u64..1_000_000_000u64,
        tenure in tenure_strategy()
    ) {
        let calc = calculator();
        for pricelist in ["standard", "student", "corporate"] {
            let quote = calc
                .calculate(&product(Decimal::new(base_paise as i64, 2)), tenure, None, Some(pricelist))
                .unwrap();
            prop_assert!(quote.price >= Decimal::ZERO);
            prop_assert!(quote.deposit >= Decimal::ZERO);
        }
    }
}

#[test]
fn test_week_on_standard_scenario() {
    // base 11,433.80, week on standard (multiplier 0.28):
    // price 3,201.464 displayed as 3,201.46; deposit 10% = 1,143.38
    let quote = calculator()
        .calculate(&product(dec!(11433.80)), Tenure::Week, None, Some("standard"))
        .unwrap()
        .rounded();

    assert_eq!(quote.price, dec!(3201.46));
    assert_eq!(quote.deposit, dec!(1143.38));
}

#[test]
fn test_rejects_non_positive_base_price() {
    let calc = calculator();
    for bad in [dec!(0), dec!(-1)] {
        let err = calc
            .calculate(&product(bad), Tenure::Day, None, None)
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidProduct(_)));
    }
}

#[test]
fn test_missing_dates_yield_preview_not_error() {
    // no date selection yet: a single-tenure-unit preview comes back
    let quote = calculator().calculate(&product(dec!(4499.00)), Tenure::Month, None, None);
    assert!(quote.is_ok());
}

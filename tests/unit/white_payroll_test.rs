// Property-based tests for the white payroll override rule
//
// - No override: 33% of total payroll
// - Positive override: used as is
// - Zero or negative override: ignored, back to 33%

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uppetit_burden::burden::services::burden_calculator::{is_usable_override, white_payroll};

proptest! {
    #[test]
    fn test_default_share_without_override(payroll_kopecks in 0i64..10_000_000_000i64) {
        let payroll_total = Decimal::new(payroll_kopecks, 2);

        prop_assert_eq!(white_payroll(payroll_total, None), payroll_total * dec!(0.33));
    }

    #[test]
    fn test_positive_override_wins(
        payroll_kopecks in 0i64..10_000_000_000i64,
        override_kopecks in 1i64..10_000_000_000i64
    ) {
        let payroll_total = Decimal::new(payroll_kopecks, 2);
        let override_amount = Decimal::new(override_kopecks, 2);

        prop_assert_eq!(white_payroll(payroll_total, Some(override_amount)), override_amount);
    }

    #[test]
    fn test_non_positive_override_is_ignored(
        payroll_kopecks in 0i64..10_000_000_000i64,
        override_kopecks in -10_000_000_000i64..=0i64
    ) {
        let payroll_total = Decimal::new(payroll_kopecks, 2);
        let override_amount = Decimal::new(override_kopecks, 2);

        prop_assert!(!is_usable_override(override_amount));
        prop_assert_eq!(
            white_payroll(payroll_total, Some(override_amount)),
            payroll_total * dec!(0.33)
        );
    }
}

#[test]
fn test_reference_values() {
    assert_eq!(white_payroll(dec!(100000), None), dec!(33000));
    assert_eq!(white_payroll(dec!(120000), Some(dec!(50000))), dec!(50000));
    assert_eq!(white_payroll(dec!(90000), Some(dec!(-1))), dec!(29700));
}

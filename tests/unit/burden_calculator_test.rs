// Property-based and reference-scenario tests for the burden calculation
//
// Covers:
// - Derivation of royalty, white payroll, commission, insurance and acquiring
// - Expense total vs tax-base grouping (payroll_total vs white payroll)
// - Minimum-tax floor and exact total-tax composition
// - Ratio guards (undefined, never zero or infinite)

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::{approx, normal_case_inputs, zero_turnover_inputs};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uppetit_burden::burden::services::burden_calculator::{
    aggregate, calculate, derive, fixed_insurance, AUSN_MINIMUM_RATE,
};
use uppetit_burden::Inputs;

const TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 6); // 0.000001

fn kopecks(amount: i64) -> Decimal {
    Decimal::new(amount, 2)
}

prop_compose! {
    fn arb_inputs()(
        turnover in 0i64..10_000_000_000i64,
        aggregator_percent in 0i64..=100i64,
        gross_profit in -1_000_000_000i64..5_000_000_000i64,
        payroll in 0i64..1_000_000_000i64,
        white_payroll_override in prop::option::of(-100_000_000i64..500_000_000i64),
        subrent in -100_000_000i64..100_000_000i64,
        inventory_result in -100_000_000i64..100_000_000i64,
        costs in prop::collection::vec(0i64..500_000_000i64, 21),
    ) -> Inputs {
        let turnover_total = kopecks(turnover);
        Inputs {
            turnover_total,
            gross_profit: kopecks(gross_profit),
            turnover_aggregator: (turnover_total * Decimal::from(aggregator_percent) / Decimal::ONE_HUNDRED).round_dp(2),
            rent: kopecks(costs[0]),
            subrent: kopecks(subrent),
            electricity: kopecks(costs[1]),
            other_utilities: kopecks(costs[2]),
            payroll_total: kopecks(payroll),
            white_payroll_override: white_payroll_override.map(kopecks),
            office_supplies: kopecks(costs[3]),
            other_purchases_outside_opticom: kopecks(costs[4]),
            write_offs: kopecks(costs[5]),
            meal_compensation: kopecks(costs[6]),
            other_write_offs: kopecks(costs[7]),
            security: kopecks(costs[8]),
            internet: kopecks(costs[9]),
            maintenance: kopecks(costs[10]),
            other_repairs: kopecks(costs[11]),
            cash_service: kopecks(costs[12]),
            mobile_connection: kopecks(costs[13]),
            bank_services: kopecks(costs[14]),
            uniform: kopecks(costs[15]),
            fiscal_device: kopecks(costs[16]),
            neo_service: kopecks(costs[17]),
            garbage_cleaning: kopecks(costs[18]),
            disinfection: kopecks(costs[19]),
            promo_materials: kopecks(costs[20]),
            inventory_result: kopecks(inventory_result),
        }
    }
}

proptest! {
    #[test]
    fn test_calculation_is_deterministic(inputs in arb_inputs()) {
        prop_assert_eq!(calculate(&inputs), calculate(&inputs));
    }

    #[test]
    fn test_calculate_composes_both_stages(inputs in arb_inputs()) {
        let derived = derive(&inputs);
        prop_assert_eq!(calculate(&inputs), aggregate(&inputs, &derived));
    }

    #[test]
    fn test_total_tax_composition_is_exact(inputs in arb_inputs()) {
        let results = calculate(&inputs);

        prop_assert_eq!(
            results.total_tax,
            results.ausn_tax + results.ndfl_tax + results.derived.fixed_insurance
        );
    }

    #[test]
    fn test_fixed_insurance_is_input_independent(inputs in arb_inputs()) {
        prop_assert_eq!(derive(&inputs).fixed_insurance, fixed_insurance());
    }

    #[test]
    fn test_minimum_tax_floor(inputs in arb_inputs()) {
        let results = calculate(&inputs);

        prop_assert!(results.ausn_tax >= inputs.turnover_total * AUSN_MINIMUM_RATE);
        prop_assert!(results.ausn_tax >= results.taxable_profit * dec!(0.20));
    }

    #[test]
    fn test_tax_base_differs_from_profit_by_payroll_substitution(inputs in arb_inputs()) {
        let results = calculate(&inputs);

        // Same costs in both sums except payroll_total vs white payroll
        let difference = results.taxable_profit - results.profit_before_tax;
        let expected = inputs.payroll_total - results.derived.white_payroll;
        prop_assert!(
            approx(difference, expected, TOLERANCE),
            "difference {} expected {}", difference, expected
        );
    }

    #[test]
    fn test_turnover_ratios_follow_guard(inputs in arb_inputs()) {
        let results = calculate(&inputs);

        if inputs.turnover_total > Decimal::ZERO {
            prop_assert!(results.margin.is_some());
            prop_assert!(results.profitability.is_some());
            prop_assert!(results.tax_burden_vs_turnover.is_some());
        } else {
            prop_assert!(results.margin.is_none());
            prop_assert!(results.profitability.is_none());
            prop_assert!(results.tax_burden_vs_turnover.is_none());
        }
    }

    #[test]
    fn test_profit_burden_follows_guard(inputs in arb_inputs()) {
        let results = calculate(&inputs);

        if results.profit_before_tax > Decimal::ZERO {
            prop_assert!(results.tax_burden_vs_profit.is_some());
        } else {
            prop_assert!(results.tax_burden_vs_profit.is_none());
        }
    }

    #[test]
    fn test_zero_turnover_ratios_undefined(
        gross_profit in -1_000_000_000i64..1_000_000_000i64,
        rent in 0i64..100_000_000i64,
    ) {
        let mut inputs = Inputs::new(Decimal::ZERO, kopecks(gross_profit));
        inputs.rent = kopecks(rent);
        let results = calculate(&inputs);

        prop_assert!(results.margin.is_none());
        prop_assert!(results.profitability.is_none());
        prop_assert!(results.tax_burden_vs_turnover.is_none());
    }
}

#[test]
fn test_normal_case_reference_figures() {
    let results = calculate(&normal_case_inputs());

    // Derived
    assert_eq!(results.derived.royalty, dec!(40000));
    assert_eq!(results.derived.white_payroll, dec!(66000));
    assert_eq!(results.derived.aggregator_commission, dec!(70000));
    assert_eq!(results.derived.fixed_insurance, fixed_insurance());
    assert_eq!(results.derived.acquiring, dec!(7600));

    // Intermediates
    assert!(approx(results.expenses, dec!(476841.6666666667), TOLERANCE));
    assert!(approx(results.profit_before_tax, dec!(-176841.6666666667), TOLERANCE));
    assert_eq!(results.margin, Some(dec!(0.3)));
    assert!(approx(
        results.profitability.unwrap(),
        dec!(-0.17684166666666667),
        TOLERANCE
    ));

    // Tax base and taxes
    assert!(approx(results.taxable_profit, dec!(-42841.666666666664), TOLERANCE));
    assert_eq!(results.ausn_tax, dec!(30000));
    assert_eq!(results.ndfl_tax, dec!(8580));
    assert!(approx(results.total_tax, dec!(38821.666666666664), TOLERANCE));

    // Burden
    assert!(approx(
        results.tax_burden_vs_turnover.unwrap(),
        dec!(0.03882166666666666),
        TOLERANCE
    ));
    assert!(results.tax_burden_vs_profit.is_none());
}

#[test]
fn test_zero_turnover_reference_figures() {
    let results = calculate(&zero_turnover_inputs());

    assert!(results.margin.is_none());
    assert!(results.profitability.is_none());
    // Only the fixed insurance is deducted from the tax base
    assert!(approx(results.taxable_profit, dec!(9758.333333333332), TOLERANCE));
    // 20% branch wins because 3% of zero turnover is zero
    assert!(approx(results.ausn_tax, dec!(1951.6666666666665), TOLERANCE));
    assert_eq!(results.ndfl_tax, Decimal::ZERO);
    assert!(approx(
        results.total_tax,
        dec!(1951.6666666666665) + fixed_insurance(),
        TOLERANCE
    ));
    assert!(results.tax_burden_vs_turnover.is_none());
    // Pre-tax profit is positive here, so the profit ratio is defined
    assert!(results.tax_burden_vs_profit.is_some());
}

#[test]
fn test_results_echo_inputs() {
    let inputs = normal_case_inputs();
    let results = calculate(&inputs);

    assert_eq!(results.inputs, inputs);
}

#[test]
fn test_negative_offsets_reduce_expenses() {
    let mut inputs = normal_case_inputs();
    let baseline = calculate(&inputs);

    inputs.subrent = dec!(-15000);
    inputs.inventory_result = dec!(-5000);
    let results = calculate(&inputs);

    assert!(approx(baseline.expenses - results.expenses, dec!(20000), TOLERANCE));
    assert!(approx(
        results.taxable_profit - baseline.taxable_profit,
        dec!(20000),
        TOLERANCE
    ));
}

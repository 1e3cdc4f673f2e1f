use rust_decimal::Decimal;

use crate::modules::burden::models::{Derived, Inputs, Results};

// Fixed business constants. These are not configurable.

/// Franchise royalty: 4% of total turnover
pub const ROYALTY_RATE: Decimal = Decimal::from_parts(4, 0, 0, false, 2);
/// Default share of payroll declared officially: 33%
pub const WHITE_PAYROLL_SHARE: Decimal = Decimal::from_parts(33, 0, 0, false, 2);
/// Delivery aggregator commission: 35% of aggregator turnover
pub const AGGREGATOR_COMMISSION_RATE: Decimal = Decimal::from_parts(35, 0, 0, false, 2);
/// Card acquiring fee: 1% of non-aggregator turnover
pub const ACQUIRING_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);
/// Acquiring provider discount leaves 95% of the nominal fee
pub const ACQUIRING_DISCOUNT_FACTOR: Decimal = Decimal::from_parts(95, 0, 0, false, 2);
/// Annual fixed insurance contribution in roubles
pub const ANNUAL_FIXED_INSURANCE: Decimal = Decimal::from_parts(2900, 0, 0, false, 0);
pub const PERIODS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);
/// AUSN rate on the tax base: 20%
pub const AUSN_PROFIT_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);
/// AUSN minimum tax: 3% of total turnover
pub const AUSN_MINIMUM_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 2);
/// Personal income tax withheld from declared payroll: 13%
pub const NDFL_RATE: Decimal = Decimal::from_parts(13, 0, 0, false, 2);

/// Monthly share of the annual fixed insurance contribution (2900 / 12)
pub fn fixed_insurance() -> Decimal {
    ANNUAL_FIXED_INSURANCE / PERIODS_PER_YEAR
}

/// Whether a white-payroll override may replace the default share.
///
/// Only a strictly positive override counts; zero or a negative value falls
/// back to the default.
pub fn is_usable_override(amount: Decimal) -> bool {
    amount > Decimal::ZERO
}

/// Officially declared payroll: the override when usable, else 33% of payroll
pub fn white_payroll(payroll_total: Decimal, white_payroll_override: Option<Decimal>) -> Decimal {
    white_payroll_override
        .filter(|amount| is_usable_override(*amount))
        .unwrap_or(payroll_total * WHITE_PAYROLL_SHARE)
}

/// Derivation stage: secondary amounts from inputs and the fixed rates
pub fn derive(inputs: &Inputs) -> Derived {
    Derived {
        royalty: inputs.turnover_total * ROYALTY_RATE,
        white_payroll: white_payroll(inputs.payroll_total, inputs.white_payroll_override),
        aggregator_commission: inputs.turnover_aggregator * AGGREGATOR_COMMISSION_RATE,
        fixed_insurance: fixed_insurance(),
        acquiring: (inputs.turnover_total - inputs.turnover_aggregator)
            * ACQUIRING_RATE
            * ACQUIRING_DISCOUNT_FACTOR,
    }
}

/// Accounting expense total.
///
/// Uses `payroll_total`; the declared white payroll is not an expense line.
pub fn total_expenses(inputs: &Inputs, derived: &Derived) -> Decimal {
    [
        inputs.rent,
        inputs.subrent,
        inputs.electricity,
        inputs.other_utilities,
        inputs.payroll_total,
        derived.royalty,
        derived.aggregator_commission,
        derived.fixed_insurance,
        derived.acquiring,
        inputs.office_supplies,
        inputs.other_purchases_outside_opticom,
        inputs.write_offs,
        inputs.meal_compensation,
        inputs.other_write_offs,
        inputs.security,
        inputs.internet,
        inputs.maintenance,
        inputs.other_repairs,
        inputs.cash_service,
        inputs.mobile_connection,
        inputs.bank_services,
        inputs.uniform,
        inputs.fiscal_device,
        inputs.neo_service,
        inputs.garbage_cleaning,
        inputs.disinfection,
        inputs.promo_materials,
        inputs.inventory_result,
    ]
    .into_iter()
    .sum()
}

/// Tax-base group A: premises and royalty
pub fn premises_group(inputs: &Inputs, derived: &Derived) -> Decimal {
    inputs.rent + inputs.subrent + inputs.electricity + inputs.other_utilities + derived.royalty
}

/// Tax-base group B: staff, sales channels and consumables.
///
/// Uses the declared white payroll, not `payroll_total`.
pub fn operations_group(inputs: &Inputs, derived: &Derived) -> Decimal {
    [
        derived.white_payroll,
        derived.aggregator_commission,
        derived.fixed_insurance,
        derived.acquiring,
        inputs.office_supplies,
        inputs.other_purchases_outside_opticom,
        inputs.write_offs,
        inputs.meal_compensation,
        inputs.other_write_offs,
    ]
    .into_iter()
    .sum()
}

/// Tax-base group C: services and upkeep
pub fn services_group(inputs: &Inputs) -> Decimal {
    [
        inputs.security,
        inputs.internet,
        inputs.maintenance,
        inputs.other_repairs,
        inputs.cash_service,
        inputs.mobile_connection,
        inputs.bank_services,
        inputs.uniform,
        inputs.fiscal_device,
        inputs.neo_service,
        inputs.garbage_cleaning,
        inputs.disinfection,
        inputs.promo_materials,
        inputs.inventory_result,
    ]
    .into_iter()
    .sum()
}

/// Tax base: gross profit less the three cost groups
pub fn taxable_profit(inputs: &Inputs, derived: &Derived) -> Decimal {
    inputs.gross_profit
        - premises_group(inputs, derived)
        - operations_group(inputs, derived)
        - services_group(inputs)
}

/// AUSN tax: 20% of the tax base, but never below 3% of turnover
pub fn ausn_tax(taxable_profit: Decimal, turnover_total: Decimal) -> Decimal {
    (taxable_profit * AUSN_PROFIT_RATE).max(turnover_total * AUSN_MINIMUM_RATE)
}

/// `numerator / divisor` when the divisor is strictly positive
pub fn ratio(numerator: Decimal, divisor: Decimal) -> Option<Decimal> {
    if divisor > Decimal::ZERO {
        numerator.checked_div(divisor)
    } else {
        None
    }
}

/// Aggregation stage: expenses, tax base, taxes and burden ratios
pub fn aggregate(inputs: &Inputs, derived: &Derived) -> Results {
    let expenses = total_expenses(inputs, derived);
    let profit_before_tax = inputs.gross_profit - expenses;
    let taxable_profit = taxable_profit(inputs, derived);

    let ausn_tax = ausn_tax(taxable_profit, inputs.turnover_total);
    let ndfl_tax = derived.white_payroll * NDFL_RATE;
    let total_tax = ausn_tax + ndfl_tax + derived.fixed_insurance;

    Results {
        inputs: inputs.clone(),
        derived: *derived,
        expenses,
        profit_before_tax,
        margin: ratio(inputs.gross_profit, inputs.turnover_total),
        profitability: ratio(profit_before_tax, inputs.turnover_total),
        taxable_profit,
        ausn_tax,
        ndfl_tax,
        total_tax,
        tax_burden_vs_turnover: ratio(total_tax, inputs.turnover_total),
        tax_burden_vs_profit: ratio(total_tax, profit_before_tax),
    }
}

/// Run both stages for one set of inputs
pub fn calculate(inputs: &Inputs) -> Results {
    let derived = derive(inputs);
    aggregate(inputs, &derived)
}

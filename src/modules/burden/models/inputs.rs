use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Validated figures for one reporting period of one store
///
/// Every field is a plain amount in roubles. `subrent` and `inventory_result`
/// may be negative (income offsets); everything else is non-negative and
/// `turnover_aggregator` never exceeds `turnover_total`. Those guarantees are
/// established by [`CalcForm::validate`](super::CalcForm::validate) and are not
/// re-checked by the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    // Revenue and profit
    pub turnover_total: Decimal,
    pub gross_profit: Decimal,
    pub turnover_aggregator: Decimal,

    // Expenses
    pub rent: Decimal,
    pub subrent: Decimal,
    pub electricity: Decimal,
    pub other_utilities: Decimal,
    pub payroll_total: Decimal,
    pub white_payroll_override: Option<Decimal>,
    pub office_supplies: Decimal,
    pub other_purchases_outside_opticom: Decimal,
    pub write_offs: Decimal,
    pub meal_compensation: Decimal,
    pub other_write_offs: Decimal,
    pub security: Decimal,
    pub internet: Decimal,
    pub maintenance: Decimal,
    pub other_repairs: Decimal,
    pub cash_service: Decimal,
    pub mobile_connection: Decimal,
    pub bank_services: Decimal,
    pub uniform: Decimal,
    pub fiscal_device: Decimal,
    pub neo_service: Decimal,
    pub garbage_cleaning: Decimal,
    pub disinfection: Decimal,
    pub promo_materials: Decimal,
    pub inventory_result: Decimal,
}

impl Inputs {
    /// Inputs with the given turnover and gross profit and every cost at zero
    pub fn new(turnover_total: Decimal, gross_profit: Decimal) -> Self {
        Self {
            turnover_total,
            gross_profit,
            turnover_aggregator: Decimal::ZERO,
            rent: Decimal::ZERO,
            subrent: Decimal::ZERO,
            electricity: Decimal::ZERO,
            other_utilities: Decimal::ZERO,
            payroll_total: Decimal::ZERO,
            white_payroll_override: None,
            office_supplies: Decimal::ZERO,
            other_purchases_outside_opticom: Decimal::ZERO,
            write_offs: Decimal::ZERO,
            meal_compensation: Decimal::ZERO,
            other_write_offs: Decimal::ZERO,
            security: Decimal::ZERO,
            internet: Decimal::ZERO,
            maintenance: Decimal::ZERO,
            other_repairs: Decimal::ZERO,
            cash_service: Decimal::ZERO,
            mobile_connection: Decimal::ZERO,
            bank_services: Decimal::ZERO,
            uniform: Decimal::ZERO,
            fiscal_device: Decimal::ZERO,
            neo_service: Decimal::ZERO,
            garbage_cleaning: Decimal::ZERO,
            disinfection: Decimal::ZERO,
            promo_materials: Decimal::ZERO,
            inventory_result: Decimal::ZERO,
        }
    }
}

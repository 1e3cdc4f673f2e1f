use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Derived, Inputs};

/// Full outcome of one tax-burden calculation
///
/// Ratios are `None` whenever their divisor is not strictly positive; an
/// undefined ratio is distinct from a ratio of zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Results {
    pub inputs: Inputs,
    pub derived: Derived,

    // Intermediates
    pub expenses: Decimal,
    pub profit_before_tax: Decimal,
    pub margin: Option<Decimal>,
    pub profitability: Option<Decimal>,

    // Tax base
    pub taxable_profit: Decimal,

    // Taxes
    pub ausn_tax: Decimal,
    pub ndfl_tax: Decimal,
    pub total_tax: Decimal,

    // Burden
    pub tax_burden_vs_turnover: Option<Decimal>,
    pub tax_burden_vs_profit: Option<Decimal>,
}

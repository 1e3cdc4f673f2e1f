use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Secondary amounts computed from [`Inputs`](super::Inputs) and the fixed rates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Derived {
    /// Franchise royalty on total turnover
    pub royalty: Decimal,
    /// Officially declared payroll ("белый ФОТ")
    pub white_payroll: Decimal,
    /// Delivery aggregator commission on aggregator turnover
    pub aggregator_commission: Decimal,
    /// Monthly share of the annual fixed insurance contribution
    pub fixed_insurance: Decimal,
    /// Card acquiring fee on non-aggregator turnover
    pub acquiring: Decimal,
}

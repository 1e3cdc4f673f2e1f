use rust_decimal::Decimal;
use serde::Serialize;

use crate::modules::burden::models::Results;

/// Placeholder shown for an undefined value
pub const DASH: &str = "-";

/// Format an amount for display: `1234567.891` becomes `"1 234 567.89"`.
///
/// Rounds to two decimals, groups thousands with a space and drops trailing
/// fractional zeros together with a dangling decimal point. `None` renders as
/// a dash.
pub fn format_money(value: Option<Decimal>) -> String {
    match value {
        Some(amount) => group_and_trim(amount),
        None => DASH.to_string(),
    }
}

/// Format a ratio as a percentage: `0.3` becomes `"30%"`. `None` renders as a dash.
pub fn format_percent(value: Option<Decimal>) -> String {
    match value.and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED)) {
        Some(percent) => format!("{}%", group_and_trim(percent)),
        None => DASH.to_string(),
    }
}

fn group_and_trim(value: Decimal) -> String {
    let rounded = value.round_dp(2).normalize();
    let text = rounded.abs().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + text.len() / 3 + 2);
    // A value that rounds to zero is shown unsigned
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    grouped
}

/// Display strings for every figure of a calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedResults {
    pub royalty: String,
    pub white_payroll: String,
    pub aggregator_commission: String,
    pub fixed_insurance: String,
    pub acquiring: String,
    pub expenses: String,
    pub profit_before_tax: String,
    pub margin: String,
    pub profitability: String,
    pub taxable_profit: String,
    pub ausn_tax: String,
    pub ndfl_tax: String,
    pub total_tax: String,
    pub tax_burden_vs_turnover: String,
    pub tax_burden_vs_profit: String,
}

impl From<&Results> for FormattedResults {
    fn from(results: &Results) -> Self {
        let money = |amount: Decimal| format_money(Some(amount));

        Self {
            royalty: money(results.derived.royalty),
            white_payroll: money(results.derived.white_payroll),
            aggregator_commission: money(results.derived.aggregator_commission),
            fixed_insurance: money(results.derived.fixed_insurance),
            acquiring: money(results.derived.acquiring),
            expenses: money(results.expenses),
            profit_before_tax: money(results.profit_before_tax),
            margin: format_percent(results.margin),
            profitability: format_percent(results.profitability),
            taxable_profit: money(results.taxable_profit),
            ausn_tax: money(results.ausn_tax),
            ndfl_tax: money(results.ndfl_tax),
            total_tax: money(results.total_tax),
            tax_burden_vs_turnover: format_percent(results.tax_burden_vs_turnover),
            tax_burden_vs_profit: format_percent(results.tax_burden_vs_profit),
        }
    }
}

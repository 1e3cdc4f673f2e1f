//! HTML page for the calculator form and its results
//!
//! The page is rendered server side as a single document: the form with the
//! submitted values echoed back, per-field error messages, and the results
//! table when the submission was valid.

use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::{self, Display, Formatter};

use crate::core::FieldErrors;
use crate::modules::burden::models::{CalcForm, Results, Section, FIELDS};
use crate::modules::burden::services::FormattedResults;

pub const PAGE_TITLE: &str = "Калькулятор налоговой нагрузки UPPETIT";

const STYLE: &str = "body{font-family:sans-serif;max-width:960px;margin:2rem auto;padding:0 1rem}\
fieldset{margin-bottom:1rem}\
label{display:block;margin:.4rem 0 .1rem}\
input{width:16rem;padding:.2rem}\
.error{color:#b00020;font-size:.9rem}\
table{border-collapse:collapse;margin-top:1rem}\
td,th{border:1px solid #ccc;padding:.3rem .6rem;text-align:left}\
td.value{text-align:right;font-variant-numeric:tabular-nums}";

/// Calculator page ready to be rendered with `to_string()`
pub struct CalculatorPage<'a> {
    pub form: &'a CalcForm,
    pub errors: &'a FieldErrors,
    pub results: Option<&'a Results>,
}

impl<'a> CalculatorPage<'a> {
    pub fn new(form: &'a CalcForm, errors: &'a FieldErrors, results: Option<&'a Results>) -> Self {
        Self {
            form,
            errors,
            results,
        }
    }

    fn write_section(&self, f: &mut Formatter<'_>, section: Section, legend: &str) -> fmt::Result {
        writeln!(f, "<fieldset><legend>{}</legend>", legend)?;
        for spec in FIELDS.iter().filter(|spec| spec.section == section) {
            let value = self
                .form
                .get(spec.name)
                .map(|input| input.echo())
                .unwrap_or_default();

            writeln!(
                f,
                r#"<label for="{name}">{label}</label><input type="text" inputmode="decimal" id="{name}" name="{name}" value="{value}">"#,
                name = spec.name,
                label = encode_text(spec.label),
                value = encode_double_quoted_attribute(&value),
            )?;
            if let Some(message) = self.errors.get(spec.name) {
                writeln!(f, r#"<div class="error">{}</div>"#, encode_text(message))?;
            }
        }
        writeln!(f, "</fieldset>")
    }

    fn write_results(&self, f: &mut Formatter<'_>, results: &Results) -> fmt::Result {
        let display = FormattedResults::from(results);
        let rows = [
            ("Роялти", &display.royalty),
            ("Белый ФОТ", &display.white_payroll),
            ("Комиссия агрегатора", &display.aggregator_commission),
            ("Фиксированные страховые взносы", &display.fixed_insurance),
            ("Эквайринг", &display.acquiring),
            ("Расходы", &display.expenses),
            ("Прибыль до налогообложения", &display.profit_before_tax),
            ("Маржинальность", &display.margin),
            ("Рентабельность", &display.profitability),
            ("Налоговая база", &display.taxable_profit),
            ("Налог АУСН", &display.ausn_tax),
            ("НДФЛ", &display.ndfl_tax),
            ("Итого налогов", &display.total_tax),
            ("Налоговая нагрузка от оборота", &display.tax_burden_vs_turnover),
            ("Налоговая нагрузка от прибыли", &display.tax_burden_vs_profit),
        ];

        writeln!(f, "<h2>Результаты</h2><table>")?;
        for (label, value) in rows {
            writeln!(
                f,
                r#"<tr><th>{}</th><td class="value">{}</td></tr>"#,
                label,
                encode_text(value)
            )?;
        }
        writeln!(f, "</table>")
    }
}

impl Display for CalculatorPage<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, r#"<html lang="ru"><head><meta charset="utf-8">"#)?;
        writeln!(
            f,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#
        )?;
        writeln!(f, "<title>{}</title><style>{}</style></head><body>", PAGE_TITLE, STYLE)?;
        writeln!(f, "<h1>{}</h1>", PAGE_TITLE)?;

        if !self.errors.is_empty() {
            writeln!(
                f,
                r#"<p class="error">Исправьте ошибки в отмеченных полях.</p>"#
            )?;
        }

        writeln!(f, r#"<form method="post" action="/">"#)?;
        self.write_section(f, Section::Revenue, "Выручка и прибыль")?;
        self.write_section(f, Section::Expenses, "Расходы")?;
        writeln!(f, r#"<button type="submit">Рассчитать</button></form>"#)?;

        if let Some(results) = self.results {
            self.write_results(f, results)?;
        }

        writeln!(f, "</body></html>")
    }
}

// Calculator form as submitted by the user, before validation.
//
// Both the HTML form (urlencoded text) and the JSON API deserialize into
// `CalcForm`. Deserialization never fails on a bad number: unparseable text is
// kept as `FieldInput::Invalid` so that every field can be reported at once and
// the page can echo back exactly what was typed.

use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;

use super::Inputs;
use crate::core::{parse_amount, within_range, FieldErrors};

pub const MSG_REQUIRED: &str = "Обязательное поле";
pub const MSG_NOT_A_NUMBER: &str = "Введите число";
pub const MSG_NEGATIVE: &str = "Значение не может быть отрицательным";
pub const MSG_NEGATIVE_TURNOVER: &str = "Оборот не может быть отрицательным";
pub const MSG_AGGREGATOR_EXCEEDS_TOTAL: &str = "Оборот агрегатора не должен превышать общий оборот";
pub const MSG_OUT_OF_RANGE: &str = "Слишком большое значение";

/// Raw value of one form field
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldInput {
    /// Field missing, empty or `null`
    #[default]
    Blank,
    Number(Decimal),
    /// Text that could not be read as a number, kept verbatim
    Invalid(String),
}

impl FieldInput {
    pub fn from_text(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return FieldInput::Blank;
        }
        match parse_amount(raw) {
            Some(value) => FieldInput::Number(value),
            None => FieldInput::Invalid(raw.to_string()),
        }
    }

    /// Text to put back into the form input
    pub fn echo(&self) -> String {
        match self {
            FieldInput::Blank => String::new(),
            FieldInput::Number(value) => value.normalize().to_string(),
            FieldInput::Invalid(raw) => raw.clone(),
        }
    }
}

impl From<Decimal> for FieldInput {
    fn from(value: Decimal) -> Self {
        FieldInput::Number(value)
    }
}

struct FieldInputVisitor;

impl<'de> Visitor<'de> for FieldInputVisitor {
    type Value = FieldInput;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number, a numeric string or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<FieldInput, E> {
        Ok(FieldInput::from_text(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<FieldInput, E> {
        Ok(FieldInput::Number(Decimal::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<FieldInput, E> {
        Ok(FieldInput::Number(Decimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<FieldInput, E> {
        // Shortest round-trip text keeps 0.1 as 0.1 rather than its binary expansion
        Ok(FieldInput::from_text(&v.to_string()))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<FieldInput, E> {
        Ok(FieldInput::Invalid(v.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<FieldInput, E> {
        Ok(FieldInput::Blank)
    }

    fn visit_none<E: de::Error>(self) -> Result<FieldInput, E> {
        Ok(FieldInput::Blank)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<FieldInput, D::Error> {
        deserializer.deserialize_any(FieldInputVisitor)
    }
}

impl<'de> Deserialize<'de> for FieldInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FieldInputVisitor)
    }
}

/// How a field is checked during validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Must be present and non-negative
    RequiredNonNegative,
    /// Must be present, any sign
    RequiredSigned,
    /// Defaults to zero, must be non-negative
    NonNegative,
    /// Defaults to zero, any sign
    Signed,
    /// May stay absent, must be non-negative when given
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Revenue,
    Expenses,
}

/// Static description of a form field
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub section: Section,
    pub rule: FieldRule,
}

const fn field(name: &'static str, label: &'static str, section: Section, rule: FieldRule) -> FieldSpec {
    FieldSpec { name, label, section, rule }
}

/// Every form field in display order
pub const FIELDS: [FieldSpec; 28] = [
    field("turnover_total", "Оборот (в т.ч. агрегатор)", Section::Revenue, FieldRule::RequiredNonNegative),
    field("gross_profit", "Валовая прибыль (выручка - закупка)", Section::Revenue, FieldRule::RequiredSigned),
    field("turnover_aggregator", "Оборот агрегаторы", Section::Revenue, FieldRule::NonNegative),
    field("rent", "Аренда", Section::Expenses, FieldRule::NonNegative),
    field("subrent", "Субаренда", Section::Expenses, FieldRule::Signed),
    field("electricity", "Электроэнергия", Section::Expenses, FieldRule::NonNegative),
    field("other_utilities", "Прочие коммунальные услуги", Section::Expenses, FieldRule::NonNegative),
    field("payroll_total", "ФОТ общий", Section::Expenses, FieldRule::NonNegative),
    field("white_payroll_override", "Белый ФОТ (если отличается от 33%)", Section::Expenses, FieldRule::Optional),
    field("office_supplies", "Канцтовары и хозтовары", Section::Expenses, FieldRule::NonNegative),
    field("other_purchases_outside_opticom", "Прочие закупки вне Оптикома", Section::Expenses, FieldRule::NonNegative),
    field("write_offs", "Списания", Section::Expenses, FieldRule::NonNegative),
    field("meal_compensation", "Компенсация питания", Section::Expenses, FieldRule::NonNegative),
    field("other_write_offs", "Прочие списания", Section::Expenses, FieldRule::NonNegative),
    field("security", "Охрана", Section::Expenses, FieldRule::NonNegative),
    field("internet", "Интернет", Section::Expenses, FieldRule::NonNegative),
    field("maintenance", "Техническое обслуживание", Section::Expenses, FieldRule::NonNegative),
    field("other_repairs", "Прочий ремонт", Section::Expenses, FieldRule::NonNegative),
    field("cash_service", "Инкассация", Section::Expenses, FieldRule::NonNegative),
    field("mobile_connection", "Мобильная связь", Section::Expenses, FieldRule::NonNegative),
    field("bank_services", "Услуги банка", Section::Expenses, FieldRule::NonNegative),
    field("uniform", "Униформа", Section::Expenses, FieldRule::NonNegative),
    field("fiscal_device", "Фискальный накопитель", Section::Expenses, FieldRule::NonNegative),
    field("neo_service", "Обслуживание NEO", Section::Expenses, FieldRule::NonNegative),
    field("garbage_cleaning", "Вывоз мусора", Section::Expenses, FieldRule::NonNegative),
    field("disinfection", "Дезинсекция", Section::Expenses, FieldRule::NonNegative),
    field("promo_materials", "Рекламные материалы", Section::Expenses, FieldRule::NonNegative),
    field("inventory_result", "Результат инвентаризации", Section::Expenses, FieldRule::Signed),
];

/// Calculator form fields, one [`FieldInput`] each
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CalcForm {
    pub turnover_total: FieldInput,
    pub gross_profit: FieldInput,
    pub turnover_aggregator: FieldInput,
    pub rent: FieldInput,
    pub subrent: FieldInput,
    pub electricity: FieldInput,
    pub other_utilities: FieldInput,
    pub payroll_total: FieldInput,
    pub white_payroll_override: FieldInput,
    pub office_supplies: FieldInput,
    pub other_purchases_outside_opticom: FieldInput,
    pub write_offs: FieldInput,
    pub meal_compensation: FieldInput,
    pub other_write_offs: FieldInput,
    pub security: FieldInput,
    pub internet: FieldInput,
    pub maintenance: FieldInput,
    pub other_repairs: FieldInput,
    pub cash_service: FieldInput,
    pub mobile_connection: FieldInput,
    pub bank_services: FieldInput,
    pub uniform: FieldInput,
    pub fiscal_device: FieldInput,
    pub neo_service: FieldInput,
    pub garbage_cleaning: FieldInput,
    pub disinfection: FieldInput,
    pub promo_materials: FieldInput,
    pub inventory_result: FieldInput,
}

impl CalcForm {
    /// Look up a field by its form name
    pub fn get(&self, name: &str) -> Option<&FieldInput> {
        let input = match name {
            "turnover_total" => &self.turnover_total,
            "gross_profit" => &self.gross_profit,
            "turnover_aggregator" => &self.turnover_aggregator,
            "rent" => &self.rent,
            "subrent" => &self.subrent,
            "electricity" => &self.electricity,
            "other_utilities" => &self.other_utilities,
            "payroll_total" => &self.payroll_total,
            "white_payroll_override" => &self.white_payroll_override,
            "office_supplies" => &self.office_supplies,
            "other_purchases_outside_opticom" => &self.other_purchases_outside_opticom,
            "write_offs" => &self.write_offs,
            "meal_compensation" => &self.meal_compensation,
            "other_write_offs" => &self.other_write_offs,
            "security" => &self.security,
            "internet" => &self.internet,
            "maintenance" => &self.maintenance,
            "other_repairs" => &self.other_repairs,
            "cash_service" => &self.cash_service,
            "mobile_connection" => &self.mobile_connection,
            "bank_services" => &self.bank_services,
            "uniform" => &self.uniform,
            "fiscal_device" => &self.fiscal_device,
            "neo_service" => &self.neo_service,
            "garbage_cleaning" => &self.garbage_cleaning,
            "disinfection" => &self.disinfection,
            "promo_materials" => &self.promo_materials,
            "inventory_result" => &self.inventory_result,
            _ => return None,
        };
        Some(input)
    }

    /// Check every field and build [`Inputs`]
    ///
    /// Errors are collected for all fields rather than stopping at the first
    /// one. Costs left blank count as zero; a blank white-payroll override
    /// stays absent.
    pub fn validate(&self) -> Result<Inputs, FieldErrors> {
        let mut v = FieldValidator::default();

        let turnover_total = v.required(
            "turnover_total",
            &self.turnover_total,
            FieldRule::RequiredNonNegative,
        );
        let gross_profit = v.required("gross_profit", &self.gross_profit, FieldRule::RequiredSigned);
        let turnover_aggregator = v.amount("turnover_aggregator", &self.turnover_aggregator, FieldRule::NonNegative);

        if let Some(total) = turnover_total {
            if turnover_aggregator > total {
                v.reject("turnover_aggregator", MSG_AGGREGATOR_EXCEEDS_TOTAL);
            }
        }

        let inputs = Inputs {
            turnover_total: turnover_total.unwrap_or_default(),
            gross_profit: gross_profit.unwrap_or_default(),
            turnover_aggregator,
            rent: v.amount("rent", &self.rent, FieldRule::NonNegative),
            subrent: v.amount("subrent", &self.subrent, FieldRule::Signed),
            electricity: v.amount("electricity", &self.electricity, FieldRule::NonNegative),
            other_utilities: v.amount("other_utilities", &self.other_utilities, FieldRule::NonNegative),
            payroll_total: v.amount("payroll_total", &self.payroll_total, FieldRule::NonNegative),
            white_payroll_override: v.optional("white_payroll_override", &self.white_payroll_override),
            office_supplies: v.amount("office_supplies", &self.office_supplies, FieldRule::NonNegative),
            other_purchases_outside_opticom: v.amount(
                "other_purchases_outside_opticom",
                &self.other_purchases_outside_opticom,
                FieldRule::NonNegative,
            ),
            write_offs: v.amount("write_offs", &self.write_offs, FieldRule::NonNegative),
            meal_compensation: v.amount("meal_compensation", &self.meal_compensation, FieldRule::NonNegative),
            other_write_offs: v.amount("other_write_offs", &self.other_write_offs, FieldRule::NonNegative),
            security: v.amount("security", &self.security, FieldRule::NonNegative),
            internet: v.amount("internet", &self.internet, FieldRule::NonNegative),
            maintenance: v.amount("maintenance", &self.maintenance, FieldRule::NonNegative),
            other_repairs: v.amount("other_repairs", &self.other_repairs, FieldRule::NonNegative),
            cash_service: v.amount("cash_service", &self.cash_service, FieldRule::NonNegative),
            mobile_connection: v.amount("mobile_connection", &self.mobile_connection, FieldRule::NonNegative),
            bank_services: v.amount("bank_services", &self.bank_services, FieldRule::NonNegative),
            uniform: v.amount("uniform", &self.uniform, FieldRule::NonNegative),
            fiscal_device: v.amount("fiscal_device", &self.fiscal_device, FieldRule::NonNegative),
            neo_service: v.amount("neo_service", &self.neo_service, FieldRule::NonNegative),
            garbage_cleaning: v.amount("garbage_cleaning", &self.garbage_cleaning, FieldRule::NonNegative),
            disinfection: v.amount("disinfection", &self.disinfection, FieldRule::NonNegative),
            promo_materials: v.amount("promo_materials", &self.promo_materials, FieldRule::NonNegative),
            inventory_result: v.amount("inventory_result", &self.inventory_result, FieldRule::Signed),
        };

        if v.errors.is_empty() {
            Ok(inputs)
        } else {
            Err(v.errors)
        }
    }
}

/// Accumulates per-field errors while reading values
#[derive(Default)]
struct FieldValidator {
    errors: FieldErrors,
}

impl FieldValidator {
    fn reject(&mut self, name: &str, message: &str) {
        // First problem found for a field wins
        self.errors
            .entry(name.to_string())
            .or_insert_with(|| message.to_string());
    }

    /// Read a number and apply sign and range checks
    fn check(&mut self, name: &str, input: &FieldInput, rule: FieldRule) -> Option<Option<Decimal>> {
        let value = match input {
            FieldInput::Blank => return Some(None),
            FieldInput::Invalid(_) => {
                self.reject(name, MSG_NOT_A_NUMBER);
                return None;
            }
            FieldInput::Number(value) => *value,
        };

        if !within_range(value) {
            self.reject(name, MSG_OUT_OF_RANGE);
            return None;
        }

        let sign_permissive = matches!(rule, FieldRule::RequiredSigned | FieldRule::Signed);
        if !sign_permissive && value < Decimal::ZERO {
            let message = if name == "turnover_total" {
                MSG_NEGATIVE_TURNOVER
            } else {
                MSG_NEGATIVE
            };
            self.reject(name, message);
            return None;
        }

        Some(Some(value))
    }

    fn required(&mut self, name: &str, input: &FieldInput, rule: FieldRule) -> Option<Decimal> {
        match self.check(name, input, rule) {
            Some(Some(value)) => Some(value),
            Some(None) => {
                self.reject(name, MSG_REQUIRED);
                None
            }
            None => None,
        }
    }

    fn amount(&mut self, name: &str, input: &FieldInput, rule: FieldRule) -> Decimal {
        self.check(name, input, rule).flatten().unwrap_or_default()
    }

    fn optional(&mut self, name: &str, input: &FieldInput) -> Option<Decimal> {
        self.check(name, input, FieldRule::Optional).flatten()
    }
}

pub mod calc_form;
pub mod derived;
pub mod inputs;
pub mod results;

pub use calc_form::{CalcForm, FieldInput, FieldRule, FieldSpec, Section, FIELDS};
pub use derived::Derived;
pub use inputs::Inputs;
pub use results::Results;

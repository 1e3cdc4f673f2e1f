pub mod calculator_page;

pub use calculator_page::{CalculatorPage, PAGE_TITLE};

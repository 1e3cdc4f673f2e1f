pub mod burden_calculator;
pub mod burden_service;
pub mod formatting;

pub use burden_calculator::{aggregate, calculate, derive, white_payroll};
pub use burden_service::BurdenService;
pub use formatting::{format_money, format_percent, FormattedResults};

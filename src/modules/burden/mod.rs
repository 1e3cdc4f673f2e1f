pub mod controllers;
pub mod models;
pub mod services;
pub mod views;

pub use models::{CalcForm, Derived, Inputs, Results};
pub use services::{aggregate, calculate, derive, format_money, format_percent, BurdenService};

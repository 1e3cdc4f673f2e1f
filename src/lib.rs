//! UPPETIT tax-burden calculator
//!
//! Computes the monthly tax burden of a store (royalty, payroll, AUSN and NDFL
//! taxes, burden ratios) from revenue and cost figures submitted through a web
//! form or JSON API.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::burden;
pub use modules::burden::{calculate, format_money, format_percent, Derived, Inputs, Results};

mod burden_controller;

pub use burden_controller::{calculate, show_form, submit_form, CalculationResponse};

// Re-export configure for main.rs
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    burden_controller::configure(cfg);
}

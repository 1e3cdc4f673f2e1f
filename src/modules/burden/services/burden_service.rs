use tracing::{debug, info, warn};

use crate::core::{AppError, Result};
use crate::modules::burden::models::{CalcForm, Results};
use crate::modules::burden::services::burden_calculator;

/// Validates submitted forms and runs the burden calculation
///
/// Stateless; one instance can serve every request.
pub struct BurdenService;

impl BurdenService {
    pub fn new() -> Self {
        Self
    }

    /// Validate a submitted form and calculate the tax burden
    ///
    /// # Errors
    /// Returns `AppError::InvalidFields` with one message per rejected field
    pub fn evaluate(&self, form: &CalcForm) -> Result<Results> {
        let inputs = form.validate().map_err(|errors| {
            warn!(
                fields = ?errors.keys().collect::<Vec<_>>(),
                "Calculation rejected: invalid input"
            );
            AppError::InvalidFields(errors)
        })?;

        debug!(?inputs, "Calculating tax burden");
        let results = burden_calculator::calculate(&inputs);

        info!(
            turnover_total = %results.inputs.turnover_total,
            taxable_profit = %results.taxable_profit,
            total_tax = %results.total_tax,
            "Tax burden calculated"
        );

        Ok(results)
    }
}

impl Default for BurdenService {
    fn default() -> Self {
        Self::new()
    }
}

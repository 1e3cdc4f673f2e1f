pub mod amount;
pub mod error;

pub use amount::{parse_amount, within_range, MAX_ABS_AMOUNT};
pub use error::{AppError, FieldErrors, Result};

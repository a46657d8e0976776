use crate::core::bmi;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_record;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::colors::colorize_category;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate the inputs, compute the BMI and persist one reading.
    ///
    /// Nothing is written when validation fails or the BMI is undefined;
    /// the insert itself is a single atomic statement.
    pub fn apply(pool: &mut DbPool, weight_kg: f64, height_cm: f64) -> AppResult<i64> {
        if weight_kg <= 0.0 {
            return Err(AppError::InvalidWeight(format!(
                "{} (weight must be a positive number of kilograms)",
                weight_kg
            )));
        }
        if height_cm <= 0.0 {
            return Err(AppError::InvalidHeight(format!(
                "{} (height must be a positive number of centimeters)",
                height_cm
            )));
        }

        // Zero height is already rejected above; the check stays because the
        // engine's contract is Option, not panic.
        let value = bmi::compute(weight_kg, height_cm).ok_or(AppError::UndefinedBmi)?;
        let category = bmi::classify(value);

        let id = insert_record(&pool.conn, weight_kg, height_cm, value, category)?;

        // Audit log (non-blocking)
        if let Err(e) = ttlog(
            &pool.conn,
            "add",
            &format!("record {}", id),
            &format!("Saved reading: {} kg / {} cm → BMI {}", weight_kg, height_cm, value),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success(format!(
            "BMI: {:.2} ({})",
            value,
            colorize_category(category)
        ));

        Ok(id)
    }
}

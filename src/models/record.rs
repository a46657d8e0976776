use super::category::Category;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One persisted BMI observation.
#[derive(Debug, Clone, Serialize)]
pub struct BmiRecord {
    pub id: i64,
    pub date: NaiveDateTime, // ⇔ bmi_records.date (TEXT "YYYY-MM-DD HH:MM:SS")
    pub weight: f64,         // ⇔ bmi_records.weight (REAL, kg)
    pub height: f64,         // ⇔ bmi_records.height (REAL, cm)
    pub bmi: f64,            // ⇔ bmi_records.bmi (REAL, 2 decimals)
    pub category: Category,  // ⇔ bmi_records.category (TEXT, display label)
}

impl BmiRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

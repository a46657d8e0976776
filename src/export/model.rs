use serde::Serialize;

/// Flat row for the exported trend series: the same (timestamp, bmi) pairs
/// the trend view consumes, nothing more.
#[derive(Serialize, Clone, Debug)]
pub struct TrendPoint {
    pub date: String,
    pub bmi: f64,
}

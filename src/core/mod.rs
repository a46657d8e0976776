pub mod add;
pub mod backup;
pub mod bmi;
pub mod log;

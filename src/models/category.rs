use serde::Serialize;
use std::fmt;

/// BMI classification band.
///
/// The DB string and the display label are the same on purpose: the
/// `category` column stores exactly what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    #[serde(rename = "Underweight")]
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    #[serde(rename = "Overweight")]
    Overweight,
    #[serde(rename = "Obesity")]
    Obesity,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::NormalWeight => "Normal weight",
            Category::Overweight => "Overweight",
            Category::Obesity => "Obesity",
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        self.label()
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Underweight" => Some(Category::Underweight),
            "Normal weight" => Some(Category::NormalWeight),
            "Overweight" => Some(Category::Overweight),
            "Obesity" => Some(Category::Obesity),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_round_trip() {
        for c in [
            Category::Underweight,
            Category::NormalWeight,
            Category::Overweight,
            Category::Obesity,
        ] {
            assert_eq!(Category::from_db_str(c.to_db_str()), Some(c));
        }
    }

    #[test]
    fn unknown_db_string_is_rejected() {
        assert_eq!(Category::from_db_str("Severely obese"), None);
    }
}

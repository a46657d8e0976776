//! BMI engine: the two pure functions everything else is built around.

use crate::models::category::Category;

/// Compute the Body Mass Index from weight (kg) and height (cm),
/// rounded to 2 decimal places.
///
/// Returns `None` when the height is zero: the value is undefined, not an
/// error, and callers must check before using it. No other validation
/// happens here; rejecting negative or absurd inputs is the caller's job.
pub fn compute(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if height_cm == 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    Some((bmi * 100.0).round() / 100.0)
}

/// Map a BMI value to its classification band.
///
/// The thresholds are inherited as-is: `[24.9, 25)` falls through to
/// Obesity because the Normal band closes at 24.9 while Overweight opens
/// at 25. Pinned by the tests below; do not realign without product review.
pub fn classify(bmi: f64) -> Category {
    if bmi < 18.5 {
        Category::Underweight
    } else if (18.5..24.9).contains(&bmi) {
        Category::NormalWeight
    } else if (25.0..29.9).contains(&bmi) {
        Category::Overweight
    } else {
        Category::Obesity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_reference_value() {
        assert_eq!(compute(70.0, 175.0), Some(22.86));
        assert_eq!(classify(22.86), Category::NormalWeight);
    }

    #[test]
    fn rounds_to_two_decimals() {
        // 80 / 1.83^2 = 23.8885...
        assert_eq!(compute(80.0, 183.0), Some(23.89));
        // 50 / 1.60^2 = 19.53125
        assert_eq!(compute(50.0, 160.0), Some(19.53));
    }

    #[test]
    fn zero_height_is_undefined() {
        for w in [0.1, 1.0, 70.0, 250.0] {
            assert_eq!(compute(w, 0.0), None);
        }
    }

    #[test]
    fn positive_inputs_give_finite_positive_bmi() {
        for (w, h) in [(0.5, 30.0), (3.4, 51.0), (70.0, 175.0), (200.0, 210.0)] {
            let bmi = compute(w, h).unwrap();
            assert!(bmi.is_finite());
            assert!(bmi > 0.0);
        }
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(classify(18.49), Category::Underweight);
        assert_eq!(classify(18.5), Category::NormalWeight);
        assert_eq!(classify(24.8), Category::NormalWeight);
        assert_eq!(classify(25.0), Category::Overweight);
        assert_eq!(classify(29.8), Category::Overweight);
        assert_eq!(classify(30.0), Category::Obesity);
    }

    #[test]
    fn band_gaps_fall_through_to_obesity() {
        // Inherited quirk: the gaps at the top of the Normal and Overweight
        // bands classify as Obesity. Kept on purpose.
        assert_eq!(classify(24.9), Category::Obesity);
        assert_eq!(classify(24.95), Category::Obesity);
        assert_eq!(classify(29.9), Category::Obesity);
    }
}

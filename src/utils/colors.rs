//! ANSI color helper utilities for terminal output.

use crate::models::category::Category;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Band color used by `list` and the display surface:
/// Underweight → cyan, Normal → green, Overweight → yellow, Obesity → red.
pub fn color_for_category(category: Category) -> &'static str {
    match category {
        Category::Underweight => CYAN,
        Category::NormalWeight => GREEN,
        Category::Overweight => YELLOW,
        Category::Obesity => RED,
    }
}

/// Colored label, ready to print.
pub fn colorize_category(category: Category) -> String {
    format!("{}{}{}", color_for_category(category), category, RESET)
}

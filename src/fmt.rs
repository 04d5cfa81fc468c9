//! Shared formatting utilities for report output

/// Rule printed above and below each module table
pub const RULE: &str = "======================================================";

/// Pad or truncate `name` to exactly `width` characters
///
/// # Examples
///
/// ```
/// use webpack_diff::fmt::pad_name;
///
/// assert_eq!(pad_name("a.js", 6), "a.js  ");
/// assert_eq!(pad_name("very_long_name.js", 6), "very_l");
/// ```
pub fn pad_name(name: &str, width: usize) -> String {
    format!("{:<width$.width$}", name, width = width)
}

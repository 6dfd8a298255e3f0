//! Display formatting for temperatures and record stats.

use crate::model::TempUnit;

/// Placeholder shown wherever a record field is absent.
pub const MISSING: &str = "—";

/// Standard affine conversion, rounded half away from zero.
pub fn celsius_to_fahrenheit(celsius: f64) -> i32 {
    (celsius * 9.0 / 5.0 + 32.0).round() as i32
}

/// Render a temperature for display, e.g. `20°C` or `68°F`.
///
/// An absent temperature renders as the placeholder rather than failing.
pub fn format_temp(temp_c: Option<i32>, unit: TempUnit) -> String {
    match (temp_c, unit) {
        (None, _) => MISSING.to_string(),
        (Some(c), TempUnit::Celsius) => format!("{c}{}", unit.suffix()),
        (Some(c), TempUnit::Fahrenheit) => {
            format!("{}{}", celsius_to_fahrenheit(f64::from(c)), unit.suffix())
        }
    }
}

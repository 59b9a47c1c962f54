//! Unit conversion utilities
//!
//! The engine works in decimal inches throughout. This module converts to and
//! from millimetres (hole diameters, the 32 mm system, the nesting boundary)
//! and formats and parses fractional inches for drawing labels and user input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Millimetres per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Default fraction denominator for labels (1/16")
pub const DEFAULT_DENOMINATOR: u32 = 16;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    Metric,
    /// Imperial system (inches)
    #[default]
    Imperial,
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Convert inches to millimetres
pub fn inches_to_mm(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

/// Convert millimetres to inches
pub fn mm_to_inches(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Format a length in inches as a reduced fraction, e.g. `25 1/2"`
///
/// The value is rounded to the nearest `1/denominator` inch.
pub fn format_fraction(inches: f64, denominator: u32) -> String {
    let denominator = denominator.max(1);
    let sign = if inches < 0.0 { "-" } else { "" };
    let ticks = (inches.abs() * denominator as f64).round() as u64;
    let whole = ticks / denominator as u64;
    let rem = (ticks % denominator as u64) as u32;

    if rem == 0 {
        return format!("{}{}\"", sign, whole);
    }

    let g = gcd(rem, denominator);
    let (num, den) = (rem / g, denominator / g);
    if whole == 0 {
        format!("{}{}/{}\"", sign, num, den)
    } else {
        format!("{}{} {}/{}\"", sign, whole, num, den)
    }
}

/// Format length value for display
///
/// * `value_in` - Value in inches
/// * `system` - Target measurement system
pub fn format_length(value_in: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => format!("{:.1} mm", inches_to_mm(value_in)),
        MeasurementSystem::Imperial => format_fraction(value_in, DEFAULT_DENOMINATOR),
    }
}

/// Parse length string to inches
///
/// * `input` - String to parse (`"85 1/2"`, `"3/4\""`, `"762"`)
/// * `system` - Assumed measurement system
pub fn parse_length(input: &str, system: MeasurementSystem) -> Result<f64, String> {
    let input = input.trim().trim_end_matches('"').trim();
    if input.is_empty() {
        return Err("Empty length".to_string());
    }

    match system {
        MeasurementSystem::Metric => {
            let mm = input
                .trim_end_matches("mm")
                .trim()
                .parse::<f64>()
                .map_err(|e| e.to_string())?;
            Ok(mm_to_inches(mm))
        }
        MeasurementSystem::Imperial => {
            if !input.contains('/') {
                return input.parse::<f64>().map_err(|e| e.to_string());
            }

            let mut total = 0.0;
            let mut negative = false;
            for part in input.split_whitespace() {
                let part = if let Some(stripped) = part.strip_prefix('-') {
                    negative = true;
                    stripped
                } else {
                    part
                };
                if part.contains('/') {
                    let frac: Vec<&str> = part.split('/').collect();
                    if frac.len() != 2 {
                        return Err("Invalid fraction format".to_string());
                    }
                    let num = frac[0].parse::<f64>().map_err(|_| "Invalid numerator")?;
                    let den = frac[1].parse::<f64>().map_err(|_| "Invalid denominator")?;
                    if den == 0.0 {
                        return Err("Division by zero".to_string());
                    }
                    total += num / den;
                } else {
                    total += part.parse::<f64>().map_err(|_| "Invalid number part")?;
                }
            }
            Ok(if negative { -total } else { total })
        }
    }
}

/// Get the unit label for the given system ("mm" or "in")
pub fn get_unit_label(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Metric => "mm",
        MeasurementSystem::Imperial => "in",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_conversion() {
        assert_eq!(inches_to_mm(1.0), 25.4);
        assert!((mm_to_inches(32.0) - 1.259_842_5).abs() < 1e-6);
    }

    #[test]
    fn test_format_fraction() {
        assert_eq!(format_fraction(25.5, 16), "25 1/2\"");
        assert_eq!(format_fraction(0.75, 16), "3/4\"");
        assert_eq!(format_fraction(30.0, 16), "30\"");
        assert_eq!(format_fraction(12.875, 16), "12 7/8\"");
        assert_eq!(format_fraction(-0.25, 16), "-1/4\"");
    }

    #[test]
    fn test_format_fraction_rounds_to_denominator() {
        // 32 mm is 1.2598", nearest sixteenth is 1 1/4"
        assert_eq!(format_fraction(mm_to_inches(32.0), 16), "1 1/4\"");
        assert_eq!(format_fraction(0.999, 16), "1\"");
    }

    #[test]
    fn test_format_length_metric() {
        assert_eq!(format_length(1.0, MeasurementSystem::Metric), "25.4 mm");
    }

    #[test]
    fn test_parse_imperial() {
        assert_eq!(parse_length("85 1/2", MeasurementSystem::Imperial).unwrap(), 85.5);
        assert_eq!(parse_length("3/4\"", MeasurementSystem::Imperial).unwrap(), 0.75);
        assert_eq!(parse_length("  24  ", MeasurementSystem::Imperial).unwrap(), 24.0);
        assert_eq!(parse_length("-1/2", MeasurementSystem::Imperial).unwrap(), -0.5);
    }

    #[test]
    fn test_parse_metric() {
        let ten = parse_length("254", MeasurementSystem::Metric).unwrap();
        assert!((ten - 10.0).abs() < 1e-9);
        assert_eq!(parse_length("25.4mm", MeasurementSystem::Metric).unwrap(), 1.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(parse_length("abc", MeasurementSystem::Metric).is_err());
        assert!(parse_length("1/0", MeasurementSystem::Imperial).is_err());
        assert!(parse_length("1/2/3", MeasurementSystem::Imperial).is_err());
        assert!(parse_length("", MeasurementSystem::Imperial).is_err());
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(get_unit_label(MeasurementSystem::Metric), "mm");
        assert_eq!(get_unit_label(MeasurementSystem::Imperial), "in");
    }
}

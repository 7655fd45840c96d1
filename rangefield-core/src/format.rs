//! Number formatting for the min/current/max labels.
//!
//! Any `Fn(f64) -> String` is a formatter; [`CompactFormat`] is the default
//! when a field is built without one.

/// Turns a slider value into display text.
pub trait NumberFormat {
    fn format(&self, value: f64) -> String;
}

impl<F> NumberFormat for F
where
    F: Fn(f64) -> String,
{
    fn format(&self, value: f64) -> String {
        self(value)
    }
}

const COMPACT_SUFFIXES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Short human form: `0.2`, `100`, `1.5K`, `2.35M`.
///
/// Rounds to a fixed number of significant digits and drops trailing zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompactFormat {
    significant_digits: u32,
}

impl Default for CompactFormat {
    fn default() -> Self {
        Self { significant_digits: 3 }
    }
}

impl CompactFormat {
    pub fn with_significant_digits(significant_digits: u32) -> Self {
        Self {
            significant_digits: significant_digits.max(1),
        }
    }
}

impl NumberFormat for CompactFormat {
    fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let sig = self.significant_digits;
        let rounded = round_significant(value, sig);
        if rounded == 0.0 {
            return "0".to_string();
        }

        let (divisor, suffix) = COMPACT_SUFFIXES
            .iter()
            .copied()
            .find(|(threshold, _)| rounded.abs() >= *threshold)
            .unwrap_or((1.0, ""));
        let scaled = round_significant(rounded / divisor, sig);
        format!("{}{}", trim_significant(scaled, sig), suffix)
    }
}

/// Fixed number of decimal places: `FixedFormat::new(2)` renders `0.5` as `0.50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedFormat {
    decimals: usize,
}

impl FixedFormat {
    pub fn new(decimals: usize) -> Self {
        Self { decimals }
    }
}

impl NumberFormat for FixedFormat {
    fn format(&self, value: f64) -> String {
        let s = format!("{:.*}", self.decimals, value);
        // "-0.00" reads badly under a slider.
        if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
            s[1..].to_string()
        } else {
            s
        }
    }
}

fn integer_digits(value: f64) -> i32 {
    value.abs().log10().floor() as i32 + 1
}

fn round_significant(value: f64, sig: u32) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let decimals = sig as i32 - integer_digits(value);
    if decimals >= 0 {
        let factor = 10f64.powi(decimals);
        (value * factor).round() / factor
    } else {
        let factor = 10f64.powi(-decimals);
        (value / factor).round() * factor
    }
}

fn trim_significant(value: f64, sig: u32) -> String {
    let decimals = (sig as i32 - integer_digits(value)).clamp(0, 15) as usize;
    let s = format!("{:.*}", decimals, value);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_small_values() {
        let f = CompactFormat::default();
        assert_eq!(f.format(0.0), "0");
        assert_eq!(f.format(1.0), "1");
        assert_eq!(f.format(0.2), "0.2");
        assert_eq!(f.format(0.8), "0.8");
        assert_eq!(f.format(10.0), "10");
        assert_eq!(f.format(100.0), "100");
        assert_eq!(f.format(0.12345), "0.123");
    }

    #[test]
    fn test_compact_suffixes() {
        let f = CompactFormat::default();
        assert_eq!(f.format(1500.0), "1.5K");
        assert_eq!(f.format(12_345.0), "12.3K");
        assert_eq!(f.format(2_345_678.0), "2.35M");
        assert_eq!(f.format(7e9), "7B");
        assert_eq!(f.format(-2500.0), "-2.5K");
    }

    #[test]
    fn test_compact_rounding_crosses_suffix() {
        let f = CompactFormat::default();
        assert_eq!(f.format(999.9), "1K");
    }

    #[test]
    fn test_compact_significant_digits() {
        let two = CompactFormat::with_significant_digits(2);
        assert_eq!(two.format(1234.0), "1.2K");
        assert_eq!(two.format(0.1234), "0.12");

        let four = CompactFormat::with_significant_digits(4);
        assert_eq!(four.format(12_340.0), "12.34K");

        // Zero digits is treated as one.
        let none = CompactFormat::with_significant_digits(0);
        assert_eq!(none, CompactFormat::with_significant_digits(1));
        assert_eq!(none.format(1234.0), "1K");
    }

    #[test]
    fn test_compact_non_finite() {
        let f = CompactFormat::default();
        assert_eq!(f.format(f64::NAN), "NaN");
        assert_eq!(f.format(f64::INFINITY), "inf");
    }

    #[test]
    fn test_fixed_format() {
        let f = FixedFormat::new(2);
        assert_eq!(f.format(0.5), "0.50");
        assert_eq!(f.format(-0.001), "0.00");
        assert_eq!(f.format(-1.5), "-1.50");
    }

    #[test]
    fn test_closure_is_a_formatter() {
        let f = |v: f64| format!("${v:.0}");
        assert_eq!(NumberFormat::format(&f, 42.0), "$42");
    }
}

//! Money type for displaying dollar allocations
//!
//! Allocations are computed in floating point from stored percentages and
//! rounded to whole cents once, at the point they become money. Incomes have
//! no upper bound, so the cent count stays a float instead of an `i64`.

use std::fmt;

/// A monetary amount held as a whole number of cents
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Money(f64);

impl Money {
    /// Round a dollar amount to the nearest cent (halves away from zero)
    pub fn from_dollars(dollars: f64) -> Self {
        Self((dollars * 100.0).round())
    }

    /// Get the amount in cents
    pub fn cents(&self) -> f64 {
        self.0
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let dollars = (self.0 / 100.0).abs();
        if self.is_negative() {
            format!("-{}{:.2}", symbol, dollars)
        } else {
            format!("{}{:.2}", symbol, dollars)
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dollars_rounds_to_cents() {
        assert_eq!(Money::from_dollars(1500.0).cents(), 150_000.0);
        assert_eq!(Money::from_dollars(33.333).cents(), 3333.0);
        assert_eq!(Money::from_dollars(0.125).cents(), 13.0);
        assert_eq!(Money::from_dollars(-0.125).cents(), -13.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_dollars(10.5)), "$10.50");
        assert_eq!(format!("{}", Money::from_dollars(0.0)), "$0.00");
        assert_eq!(format!("{}", Money::from_dollars(-10.5)), "-$10.50");
        assert_eq!(format!("{}", Money::from_dollars(0.05)), "$0.05");
        assert_eq!(format!("{}", Money::from_dollars(33.333)), "$33.33");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_dollars(900.0).format_with_symbol("€"), "€900.00");
        assert_eq!(Money::from_dollars(-0.01).format_with_symbol("£"), "-£0.01");
    }

    #[test]
    fn test_amounts_beyond_i64_cents() {
        assert_eq!(
            Money::from_dollars(1e20).to_string(),
            "$100000000000000000000.00"
        );
        assert_eq!(
            Money::from_dollars(9.3e16).to_string(),
            "$93000000000000000.00"
        );
    }

    #[test]
    fn test_tiny_negative_rounds_to_zero() {
        assert_eq!(Money::from_dollars(-0.001).to_string(), "$0.00");
    }
}

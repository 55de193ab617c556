//! Percentage of income assigned to a category

use std::fmt;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

use crate::error::PaysplitError;

/// The total every budget has to reach
pub const FULL: f64 = 100.0;

/// Slack allowed when comparing running totals against [`FULL`]
///
/// Decimal inputs such as 33.3 + 33.3 + 33.4 do not sum to exactly 100.0
/// in binary floating point.
pub const TOLERANCE: f64 = 1e-9;

/// Whether a running total has gone past 100%
pub fn exceeds_full(total: f64) -> bool {
    total > FULL + TOLERANCE
}

/// Whether a running total is 100%
pub fn is_full(total: f64) -> bool {
    (total - FULL).abs() <= TOLERANCE
}

/// A percentage in the closed range 0..=100
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Percentage(f64);

impl Percentage {
    /// Validate and wrap a percentage
    ///
    /// The bound is exact: no tolerance applies to a single share.
    pub fn new(value: f64) -> Result<Self, PaysplitError> {
        if !value.is_finite() || value < 0.0 || value > FULL {
            return Err(PaysplitError::Validation(format!(
                "Percentage must be between 0 and 100, got {}",
                value
            )));
        }
        Ok(Self(value))
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Apply this percentage to an amount
    pub fn of(&self, amount: f64) -> f64 {
        amount * self.0 / FULL
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

impl ToSql for Percentage {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        self.0.to_sql()
    }
}

impl FromSql for Percentage {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let raw = f64::column_result(value)?;
        Percentage::new(raw).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

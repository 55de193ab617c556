//! Budget model
//!
//! A budget is a monthly income, a paycheck count, and a set of named
//! categories whose percentages add up to 100. It is always stored and
//! replaced as a whole.

use super::ids::UserId;
use super::percentage::{self, Percentage};
use crate::error::PaysplitError;

/// One category and its share of income
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub percentage: Percentage,
}

impl CategoryShare {
    pub fn new(category: impl Into<String>, percentage: Percentage) -> Self {
        Self {
            category: category.into(),
            percentage,
        }
    }
}

/// A row of the `budgets` table
///
/// Every row of a user carries the same income and paycheck count.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetEntry {
    pub user_id: UserId,
    pub category: String,
    pub percentage: Percentage,
    pub income: f64,
    pub paychecks: u32,
}

/// A dollar amount derived from a category's percentage
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    pub category: String,
    pub percentage: Percentage,
    pub amount: f64,
}

/// A complete budget
#[derive(Debug, Clone, PartialEq)]
pub struct Budget {
    /// Monthly income
    pub income: f64,
    /// Paychecks received per month
    pub paychecks: u32,
    /// Category shares, in entry order
    pub shares: Vec<CategoryShare>,
}

impl Budget {
    pub fn new(income: f64, paychecks: u32, shares: Vec<CategoryShare>) -> Self {
        Self {
            income,
            paychecks,
            shares,
        }
    }

    /// Rebuild a budget from its stored rows
    ///
    /// Income and paycheck count are taken from the first row. Returns
    /// `None` when the user has no rows.
    pub fn from_entries(entries: Vec<BudgetEntry>) -> Option<Self> {
        let first = entries.first()?;
        let (income, paychecks) = (first.income, first.paychecks);

        let shares = entries
            .into_iter()
            .map(|entry| CategoryShare::new(entry.category, entry.percentage))
            .collect();

        Some(Self::new(income, paychecks, shares))
    }

    /// Sum of all category percentages
    pub fn total_percentage(&self) -> f64 {
        self.shares.iter().map(|s| s.percentage.value()).sum()
    }

    /// Monthly dollar amount for a category share
    pub fn monthly_allocation(&self, share: &CategoryShare) -> f64 {
        share.percentage.of(self.income)
    }

    /// Per-paycheck dollar amount for a category share
    pub fn per_paycheck_allocation(&self, share: &CategoryShare) -> f64 {
        self.monthly_allocation(share) / f64::from(self.paychecks)
    }

    /// Split an arbitrary amount across the stored percentages
    pub fn allocate(&self, amount: f64) -> Vec<Allocation> {
        self.shares
            .iter()
            .map(|share| Allocation {
                category: share.category.clone(),
                percentage: share.percentage,
                amount: share.percentage.of(amount),
            })
            .collect()
    }

    /// Check the invariants a budget must hold before it is saved
    pub fn validate(&self) -> Result<(), PaysplitError> {
        if !self.income.is_finite() || self.income <= 0.0 {
            return Err(PaysplitError::Validation(
                "Monthly income must be positive".into(),
            ));
        }

        if self.paychecks == 0 {
            return Err(PaysplitError::Validation(
                "Paycheck count must be at least 1".into(),
            ));
        }

        if self.shares.is_empty() {
            return Err(PaysplitError::Validation(
                "A budget needs at least one category".into(),
            ));
        }

        let total = self.total_percentage();
        if !percentage::is_full(total) {
            return Err(PaysplitError::Validation(format!(
                "Category percentages total {:.2}%, they must total 100%",
                total
            )));
        }

        Ok(())
    }
}

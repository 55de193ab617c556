//! In-progress budget
//!
//! [`BudgetDraft`] holds everything collected during one editing session.
//! The editor owns it for the length of the session and turns it into a
//! [`Budget`] once the categories reach 100%.

use thiserror::Error;

use crate::models::percentage::{self, Percentage};
use crate::models::{Budget, CategoryShare};

/// Why a category could not be recorded, or the draft not finished
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DraftError {
    #[error("Category name cannot be empty.")]
    EmptyName,

    #[error("Please enter a positive value.")]
    NotPositive,

    #[error("Adding {percentage:.2}% exceeds 100%. Try again.")]
    ExceedsTotal { percentage: f64 },

    #[error("Your percentages total {total:.2}%. They must total 100%.")]
    Incomplete { total: f64 },
}

/// What happened to a recorded category
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// A new category was appended
    Added { percentage: Percentage, total: f64 },
    /// An existing category got a new percentage
    Replaced {
        previous: Percentage,
        percentage: Percentage,
        total: f64,
    },
}

impl AddOutcome {
    /// Percentage that was recorded
    pub fn percentage(&self) -> Percentage {
        match self {
            Self::Added { percentage, .. } | Self::Replaced { percentage, .. } => *percentage,
        }
    }

    /// Running total after the change
    pub fn total(&self) -> f64 {
        match self {
            Self::Added { total, .. } | Self::Replaced { total, .. } => *total,
        }
    }
}

/// Trim a category name, rejecting an empty one
pub fn category_name(input: &str) -> Result<&str, DraftError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(DraftError::EmptyName);
    }
    Ok(name)
}

/// A budget being entered
#[derive(Debug, Clone)]
pub struct BudgetDraft {
    income: f64,
    paychecks: u32,
    shares: Vec<CategoryShare>,
}

impl BudgetDraft {
    pub fn new(income: f64, paychecks: u32) -> Self {
        Self {
            income,
            paychecks,
            shares: Vec::new(),
        }
    }

    pub fn income(&self) -> f64 {
        self.income
    }

    pub fn paychecks(&self) -> u32 {
        self.paychecks
    }

    pub fn shares(&self) -> &[CategoryShare] {
        &self.shares
    }

    /// Sum of the recorded percentages
    pub fn total(&self) -> f64 {
        self.shares.iter().map(|s| s.percentage.value()).sum()
    }

    /// Record a category's percentage
    ///
    /// Rejected when `total + percentage` would pass 100, in which case the
    /// draft is unchanged. An entry that lands within the rounding tolerance
    /// above 100 is trimmed to the room left, so no stored share is ever
    /// above 100. A repeated name replaces the earlier
    /// percentage and the total is recomputed, so it always equals what will
    /// be saved.
    pub fn add(&mut self, category: &str, percentage: f64) -> Result<AddOutcome, DraftError> {
        let category = category_name(category)?;
        if !percentage.is_finite() || percentage <= 0.0 {
            return Err(DraftError::NotPositive);
        }

        let total = self.total();
        if percentage::exceeds_full(total + percentage) {
            return Err(DraftError::ExceedsTotal { percentage });
        }
        let recorded = if total + percentage > percentage::FULL {
            percentage::FULL - total
        } else {
            percentage
        };
        if recorded <= 0.0 {
            return Err(DraftError::ExceedsTotal { percentage });
        }
        let value =
            Percentage::new(recorded).map_err(|_| DraftError::ExceedsTotal { percentage })?;

        match self.shares.iter_mut().find(|s| s.category == category) {
            Some(existing) => {
                let previous = existing.percentage;
                existing.percentage = value;
                Ok(AddOutcome::Replaced {
                    previous,
                    percentage: value,
                    total: self.total(),
                })
            }
            None => {
                self.shares.push(CategoryShare::new(category, value));
                Ok(AddOutcome::Added {
                    percentage: value,
                    total: self.total(),
                })
            }
        }
    }

    /// Whether the categories total exactly 100%
    pub fn is_complete(&self) -> bool {
        percentage::is_full(self.total())
    }

    /// Build the finished budget, if the categories total 100%
    pub fn finish(&self) -> Result<Budget, DraftError> {
        if !self.is_complete() {
            return Err(DraftError::Incomplete {
                total: self.total(),
            });
        }
        Ok(Budget::new(self.income, self.paychecks, self.shares.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_draft_finishes() {
        let mut draft = BudgetDraft::new(3000.0, 2);
        draft.add("Rent", 50.0).unwrap();
        draft.add("Food", 20.0).unwrap();
        let outcome = draft.add("Savings", 30.0).unwrap();

        assert_eq!(outcome.total(), 100.0);
        assert!(matches!(outcome, AddOutcome::Added { .. }));
        let budget = draft.finish().unwrap();
        assert_eq!(budget.income, 3000.0);
        assert_eq!(budget.paychecks, 2);
        assert_eq!(budget.shares.len(), 3);
    }

    #[test]
    fn test_incomplete_draft_is_rejected() {
        let mut draft = BudgetDraft::new(3000.0, 2);
        assert_eq!(draft.finish(), Err(DraftError::Incomplete { total: 0.0 }));

        draft.add("Rent", 60.0).unwrap();
        let err = draft.finish().unwrap_err();
        assert_eq!(err.to_string(), "Your percentages total 60.00%. They must total 100%.");
        assert!(!draft.is_complete());
    }

    #[test]
    fn test_overflow_leaves_total_unchanged() {
        let mut draft = BudgetDraft::new(1000.0, 1);
        draft.add("Rent", 70.0).unwrap();

        let err = draft.add("Fun", 40.0).unwrap_err();

        assert_eq!(err, DraftError::ExceedsTotal { percentage: 40.0 });
        assert_eq!(err.to_string(), "Adding 40.00% exceeds 100%. Try again.");
        assert_eq!(draft.total(), 70.0);
        assert_eq!(draft.shares().len(), 1);
    }

    #[test]
    fn test_single_category_boundaries() {
        let mut draft = BudgetDraft::new(1000.0, 1);
        assert!(draft.add("Everything", 100.01).is_err());
        assert_eq!(draft.total(), 0.0);

        assert!(draft.add("Everything", 100.0).is_ok());
        assert!(draft.is_complete());
    }

    #[test]
    fn test_entry_just_above_room_is_trimmed_to_fit() {
        let mut draft = BudgetDraft::new(1000.0, 1);

        let outcome = draft.add("Everything", 100.0000000001).unwrap();

        assert_eq!(outcome.percentage().value(), 100.0);
        assert_eq!(outcome.total(), 100.0);
        assert!(draft.shares().iter().all(|s| s.percentage.value() <= 100.0));
        assert!(draft.total() <= 100.0);
        assert!(draft.finish().unwrap().validate().is_ok());
    }

    #[test]
    fn test_entry_just_above_remaining_room_is_trimmed() {
        let mut draft = BudgetDraft::new(1000.0, 1);
        draft.add("Rent", 60.0).unwrap();

        let outcome = draft.add("Food", 40.0000000001).unwrap();

        assert_eq!(outcome.percentage().value(), 40.0);
        assert!(draft.total() <= 100.0);
        assert!(draft.is_complete());
    }

    #[test]
    fn test_tiny_entry_on_full_draft_is_rejected() {
        let mut draft = BudgetDraft::new(1000.0, 1);
        draft.add("Everything", 100.0).unwrap();

        assert!(matches!(
            draft.add("Crumbs", 1e-12),
            Err(DraftError::ExceedsTotal { .. })
        ));
        assert_eq!(draft.shares().len(), 1);
    }

    #[test]
    fn test_category_name() {
        assert_eq!(category_name("  Rent "), Ok("Rent"));
        assert_eq!(category_name("   "), Err(DraftError::EmptyName));
        assert_eq!(category_name(""), Err(DraftError::EmptyName));
    }

    #[test]
    fn test_decimal_percentages_complete() {
        let mut draft = BudgetDraft::new(1000.0, 1);
        draft.add("A", 33.3).unwrap();
        draft.add("B", 33.3).unwrap();
        draft.add("C", 33.4).unwrap();
        assert!(draft.finish().is_ok());
    }

    #[test]
    fn test_repeated_category_replaces_and_fixes_total() {
        let mut draft = BudgetDraft::new(1000.0, 1);
        draft.add("Rent", 40.0).unwrap();
        draft.add("Food", 10.0).unwrap();

        let outcome = draft.add("Rent", 30.0).unwrap();

        assert_eq!(
            outcome,
            AddOutcome::Replaced {
                previous: Percentage::new(40.0).unwrap(),
                percentage: Percentage::new(30.0).unwrap(),
                total: 40.0,
            }
        );
        assert_eq!(draft.shares().len(), 2);
        assert_eq!(draft.shares()[0].percentage.value(), 30.0);
    }

    #[test]
    fn test_repeated_category_still_checks_running_total() {
        let mut draft = BudgetDraft::new(1000.0, 1);
        draft.add("Rent", 60.0).unwrap();

        assert!(matches!(
            draft.add("Rent", 50.0),
            Err(DraftError::ExceedsTotal { .. })
        ));
        assert_eq!(draft.total(), 60.0);
    }

    #[test]
    fn test_invalid_entries() {
        let mut draft = BudgetDraft::new(1000.0, 1);
        assert_eq!(draft.add("  ", 10.0), Err(DraftError::EmptyName));
        assert_eq!(draft.add("Rent", 0.0), Err(DraftError::NotPositive));
        assert_eq!(draft.add("Rent", -5.0), Err(DraftError::NotPositive));
        assert!(draft.shares().is_empty());
    }

    #[test]
    fn test_category_names_are_trimmed() {
        let mut draft = BudgetDraft::new(1000.0, 1);
        draft.add(" Rent ", 50.0).unwrap();
        draft.add("Rent", 20.0).unwrap();
        assert_eq!(draft.shares().len(), 1);
        assert_eq!(draft.shares()[0].category, "Rent");
    }
}

//! Budget repository
//!
//! A user's budget is one row per category. Saving replaces every row of
//! the user inside a single transaction: either the whole new budget is
//! stored or the old one is left untouched.

use rusqlite::params;

use super::Database;
use crate::error::PaysplitError;
use crate::models::{Budget, BudgetEntry, UserId};

/// Repository for budget persistence
pub struct BudgetRepository {
    db: Database,
}

impl BudgetRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Delete all of a user's rows and insert the given budget
    ///
    /// Returns the number of rows that were replaced.
    pub fn replace_for_user(&self, user_id: UserId, budget: &Budget) -> Result<usize, PaysplitError> {
        let mut conn = self.db.connect()?;
        let tx = conn.transaction()?;

        let removed = tx.execute("DELETE FROM budgets WHERE user_id = ?1", [user_id])?;

        {
            let mut insert = tx.prepare(
                "INSERT INTO budgets (user_id, category, percentage, income, paychecks)
                    VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for share in &budget.shares {
                insert.execute(params![
                    user_id,
                    share.category,
                    share.percentage,
                    budget.income,
                    budget.paychecks,
                ])?;
            }
        }

        // Dropping `tx` without commit rolls back, so any `?` above leaves
        // the previous rows in place.
        tx.commit()?;
        Ok(removed)
    }

    /// All rows of a user, in the order they were saved
    pub fn entries_for_user(&self, user_id: UserId) -> Result<Vec<BudgetEntry>, PaysplitError> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(
            "SELECT category, percentage, income, paychecks
                FROM budgets
                WHERE user_id = ?1
                ORDER BY id",
        )?;

        let entries = stmt
            .query_map([user_id], |row| {
                Ok(BudgetEntry {
                    user_id,
                    category: row.get(0)?,
                    percentage: row.get(1)?,
                    income: row.get(2)?,
                    paychecks: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }
}

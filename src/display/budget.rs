//! Budget display formatting
//!
//! Formats budgets and allocations for terminal output. Dollar values are
//! rounded to cents here and nowhere else.

use crate::models::{Allocation, Budget, Money, UserId};

/// Summary printed after a budget has been entered
pub fn format_budget_summary(budget: &Budget, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("\n---- Budget Summary ----\n");
    output.push_str(&format!(
        "Monthly Income: {}\n",
        money(budget.income, currency_symbol)
    ));
    output.push_str(&format!("Paychecks Per Month: {}\n", budget.paychecks));
    output.push_str("\nCategory Allocations:\n");

    for share in &budget.shares {
        output.push_str(&format!(
            "{}: {} (Monthly: {}, Per Paycheck: {})\n",
            share.category,
            share.percentage,
            money(budget.monthly_allocation(share), currency_symbol),
            money(budget.per_paycheck_allocation(share), currency_symbol),
        ));
    }

    output
}

/// The stored budget of a user
pub fn format_budget_view(user_id: UserId, budget: &Budget, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("\n---- Current Budget ----\n");
    output.push_str(&format!("User ID: {}\n", user_id));
    output.push_str(&format!(
        "Monthly Income: {}\n",
        money(budget.income, currency_symbol)
    ));
    output.push_str(&format!("Paychecks Per Month: {}\n", budget.paychecks));
    output.push_str("\nCategory Allocations:\n");

    for share in &budget.shares {
        output.push_str(&format!(
            "{}: {} - {}\n",
            share.category,
            share.percentage,
            money(budget.monthly_allocation(share), currency_symbol),
        ));
    }

    output
}

/// An ad-hoc amount split across the stored percentages
pub fn format_allocation(amount: f64, allocations: &[Allocation], currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("\n---- Budget Allocation ----\n");
    output.push_str(&format!("Total Amount: {}\n", money(amount, currency_symbol)));
    output.push_str("\nCategory Allocations:\n");

    for allocation in allocations {
        output.push_str(&format!(
            "{}: {} - {}\n",
            allocation.category,
            allocation.percentage,
            money(allocation.amount, currency_symbol),
        ));
    }

    output
}

fn money(dollars: f64, currency_symbol: &str) -> String {
    Money::from_dollars(dollars).format_with_symbol(currency_symbol)
}

//! Portfolio-level expense aggregation.

use abone_domain::Subscription;

use crate::ExpenseCalculator;

/// Total monthly and annual cost across a record collection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExpenseSummary {
    pub total_monthly: f64,
    pub total_annual: f64,
}

impl ExpenseSummary {
    /// Sums per-record calculator outputs. An empty collection yields zeros.
    ///
    /// Recomputed in full after every mutation; with record counts in the
    /// tens there is nothing to gain from incremental maintenance.
    pub fn for_subscriptions(
        subscriptions: &[Subscription],
        calculator: &ExpenseCalculator,
    ) -> Self {
        subscriptions.iter().fold(Self::default(), |acc, sub| Self {
            total_monthly: acc.total_monthly + calculator.monthly_expense(sub),
            total_annual: acc.total_annual + calculator.annual_expense(sub),
        })
    }
}

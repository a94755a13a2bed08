//! Normalized expense figures for a single payment record.

use abone_domain::{BillingCycle, CurrencyRates, Subscription};

/// Converts one record into monthly and annual cost figures.
///
/// Pure arithmetic over the fixed [`CurrencyRates`]; records are expected to
/// already satisfy the domain invariants, so nothing here can fail.
#[derive(Debug, Clone, Default)]
pub struct ExpenseCalculator {
    rates: CurrencyRates,
}

impl ExpenseCalculator {
    pub fn new(rates: CurrencyRates) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &CurrencyRates {
        &self.rates
    }

    /// Price converted to the local unit, before any cycle adjustment.
    fn converted_price(&self, subscription: &Subscription) -> f64 {
        subscription.price * self.rates.factor(subscription.currency)
    }

    /// Ongoing monthly burn rate. `duration` is deliberately ignored here;
    /// a terminating payment still costs its full cycle amount each month
    /// while it runs.
    pub fn monthly_expense(&self, subscription: &Subscription) -> f64 {
        let amount = self.converted_price(subscription);
        match subscription.billing_cycle {
            BillingCycle::Monthly => amount,
            BillingCycle::Yearly => amount / 12.0,
            BillingCycle::Weekly => amount * 4.0,
        }
    }

    /// Annualized cost.
    ///
    /// A Monthly or Weekly record with a duration reports the total
    /// remaining obligation (`amount x duration`) rather than a true
    /// per-year figure, and a Yearly record ignores its duration entirely.
    /// Both quirks match the arithmetic the stored data was created
    /// against, so they are preserved rather than corrected.
    pub fn annual_expense(&self, subscription: &Subscription) -> f64 {
        let amount = self.converted_price(subscription);
        if let Some(duration) = subscription.duration {
            match subscription.billing_cycle {
                BillingCycle::Monthly | BillingCycle::Weekly => {
                    return amount * f64::from(duration);
                }
                BillingCycle::Yearly => {}
            }
        }
        match subscription.billing_cycle {
            BillingCycle::Monthly => amount * 12.0,
            BillingCycle::Weekly => amount * 52.0,
            BillingCycle::Yearly => amount,
        }
    }
}

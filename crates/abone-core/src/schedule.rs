//! Next-occurrence dates and days-remaining figures for the dashboard.

use abone_domain::Subscription;
use chrono::NaiveDate;

/// First charge date strictly after `today`, found by repeated cycle
/// advancement from the record's start date.
///
/// A start date equal to `today` advances a full cycle, so a payment is
/// never reported as due zero days ago on its own start day. A start date
/// already in the future is returned unchanged.
pub fn next_occurrence(subscription: &Subscription, today: NaiveDate) -> NaiveDate {
    let mut candidate = subscription.start_date;
    while candidate <= today {
        candidate = subscription.billing_cycle.advance(candidate);
    }
    candidate
}

/// Whole days from `today` until the next charge.
///
/// Both endpoints are date-precision values (midnight-normalized), so the
/// difference is an exact day count with no fractional-day artifacts. The
/// result is at least 1 whenever the start date is not in the future.
pub fn days_left(subscription: &Subscription, today: NaiveDate) -> i64 {
    (next_occurrence(subscription, today) - today).num_days()
}

pub fn is_urgent(days_left: i64, threshold: i64) -> bool {
    days_left <= threshold
}

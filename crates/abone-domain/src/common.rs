//! Billing cadences and calendar-cycle arithmetic.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
/// Enumerates the recurrence unit of a payment.
#[derive(Default)]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
    Weekly,
}

impl BillingCycle {
    /// Calculates the charge date one cycle after `from`.
    ///
    /// Month and year steps clamp the day-of-month to the length of the
    /// target month: Jan 31 advances to Feb 28 (Feb 29 in leap years), and
    /// a Feb 29 anniversary lands on Feb 28 in non-leap years.
    pub fn advance(self, from: NaiveDate) -> NaiveDate {
        match self {
            BillingCycle::Monthly => shift_month(from, 1),
            BillingCycle::Weekly => from + Duration::days(7),
            BillingCycle::Yearly => shift_year(from, 1),
        }
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BillingCycle::Monthly => "Monthly",
            BillingCycle::Yearly => "Yearly",
            BillingCycle::Weekly => "Weekly",
        };
        f.write_str(label)
    }
}

fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    let mut day = date.day();
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    day = day.min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap()
}

fn shift_year(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() + years;
    let day = date.day().min(days_in_month(year, date.month()));
    NaiveDate::from_ymd_opt(year, date.month(), day).unwrap()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}

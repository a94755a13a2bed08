use abone_core::schedule;
use chrono::NaiveDate;
use colored::Colorize;

use crate::cli::context::AppContext;

/// Renders the summary card followed by every payment, soonest charge
/// first.
pub fn render(context: &AppContext, today: NaiveDate) {
    let totals = context.book.totals();
    println!("{}", "=== Upcoming payments ===".bold());
    println!("Monthly expenses: {:.2} TL", totals.total_monthly);
    println!("Annual expenses:  {:.2} TL", totals.total_annual);
    println!();

    if context.book.is_empty() {
        println!("No payments tracked yet.");
        return;
    }

    let threshold = i64::from(context.config.urgency_days);
    for sub in context.book.sorted_by_next_occurrence(today) {
        let days = schedule::days_left(sub, today);
        let due = if days == 1 {
            "1 day left".to_string()
        } else {
            format!("{days} days left")
        };
        let due = if schedule::is_urgent(days, threshold) {
            due.red().bold()
        } else {
            due.normal()
        };

        let mut price = format!("{:.2} {}", sub.price, sub.currency);
        if let Some(duration) = sub.duration {
            price.push_str(&format!(" for {duration} payments"));
        }

        println!(
            "{:<28} {:<14} {:<26} {:<8} {}",
            sub.name.bold(),
            sub.category.dimmed(),
            price,
            sub.billing_cycle.to_string(),
            due
        );
    }
}

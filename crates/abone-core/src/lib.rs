//! abone-core
//!
//! Business logic for the payment tracker: expense normalization, payment
//! scheduling, portfolio aggregation, and the cached subscription book.
//! Depends on abone-domain. No CLI, no terminal I/O, no direct filesystem
//! access.

pub mod book;
pub mod error;
pub mod expense;
pub mod schedule;
pub mod storage;
pub mod summary;
pub mod time;

pub use book::SubscriptionBook;
pub use error::CoreError;
pub use expense::ExpenseCalculator;
pub use schedule::{days_left, is_urgent, next_occurrence};
pub use storage::SubscriptionStore;
pub use summary::ExpenseSummary;
pub use time::Clock;

//! abone-domain
//!
//! Pure domain models for recurring payments (Subscription, Currency,
//! BillingCycle, category forms). No I/O, no CLI, no storage. Only data
//! types and the validation boundary.

pub mod common;
pub mod currency;
pub mod form;
pub mod subscription;

pub use common::*;
pub use currency::*;
pub use form::*;
pub use subscription::*;

//! The persisted payment record and its validation boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::{BillingCycle, Currency};

/// Sentinel icon identifier used when a record carries no explicit image.
pub const DEFAULT_ICON: &str = "default";

/// A single recurring payment as stored in the record store.
///
/// Field names in the serialized form match the original table columns, so
/// records written by earlier builds keep loading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subscription {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub currency: Currency,
    #[serde(rename = "billingCycle")]
    pub billing_cycle: BillingCycle,
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

impl Subscription {
    /// Creates a record with a fresh unique id, no icon, and no duration.
    pub fn new(
        name: impl Into<String>,
        price: f64,
        currency: Currency,
        billing_cycle: BillingCycle,
        start_date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            price,
            currency,
            billing_cycle,
            start_date,
            category: category.into(),
            image: None,
            duration: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Icon identifier for display; falls back to the `"default"` sentinel.
    pub fn icon(&self) -> &str {
        self.image.as_deref().unwrap_or(DEFAULT_ICON)
    }

    /// True when the payment ends after a known number of cycles.
    pub fn is_terminating(&self) -> bool {
        self.duration.is_some()
    }

    /// Checks the record invariants before it may be persisted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !self.price.is_finite() {
            return Err(ValidationError::NonFinitePrice);
        }
        if self.price < 0.0 {
            return Err(ValidationError::NegativePrice);
        }
        if self.duration == Some(0) {
            return Err(ValidationError::ZeroDuration);
        }
        Ok(())
    }
}

/// Malformed or missing user input, caught before anything is persisted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name cannot be empty")]
    EmptyName,
    #[error("price must be a non-negative number")]
    NegativePrice,
    #[error("price must be a finite number")]
    NonFinitePrice,
    #[error("duration must cover at least one cycle")]
    ZeroDuration,
}

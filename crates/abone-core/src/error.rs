use abone_domain::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Subscription not found: {0}")]
    SubscriptionNotFound(String),
    #[error("Subscription already exists: {0}")]
    DuplicateSubscription(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}

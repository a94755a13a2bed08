//! Persistence contract consumed by the subscription book.

use abone_domain::Subscription;

use crate::CoreError;

/// Abstraction over the durable row store holding subscription records.
///
/// Implementations serve a single local user from a single process. Each
/// operation completes before the caller reads refreshed state; there are no
/// cross-record transactions, no locking, and no retry semantics.
pub trait SubscriptionStore: Send + Sync {
    /// Persists a new record. Fails if the id is already present.
    fn insert(&self, subscription: &Subscription) -> Result<(), CoreError>;

    /// Returns every stored record. Order is not meaningful; callers
    /// re-sort by computed next occurrence where needed.
    fn select_all(&self) -> Result<Vec<Subscription>, CoreError>;

    /// Replaces the record with a matching id in full. Fails if the id is
    /// unknown.
    fn update(&self, subscription: &Subscription) -> Result<(), CoreError>;

    /// Removes the record with the given id. Unknown ids are a no-op.
    fn delete_by_id(&self, id: &str) -> Result<(), CoreError>;

    /// Removes every stored record.
    fn clear(&self) -> Result<(), CoreError>;
}

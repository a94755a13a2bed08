//! The cached, in-memory view of the stored records plus derived totals.

use abone_domain::Subscription;
use chrono::NaiveDate;

use crate::{schedule, CoreError, ExpenseCalculator, ExpenseSummary, SubscriptionStore};

/// Owns the record store, the cached collection, and the aggregate totals
/// the dashboard renders from.
///
/// The book is an explicit context object held by the composition root and
/// passed by reference to UI code; there is no ambient global state. Every
/// mutation persists first and only then touches the cache, so a storage
/// failure never leaves the UI looking at state that was not written.
pub struct SubscriptionBook {
    store: Box<dyn SubscriptionStore>,
    calculator: ExpenseCalculator,
    subscriptions: Vec<Subscription>,
    totals: ExpenseSummary,
}

impl SubscriptionBook {
    /// Creates an empty book; call [`load`](Self::load) to fill the cache.
    pub fn new(store: Box<dyn SubscriptionStore>, calculator: ExpenseCalculator) -> Self {
        Self {
            store,
            calculator,
            subscriptions: Vec::new(),
            totals: ExpenseSummary::default(),
        }
    }

    /// Fetches every record from the store and recomputes the totals.
    pub fn load(&mut self) -> Result<(), CoreError> {
        self.subscriptions = self.store.select_all()?;
        self.recompute_totals();
        Ok(())
    }

    /// Validates and persists a new record, then refreshes the cache.
    pub fn add(&mut self, subscription: Subscription) -> Result<(), CoreError> {
        subscription.validate()?;
        self.store.insert(&subscription)?;
        tracing::info!(id = %subscription.id, name = %subscription.name, "subscription added");
        self.subscriptions.push(subscription);
        self.recompute_totals();
        Ok(())
    }

    /// Replaces a stored record in full, then refreshes the cache.
    pub fn update(&mut self, subscription: Subscription) -> Result<(), CoreError> {
        subscription.validate()?;
        self.store.update(&subscription)?;
        tracing::info!(id = %subscription.id, "subscription updated");
        match self
            .subscriptions
            .iter_mut()
            .find(|existing| existing.id == subscription.id)
        {
            Some(slot) => *slot = subscription,
            None => self.subscriptions.push(subscription),
        }
        self.recompute_totals();
        Ok(())
    }

    /// Deletes a record by id, then refreshes the cache.
    pub fn remove(&mut self, id: &str) -> Result<(), CoreError> {
        self.store.delete_by_id(id)?;
        tracing::info!(id, "subscription removed");
        self.subscriptions.retain(|existing| existing.id != id);
        self.recompute_totals();
        Ok(())
    }

    /// Wipes the store and the cache.
    pub fn clear(&mut self) -> Result<(), CoreError> {
        self.store.clear()?;
        tracing::info!("subscription store cleared");
        self.subscriptions.clear();
        self.recompute_totals();
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Subscription> {
        self.subscriptions.iter().find(|sub| sub.id == id)
    }

    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    pub fn totals(&self) -> ExpenseSummary {
        self.totals
    }

    pub fn total_monthly_expenses(&self) -> f64 {
        self.totals.total_monthly
    }

    pub fn total_annual_expenses(&self) -> f64 {
        self.totals.total_annual
    }

    pub fn calculator(&self) -> &ExpenseCalculator {
        &self.calculator
    }

    /// Cached records ordered by how soon the next charge falls due.
    pub fn sorted_by_next_occurrence(&self, today: NaiveDate) -> Vec<&Subscription> {
        let mut rows: Vec<&Subscription> = self.subscriptions.iter().collect();
        rows.sort_by_key(|sub| schedule::next_occurrence(sub, today));
        rows
    }

    fn recompute_totals(&mut self) {
        self.totals = ExpenseSummary::for_subscriptions(&self.subscriptions, &self.calculator);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abone_domain::{BillingCycle, Currency, ValidationError};
    use std::sync::Mutex;

    /// In-memory store double with a switchable failure mode.
    #[derive(Default)]
    struct MemoryStore {
        rows: Mutex<Vec<Subscription>>,
        fail_writes: bool,
    }

    impl MemoryStore {
        fn failing() -> Self {
            Self {
                rows: Mutex::new(Vec::new()),
                fail_writes: true,
            }
        }

        fn guard(&self) -> Result<(), CoreError> {
            if self.fail_writes {
                Err(CoreError::Storage("disk unavailable".into()))
            } else {
                Ok(())
            }
        }
    }

    impl SubscriptionStore for MemoryStore {
        fn insert(&self, subscription: &Subscription) -> Result<(), CoreError> {
            self.guard()?;
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|row| row.id == subscription.id) {
                return Err(CoreError::DuplicateSubscription(subscription.id.clone()));
            }
            rows.push(subscription.clone());
            Ok(())
        }

        fn select_all(&self) -> Result<Vec<Subscription>, CoreError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        fn update(&self, subscription: &Subscription) -> Result<(), CoreError> {
            self.guard()?;
            let mut rows = self.rows.lock().unwrap();
            match rows.iter_mut().find(|row| row.id == subscription.id) {
                Some(row) => {
                    *row = subscription.clone();
                    Ok(())
                }
                None => Err(CoreError::SubscriptionNotFound(subscription.id.clone())),
            }
        }

        fn delete_by_id(&self, id: &str) -> Result<(), CoreError> {
            self.guard()?;
            self.rows.lock().unwrap().retain(|row| row.id != id);
            Ok(())
        }

        fn clear(&self) -> Result<(), CoreError> {
            self.guard()?;
            self.rows.lock().unwrap().clear();
            Ok(())
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(name: &str, price: f64, start: NaiveDate) -> Subscription {
        Subscription::new(
            name,
            price,
            Currency::Local,
            BillingCycle::Monthly,
            start,
            "Entertainment",
        )
    }

    fn book() -> SubscriptionBook {
        SubscriptionBook::new(Box::<MemoryStore>::default(), ExpenseCalculator::default())
    }

    #[test]
    fn add_persists_and_recomputes_totals() {
        let mut book = book();
        book.add(record("Netflix", 100.0, date(2024, 1, 1))).unwrap();
        book.add(record("Spotify", 50.0, date(2024, 1, 5))).unwrap();
        assert_eq!(book.total_monthly_expenses(), 150.0);
        assert_eq!(book.total_annual_expenses(), 1800.0);
        assert_eq!(book.subscriptions().len(), 2);
    }

    #[test]
    fn load_reflects_the_stored_rows() {
        let store = MemoryStore::default();
        store.insert(&record("Gym", 300.0, date(2024, 2, 1))).unwrap();
        let mut book = SubscriptionBook::new(Box::new(store), ExpenseCalculator::default());
        assert!(book.is_empty());
        book.load().unwrap();
        assert_eq!(book.subscriptions().len(), 1);
        assert_eq!(book.total_monthly_expenses(), 300.0);
    }

    #[test]
    fn update_replaces_the_record_in_full() {
        let mut book = book();
        let original = record("Netflix", 100.0, date(2024, 1, 1));
        let id = original.id.clone();
        book.add(original).unwrap();

        let mut changed = book.get(&id).unwrap().clone();
        changed.price = 130.0;
        book.update(changed).unwrap();

        assert_eq!(book.get(&id).unwrap().price, 130.0);
        assert_eq!(book.total_monthly_expenses(), 130.0);
    }

    #[test]
    fn update_can_reprice_currency_and_toggle_duration() {
        let mut book = book();
        let mut sub = record("iCloud", 10.0, date(2024, 1, 1));
        sub.currency = Currency::Usd;
        let id = sub.id.clone();
        book.add(sub).unwrap();
        assert_eq!(book.total_monthly_expenses(), 340.0);

        // Back to the local unit, and an open-ended record gains a payment count.
        let mut changed = book.get(&id).unwrap().clone();
        changed.currency = Currency::Local;
        changed.duration = Some(6);
        book.update(changed).unwrap();

        let stored = book.get(&id).unwrap();
        assert_eq!(stored.currency, Currency::Local);
        assert_eq!(stored.duration, Some(6));
        assert_eq!(book.total_monthly_expenses(), 10.0);
        assert_eq!(book.total_annual_expenses(), 60.0);

        // And the duration can be cleared again.
        let mut reverted = book.get(&id).unwrap().clone();
        reverted.duration = None;
        book.update(reverted).unwrap();
        assert_eq!(book.get(&id).unwrap().duration, None);
        assert_eq!(book.total_annual_expenses(), 120.0);
    }

    #[test]
    fn remove_drops_the_record_and_its_cost() {
        let mut book = book();
        let sub = record("Netflix", 100.0, date(2024, 1, 1));
        let id = sub.id.clone();
        book.add(sub).unwrap();
        book.remove(&id).unwrap();
        assert!(book.is_empty());
        assert_eq!(book.totals(), ExpenseSummary::default());
    }

    #[test]
    fn failed_write_leaves_cache_and_totals_untouched() {
        let mut book =
            SubscriptionBook::new(Box::new(MemoryStore::failing()), ExpenseCalculator::default());
        let err = book
            .add(record("Netflix", 100.0, date(2024, 1, 1)))
            .unwrap_err();
        assert!(matches!(err, CoreError::Storage(_)));
        assert!(book.is_empty());
        assert_eq!(book.totals(), ExpenseSummary::default());
    }

    #[test]
    fn invalid_record_is_rejected_before_the_store_sees_it() {
        let mut book = book();
        let err = book
            .add(record("", 10.0, date(2024, 1, 1)))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::EmptyName)
        ));
        assert!(book.is_empty());
    }

    #[test]
    fn rows_sort_by_soonest_next_charge() {
        let mut book = book();
        let today = date(2024, 6, 20);
        // Due July 1.
        let far = record("Rent", 1000.0, date(2024, 1, 1));
        // Due June 25.
        let soon = record("Netflix", 100.0, date(2024, 5, 25));
        book.add(far).unwrap();
        book.add(soon).unwrap();
        let sorted = book.sorted_by_next_occurrence(today);
        assert_eq!(sorted[0].name, "Netflix");
        assert_eq!(sorted[1].name, "Rent");
    }
}

//! Read-only lookups. No transaction is opened.

use std::sync::Arc;

use tracing::{debug, error, warn};

use super::run_blocking;
use crate::domain::ScoreRecord;
use crate::error::{Error, Result};
use crate::port::outbound::store::ScoreStore;

/// Query score records.
pub struct QueryService<S> {
    store: Arc<S>,
}

impl<S> Clone for QueryService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ScoreStore> QueryService<S> {
    /// Create a query service over the given store.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Every record in insertion order.
    ///
    /// # Errors
    /// Store errors.
    pub async fn all(&self) -> Result<Vec<ScoreRecord>> {
        let result = run_blocking(&self.store, |store| store.read(|r| r.all())).await;
        log_failure("all", &result);
        result
    }

    /// The record named exactly `name`.
    ///
    /// # Errors
    /// [`Error::NotFound`] when no record matches, or a store error.
    pub async fn by_name(&self, name: String) -> Result<ScoreRecord> {
        let result = run_blocking(&self.store, move |store| {
            store
                .read(|r| r.by_name(&name))?
                .ok_or(Error::NotFound { name })
        })
        .await;
        log_failure("by_name", &result);
        result
    }

    /// Records whose name contains `fragment`.
    ///
    /// # Errors
    /// Store errors.
    pub async fn search(&self, fragment: String) -> Result<Vec<ScoreRecord>> {
        let result = run_blocking(&self.store, move |store| {
            store.read(|r| r.search(&fragment))
        })
        .await;
        log_failure("search", &result);

        let records = result?;
        debug!(hits = records.len(), "Searched by name");
        Ok(records)
    }
}

fn log_failure<T>(op: &'static str, result: &Result<T>) {
    match result {
        Ok(_) => {}
        Err(Error::NotFound { name }) => warn!(op, name = %name, "Lookup matched no record"),
        Err(e) => error!(op, code = e.code(), error = %e, "Query failed"),
    }
}

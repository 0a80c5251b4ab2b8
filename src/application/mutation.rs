//! Mutation service.
//!
//! Every mutation follows the same protocol inside one store transaction:
//!
//! 1. apply the insert/update/delete
//! 2. recompute every record's rank
//! 3. re-read the full table
//!
//! and commits only if all three succeed. Inputs arrive as validated domain
//! types, so invalid input is rejected before a transaction is opened.
//!
//! Dropping a mutation future (a client disconnect, a timeout) rolls the
//! transaction back unless it has already committed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{error, info, warn};

use super::run_blocking;
use crate::domain::{NewScoreRecord, RecordId, ScoreRecord, ScoreUpdate};
use crate::error::{Error, Result};
use crate::port::outbound::store::{ScoreStore, ScoreWriter};

/// Result of a committed mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    /// Rows touched by the mutation itself.
    pub affected: usize,
    /// Identifier assigned by an insert.
    pub inserted: Option<RecordId>,
    /// Full table, read after ranks were recomputed, inside the same transaction.
    pub records: Vec<ScoreRecord>,
}

/// Insert, update and delete score records with rank maintenance.
pub struct MutationService<S> {
    store: Arc<S>,
}

impl<S> Clone for MutationService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ScoreStore> MutationService<S> {
    /// Create a mutation service over the given store.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Insert a record.
    ///
    /// # Errors
    /// [`Error::ConstraintViolation`] if the name is already taken,
    /// [`Error::RankRecompute`] or a store error otherwise, and
    /// [`Error::Cancelled`] if the future was dropped before commit. Nothing
    /// is committed on error.
    pub async fn insert(&self, record: NewScoreRecord) -> Result<MutationOutcome> {
        let name = record.name.clone();
        let result = transact(&self.store, move |tx| {
            let id = tx.insert(&record)?;
            let records = rerank_and_reload(tx)?;
            Ok(MutationOutcome {
                affected: 1,
                inserted: Some(id),
                records,
            })
        })
        .await;

        log_outcome("insert", &name, &result);
        result
    }

    /// Update the score (and any patched location fields) of the record
    /// matching `update.name`.
    ///
    /// # Errors
    /// [`Error::NotFound`] if no record has that name; the transaction is
    /// rolled back. Store and rank errors as for [`Self::insert`].
    pub async fn update(&self, update: ScoreUpdate) -> Result<MutationOutcome> {
        let name = update.name.clone();
        let result = transact(&self.store, move |tx| {
            let affected = tx.update_by_name(&update)?;
            if affected == 0 {
                return Err(Error::NotFound {
                    name: update.name.clone(),
                });
            }
            let records = rerank_and_reload(tx)?;
            Ok(MutationOutcome {
                affected,
                inserted: None,
                records,
            })
        })
        .await;

        log_outcome("update", &name, &result);
        result
    }

    /// Delete every record matching `name`.
    ///
    /// A missing name is not an error: zero rows are affected and ranks are
    /// recomputed over the unchanged table.
    ///
    /// # Errors
    /// Store and rank errors as for [`Self::insert`].
    pub async fn delete(&self, name: String) -> Result<MutationOutcome> {
        let target = name.clone();
        let result = transact(&self.store, move |tx| {
            let affected = tx.delete_by_name(&target)?;
            let records = rerank_and_reload(tx)?;
            Ok(MutationOutcome {
                affected,
                inserted: None,
                records,
            })
        })
        .await;

        log_outcome("delete", &name, &result);
        result
    }

    /// Recompute ranks without mutating any record.
    ///
    /// # Errors
    /// [`Error::RankRecompute`] or a store error.
    pub async fn rerank(&self) -> Result<Vec<ScoreRecord>> {
        let result = transact(&self.store, rerank_and_reload).await;

        match &result {
            Ok(records) => info!(records = records.len(), "Recomputed ranks"),
            Err(e) => warn!(error = %e, "Rank recompute failed"),
        }
        result
    }
}

/// Sets the shared flag when dropped.
struct CancelOnDrop(Arc<AtomicBool>);

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        self.0.store(true, Ordering::Release);
    }
}

/// Run `f` in a store transaction on the blocking pool.
///
/// If the returned future is dropped before `f` finishes, the transaction
/// returns [`Error::Cancelled`] instead of committing.
async fn transact<S, T, F>(store: &Arc<S>, f: F) -> Result<T>
where
    S: ScoreStore,
    T: Send + 'static,
    F: FnOnce(&mut dyn ScoreWriter) -> Result<T> + Send + 'static,
{
    let cancelled = Arc::new(AtomicBool::new(false));
    let _guard = CancelOnDrop(Arc::clone(&cancelled));

    run_blocking(store, move |store| {
        store.transaction(|tx| {
            let output = f(tx)?;
            if cancelled.load(Ordering::Acquire) {
                warn!("Request dropped before commit; rolling back");
                return Err(Error::Cancelled);
            }
            Ok(output)
        })
    })
    .await
}

/// Steps 2 and 3 of the mutation protocol.
fn rerank_and_reload(tx: &mut dyn ScoreWriter) -> Result<Vec<ScoreRecord>> {
    tx.recompute_ranks()?;
    tx.all()
}

fn log_outcome(op: &'static str, name: &str, result: &Result<MutationOutcome>) {
    match result {
        Ok(outcome) => info!(op, name, affected = outcome.affected, "Mutation committed"),
        Err(Error::NotFound { .. }) => warn!(op, name, "Mutation matched no record"),
        Err(Error::ConstraintViolation(e)) => {
            warn!(op, name, error = %e, "Mutation violated a constraint; rolled back");
        }
        Err(e) => error!(op, name, code = e.code(), error = %e, "Mutation failed; rolled back"),
    }
}

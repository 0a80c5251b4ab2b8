//! Persistence port for score records.
//!
//! Store calls are blocking. Callers on an async runtime move them onto a
//! blocking thread (see [`crate::application`]).

use crate::domain::{NewScoreRecord, RecordId, ScoreRecord, ScoreUpdate};
use crate::error::Result;

/// Read-only lookups against the record table.
pub trait ScoreReader {
    /// Every record in insertion order.
    fn all(&mut self) -> Result<Vec<ScoreRecord>>;

    /// The record with exactly this name, if any.
    fn by_name(&mut self, name: &str) -> Result<Option<ScoreRecord>>;

    /// Records whose name contains `fragment`, in insertion order.
    ///
    /// Matching follows the store's default collation. Wildcard characters
    /// in `fragment` match literally.
    fn search(&mut self, fragment: &str) -> Result<Vec<ScoreRecord>>;
}

/// Mutations; only available inside [`ScoreStore::transaction`].
pub trait ScoreWriter: ScoreReader {
    /// Insert a record; the store assigns id and timestamps.
    fn insert(&mut self, record: &NewScoreRecord) -> Result<RecordId>;

    /// Set score, pass flag, patched location fields and `updated_at` on
    /// every record matching the name. Returns rows affected.
    fn update_by_name(&mut self, update: &ScoreUpdate) -> Result<usize>;

    /// Delete every record matching the name. Returns rows affected.
    fn delete_by_name(&mut self, name: &str) -> Result<usize>;

    /// Reassign every record's rank as the dense rank of its score,
    /// highest first.
    fn recompute_ranks(&mut self) -> Result<()>;
}

/// A transactional score store shared across request handlers.
pub trait ScoreStore: Send + Sync + 'static {
    /// Run read-only queries outside any explicit transaction.
    fn read<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut dyn ScoreReader) -> Result<T>;

    /// Run `f` in a single transaction.
    ///
    /// Commits when `f` returns `Ok`; rolls back every change made through
    /// the writer when it returns `Err`, and hands that error back.
    fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut dyn ScoreWriter) -> Result<T>;
}

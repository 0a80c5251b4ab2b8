//! In-memory store implementation for testing.
//!
//! Transactions work on a copy of the table and swap it in on success, so a
//! failed transaction leaves the committed state untouched, matching the
//! SQLite adapter's rollback behavior.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use parking_lot::RwLock;

use crate::domain::{dense_ranks, NewScoreRecord, RecordId, ScoreRecord, ScoreUpdate};
use crate::error::{Error, Result};
use crate::port::outbound::store::{ScoreReader, ScoreStore, ScoreWriter};

#[derive(Debug, Clone, Default)]
struct MemoryTable {
    rows: Vec<ScoreRecord>,
    last_id: i32,
}

impl MemoryTable {
    fn all(&self) -> Vec<ScoreRecord> {
        self.rows.clone()
    }

    fn by_name(&self, name: &str) -> Option<ScoreRecord> {
        self.rows.iter().find(|r| r.name == name).cloned()
    }

    /// ASCII case-insensitive, like SQLite's default `LIKE`.
    fn search(&self, fragment: &str) -> Vec<ScoreRecord> {
        let needle = fragment.to_ascii_lowercase();
        self.rows
            .iter()
            .filter(|r| r.name.to_ascii_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

/// In-memory score store for testing purposes.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    table: RwLock<MemoryTable>,
    fail_rank_recompute: AtomicBool,
}

impl MemoryScoreStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent rank recompute fail (or succeed again).
    pub fn set_fail_rank_recompute(&self, fail: bool) {
        self.fail_rank_recompute.store(fail, Ordering::SeqCst);
    }
}

impl ScoreStore for MemoryScoreStore {
    fn read<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut dyn ScoreReader) -> Result<T>,
    {
        let table = self.table.read();
        f(&mut TableView(&table))
    }

    fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut dyn ScoreWriter) -> Result<T>,
    {
        // Writers hold the lock for the whole transaction.
        let mut committed = self.table.write();
        let mut working = committed.clone();
        let out = f(&mut TableTx {
            table: &mut working,
            fail_rank_recompute: self.fail_rank_recompute.load(Ordering::SeqCst),
        })?;
        *committed = working;
        Ok(out)
    }
}

struct TableView<'a>(&'a MemoryTable);

impl ScoreReader for TableView<'_> {
    fn all(&mut self) -> Result<Vec<ScoreRecord>> {
        Ok(self.0.all())
    }

    fn by_name(&mut self, name: &str) -> Result<Option<ScoreRecord>> {
        Ok(self.0.by_name(name))
    }

    fn search(&mut self, fragment: &str) -> Result<Vec<ScoreRecord>> {
        Ok(self.0.search(fragment))
    }
}

struct TableTx<'a> {
    table: &'a mut MemoryTable,
    fail_rank_recompute: bool,
}

impl ScoreReader for TableTx<'_> {
    fn all(&mut self) -> Result<Vec<ScoreRecord>> {
        Ok(self.table.all())
    }

    fn by_name(&mut self, name: &str) -> Result<Option<ScoreRecord>> {
        Ok(self.table.by_name(name))
    }

    fn search(&mut self, fragment: &str) -> Result<Vec<ScoreRecord>> {
        Ok(self.table.search(fragment))
    }
}

impl ScoreWriter for TableTx<'_> {
    fn insert(&mut self, record: &NewScoreRecord) -> Result<RecordId> {
        if self.table.rows.iter().any(|r| r.name == record.name) {
            return Err(Error::ConstraintViolation(
                "UNIQUE constraint failed: sat_scores.name".to_string(),
            ));
        }

        self.table.last_id += 1;
        let id = RecordId::new(self.table.last_id);
        let now = Utc::now();
        self.table.rows.push(ScoreRecord {
            id,
            name: record.name.clone(),
            address: record.location.address.clone(),
            city: record.location.city.clone(),
            country: record.location.country.clone(),
            pincode: record.location.pincode.clone(),
            score: record.score,
            passed: record.passed(),
            rank: 0,
            created_at: now,
            updated_at: now,
        });
        Ok(id)
    }

    fn update_by_name(&mut self, update: &ScoreUpdate) -> Result<usize> {
        let now = Utc::now();
        let mut affected = 0;
        for row in self.table.rows.iter_mut().filter(|r| r.name == update.name) {
            row.score = update.score;
            row.passed = update.passed();
            if let Some(address) = &update.location.address {
                row.address.clone_from(address);
            }
            if let Some(city) = &update.location.city {
                row.city.clone_from(city);
            }
            if let Some(country) = &update.location.country {
                row.country.clone_from(country);
            }
            if let Some(pincode) = &update.location.pincode {
                row.pincode.clone_from(pincode);
            }
            row.updated_at = now;
            affected += 1;
        }
        Ok(affected)
    }

    fn delete_by_name(&mut self, name: &str) -> Result<usize> {
        let before = self.table.rows.len();
        self.table.rows.retain(|r| r.name != name);
        Ok(before - self.table.rows.len())
    }

    fn recompute_ranks(&mut self) -> Result<()> {
        if self.fail_rank_recompute {
            return Err(Error::RankRecompute("injected failure".to_string()));
        }

        let scores: Vec<_> = self.table.rows.iter().map(|r| r.score).collect();
        for (row, rank) in self.table.rows.iter_mut().zip(dense_ranks(&scores)) {
            row.rank = rank;
        }
        Ok(())
    }
}

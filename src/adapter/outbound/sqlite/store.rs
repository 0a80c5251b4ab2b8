//! SQLite score store implementation.
//!
//! Provides persistent storage for score records using SQLite and Diesel ORM.
//! Ranks are maintained by a single `DENSE_RANK()` window-function update
//! that runs inside the caller's transaction.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::{NewScoreRow, ScoreChangeset, ScoreRow};
use crate::adapter::outbound::sqlite::database::schema::sat_scores;
use crate::domain::{NewScoreRecord, RecordId, Score, ScoreRecord, ScoreUpdate};
use crate::error::{Error, Result};
use crate::port::outbound::store::{ScoreReader, ScoreStore, ScoreWriter};

/// Recompute every row's rank in one statement.
const RECOMPUTE_RANKS: &str = r#"
UPDATE sat_scores
SET "rank" = ranked.dense_rank
FROM (
    SELECT id, DENSE_RANK() OVER (ORDER BY sat_score DESC) AS dense_rank
    FROM sat_scores
) AS ranked
WHERE ranked.id = sat_scores.id
"#;

/// Character used to escape `LIKE` wildcards in search fragments.
const LIKE_ESCAPE: char = '\\';

#[derive(QueryableByName)]
struct LastInsertRowId {
    #[diesel(sql_type = diesel::sql_types::Integer)]
    #[diesel(column_name = "id")]
    id: i32,
}

/// SQLite-backed score store.
///
/// Implements the [`ScoreStore`] trait. Cheap to share behind an `Arc`;
/// each call checks a connection out of the pool.
pub struct SqliteScoreStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteScoreStore {
    /// Create a new SQLite score store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn connection(
        &self,
    ) -> Result<diesel::r2d2::PooledConnection<diesel::r2d2::ConnectionManager<SqliteConnection>>>
    {
        self.pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))
    }
}

impl ScoreStore for SqliteScoreStore {
    fn read<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut dyn ScoreReader) -> Result<T>,
    {
        let mut conn = self.connection()?;
        f(&mut SqliteSession { conn: &mut conn })
    }

    fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut dyn ScoreWriter) -> Result<T>,
    {
        let mut conn = self.connection()?;
        // IMMEDIATE takes the write lock up front so concurrent writers wait
        // on busy_timeout instead of failing on lock upgrade.
        conn.immediate_transaction::<T, Error, _>(|conn| f(&mut SqliteSession { conn }))
    }
}

/// One connection, possibly inside a transaction.
struct SqliteSession<'a> {
    conn: &'a mut SqliteConnection,
}

impl ScoreReader for SqliteSession<'_> {
    fn all(&mut self) -> Result<Vec<ScoreRecord>> {
        let rows: Vec<ScoreRow> = sat_scores::table
            .select(ScoreRow::as_select())
            .order(sat_scores::id.asc())
            .load(self.conn)?;

        rows.into_iter().map(from_row).collect()
    }

    fn by_name(&mut self, name: &str) -> Result<Option<ScoreRecord>> {
        let row: Option<ScoreRow> = sat_scores::table
            .select(ScoreRow::as_select())
            .filter(sat_scores::name.eq(name))
            .order(sat_scores::id.asc())
            .first(self.conn)
            .optional()?;

        row.map(from_row).transpose()
    }

    fn search(&mut self, fragment: &str) -> Result<Vec<ScoreRecord>> {
        let pattern = format!("%{}%", escape_like(fragment));
        let rows: Vec<ScoreRow> = sat_scores::table
            .select(ScoreRow::as_select())
            .filter(sat_scores::name.like(pattern).escape(LIKE_ESCAPE))
            .order(sat_scores::id.asc())
            .load(self.conn)?;

        rows.into_iter().map(from_row).collect()
    }
}

impl ScoreWriter for SqliteSession<'_> {
    fn insert(&mut self, record: &NewScoreRecord) -> Result<RecordId> {
        let row = NewScoreRow {
            name: &record.name,
            address: &record.location.address,
            city: &record.location.city,
            country: &record.location.country,
            pincode: &record.location.pincode,
            sat_score: i32::from(record.score.value()),
            passed: record.passed(),
        };

        diesel::insert_into(sat_scores::table)
            .values(&row)
            .execute(self.conn)?;

        let id = diesel::sql_query("SELECT last_insert_rowid() AS id")
            .get_result::<LastInsertRowId>(self.conn)?
            .id;

        debug!(id, name = %record.name, "Inserted score row");
        Ok(RecordId::new(id))
    }

    fn update_by_name(&mut self, update: &ScoreUpdate) -> Result<usize> {
        let changes = ScoreChangeset {
            sat_score: i32::from(update.score.value()),
            passed: update.passed(),
            address: update.location.address.as_deref(),
            city: update.location.city.as_deref(),
            country: update.location.country.as_deref(),
            pincode: update.location.pincode.as_deref(),
        };

        let affected = diesel::update(sat_scores::table.filter(sat_scores::name.eq(&update.name)))
            .set((changes, sat_scores::updated_at.eq(diesel::dsl::now)))
            .execute(self.conn)?;

        Ok(affected)
    }

    fn delete_by_name(&mut self, name: &str) -> Result<usize> {
        let affected = diesel::delete(sat_scores::table.filter(sat_scores::name.eq(name)))
            .execute(self.conn)?;

        Ok(affected)
    }

    fn recompute_ranks(&mut self) -> Result<()> {
        let ranked = diesel::sql_query(RECOMPUTE_RANKS)
            .execute(self.conn)
            .map_err(|e| Error::RankRecompute(e.to_string()))?;

        debug!(rows = ranked, "Recomputed ranks");
        Ok(())
    }
}

fn from_row(row: ScoreRow) -> Result<ScoreRecord> {
    let score = Score::try_new(i64::from(row.sat_score))
        .map_err(|e| Error::Database(format!("row {}: {e}", row.id)))?;
    let rank = u32::try_from(row.rank)
        .map_err(|_| Error::Database(format!("row {}: negative rank {}", row.id, row.rank)))?;

    Ok(ScoreRecord {
        id: RecordId::new(row.id),
        name: row.name,
        address: row.address,
        city: row.city,
        country: row.country,
        pincode: row.pincode,
        score,
        passed: row.passed,
        rank,
        created_at: row.created_at.and_utc(),
        updated_at: row.updated_at.and_utc(),
    })
}

/// Escape `LIKE` wildcards so the fragment matches literally.
fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

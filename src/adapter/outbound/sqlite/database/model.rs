//! Database model types for Diesel ORM.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use super::schema::sat_scores;

/// Database row for a score record (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = sat_scores)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ScoreRow {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub pincode: String,
    pub sat_score: i32,
    pub passed: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub rank: i32,
}

/// Database row for a score record (insertable).
///
/// `id`, `rank` and both timestamps come from column defaults.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = sat_scores)]
pub struct NewScoreRow<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub city: &'a str,
    pub country: &'a str,
    pub pincode: &'a str,
    pub sat_score: i32,
    pub passed: bool,
}

/// Column changes applied by an update; `None` fields are left untouched.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = sat_scores)]
pub struct ScoreChangeset<'a> {
    pub sat_score: i32,
    pub passed: bool,
    pub address: Option<&'a str>,
    pub city: Option<&'a str>,
    pub country: Option<&'a str>,
    pub pincode: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::sqlite::database::connection::{
        create_pool, run_migrations, PoolOptions,
    };

    fn new_row(name: &str, score: i32) -> NewScoreRow<'_> {
        NewScoreRow {
            name,
            address: "1 Main St",
            city: "Springfield",
            country: "US",
            pincode: "12345",
            sat_score: score,
            passed: score >= 30,
        }
    }

    #[test]
    fn insert_fills_defaults() {
        let pool = create_pool(":memory:", PoolOptions::default()).unwrap();
        run_migrations(&pool).unwrap();
        let mut conn = pool.get().unwrap();

        diesel::insert_into(sat_scores::table)
            .values(&new_row("Alice", 90))
            .execute(&mut conn)
            .unwrap();

        let row: ScoreRow = sat_scores::table
            .select(ScoreRow::as_select())
            .first(&mut conn)
            .unwrap();

        assert_eq!(row.id, 1);
        assert_eq!(row.name, "Alice");
        assert_eq!(row.sat_score, 90);
        assert!(row.passed);
        assert_eq!(row.rank, 0);
        assert_eq!(row.created_at, row.updated_at);
    }

    #[test]
    fn schema_rejects_duplicate_names() {
        let pool = create_pool(":memory:", PoolOptions::default()).unwrap();
        run_migrations(&pool).unwrap();
        let mut conn = pool.get().unwrap();

        diesel::insert_into(sat_scores::table)
            .values(&new_row("Alice", 90))
            .execute(&mut conn)
            .unwrap();
        let dup = diesel::insert_into(sat_scores::table)
            .values(&new_row("Alice", 40))
            .execute(&mut conn);

        assert!(matches!(
            dup,
            Err(diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _
            ))
        ));
    }

    #[test]
    fn schema_rejects_out_of_range_scores() {
        let pool = create_pool(":memory:", PoolOptions::default()).unwrap();
        run_migrations(&pool).unwrap();
        let mut conn = pool.get().unwrap();

        let result = diesel::insert_into(sat_scores::table)
            .values(&new_row("Mallory", 101))
            .execute(&mut conn);

        assert!(result.is_err());
    }

    #[test]
    fn changeset_skips_absent_location_fields() {
        let pool = create_pool(":memory:", PoolOptions::default()).unwrap();
        run_migrations(&pool).unwrap();
        let mut conn = pool.get().unwrap();

        diesel::insert_into(sat_scores::table)
            .values(&new_row("Carol", 70))
            .execute(&mut conn)
            .unwrap();

        diesel::update(sat_scores::table.filter(sat_scores::name.eq("Carol")))
            .set(&ScoreChangeset {
                sat_score: 20,
                passed: false,
                address: None,
                city: Some("Shelbyville"),
                country: None,
                pincode: None,
            })
            .execute(&mut conn)
            .unwrap();

        let row: ScoreRow = sat_scores::table
            .select(ScoreRow::as_select())
            .first(&mut conn)
            .unwrap();
        assert_eq!(row.sat_score, 20);
        assert!(!row.passed);
        assert_eq!(row.address, "1 Main St");
        assert_eq!(row.city, "Shelbyville");
    }
}

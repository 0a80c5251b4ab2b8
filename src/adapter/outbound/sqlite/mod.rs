//! SQLite persistence for score records.

pub mod database;
pub mod store;

pub use store::SqliteScoreStore;

//! satboard - SAT score records with dense ranking.
//!
//! Stores exam records in SQLite, keeps every record's rank equal to the
//! dense rank of its score, and serves an HTML form UI plus a small JSON API.
//!
//! # Architecture
//!
//! The crate follows a ports-and-adapters layout:
//!
//! - **`domain`** - Validated value types and the dense-rank rule
//! - **`port`** - The transactional store contract
//! - **`application`** - Mutation and query services
//! - **`adapter::outbound`** - SQLite (diesel) and in-memory stores
//! - **`adapter::inbound`** - HTTP routes (axum) and the CLI (clap)
//! - **`infrastructure`** - Configuration and runtime wiring
//!
//! Every insert, update and delete runs in one transaction that also
//! recomputes all ranks and re-reads the table, so callers only ever see a
//! consistent ranking.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use satboard::adapter::outbound::memory::MemoryScoreStore;
//! use satboard::application::MutationService;
//! use satboard::domain::{Location, NewScoreRecord, Score};
//!
//! # async fn demo() -> satboard::error::Result<()> {
//! let service = MutationService::new(Arc::new(MemoryScoreStore::new()));
//! let location = Location::try_new("1 Main St", "Springfield", "US", "12345")?;
//! let record = NewScoreRecord::try_new("Alice", location, Score::try_new(90)?)?;
//! let outcome = service.insert(record).await?;
//! assert_eq!(outcome.records[0].rank, 1);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!            ┌──────────────────────────┐
//!  HTTP/CLI ─┤  Application services    ├─ ScoreStore ─┬─ SQLite adapter
//!            │  (mutation, query)       │              └─ in-memory adapter
//!            └──────────────────────────┘
//! ```

pub mod outbound;

pub use outbound::store::{ScoreReader, ScoreStore, ScoreWriter};

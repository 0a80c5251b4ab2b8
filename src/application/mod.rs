//! Application services (use cases).
//!
//! - [`mutation`] - insert/update/delete, each as one transaction that
//!   mutates, recomputes ranks and re-reads the table
//! - [`query`] - read-only lookups
//!
//! Store calls block, so both services run them on tokio's blocking pool.

pub mod mutation;
pub mod query;

use std::sync::Arc;

use tokio::task;

pub use mutation::{MutationOutcome, MutationService};
pub use query::QueryService;

use crate::error::Result;
use crate::port::outbound::store::ScoreStore;

/// Run a blocking store call off the async executor.
///
/// Dropping the returned future does not stop the call; mutations that
/// must roll back on drop go through `mutation::transact`.
async fn run_blocking<S, T, F>(store: &Arc<S>, f: F) -> Result<T>
where
    S: ScoreStore,
    T: Send + 'static,
    F: FnOnce(&S) -> Result<T> + Send + 'static,
{
    let store = Arc::clone(store);
    task::spawn_blocking(move || f(&store)).await?
}

//! Shared request state.

use std::sync::Arc;

use crate::application::{MutationService, QueryService};
use crate::port::outbound::store::ScoreStore;

/// Services handed to every handler.
pub struct AppState<S> {
    pub mutations: MutationService<S>,
    pub queries: QueryService<S>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            mutations: self.mutations.clone(),
            queries: self.queries.clone(),
        }
    }
}

impl<S: ScoreStore> AppState<S> {
    /// Build both services over one shared store.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self {
            mutations: MutationService::new(Arc::clone(&store)),
            queries: QueryService::new(store),
        }
    }
}

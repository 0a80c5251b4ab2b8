//! Route table.

use std::path::Path;

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::handler;
use super::state::AppState;
use crate::port::outbound::store::ScoreStore;

/// Build the application router.
///
/// Pages live at the root, fragment and JSON endpoints under `/api`, and
/// files in `static_dir` under `/static`.
pub fn build_router<S: ScoreStore>(state: AppState<S>, static_dir: impl AsRef<Path>) -> Router {
    let api = Router::new()
        .route("/submit-sat-score", post(handler::submit_score::<S>))
        .route("/search-by-name", get(handler::search_by_name::<S>))
        .route("/update-sat-score", post(handler::update_score::<S>))
        .route("/delete-record", delete(handler::delete_record::<S>))
        .route("/view-all-data", get(handler::view_all_data::<S>))
        .route("/score", get(handler::score_by_name::<S>));

    Router::new()
        .route("/", get(handler::index::<S>))
        .route("/update-sat-score-form", get(handler::update_form::<S>))
        .route("/health", get(handler::health))
        .nest("/api", api)
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

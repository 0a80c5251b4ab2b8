//! Route handlers.
//!
//! Handlers are generic over the store so the router can be built over the
//! SQLite store in production and the in-memory store in tests. Extractor
//! rejections are turned into the route's own error type so `/api` clients
//! always get a JSON error body.

use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::Html;
use axum::{Form, Json};
use serde::Serialize;
use serde_json::{json, Value};

use super::error::{ApiError, PageError};
use super::form::{NameQuery, ScoreForm, UpdateScoreForm};
use super::render;
use super::state::AppState;
use crate::domain::ScoreRecord;
use crate::port::outbound::store::ScoreStore;

/// Body of `GET /api/view-all-data`.
#[derive(Debug, Serialize)]
pub struct AllScores {
    pub sat_scores: Vec<ScoreRecord>,
}

fn api_form<T>(form: Result<Form<T>, FormRejection>) -> Result<T, ApiError> {
    form
        .map(|Form(value)| value)
        .map_err(|rejection| ApiError::rejected(rejection.status(), rejection.body_text()))
}

fn api_query<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    query
        .map(|Query(value)| value)
        .map_err(|rejection| ApiError::rejected(rejection.status(), rejection.body_text()))
}

fn page_query<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, PageError> {
    query
        .map(|Query(value)| value)
        .map_err(|rejection| PageError::rejected(rejection.status(), rejection.body_text()))
}

/// `GET /`
pub async fn index<S: ScoreStore>(
    State(state): State<AppState<S>>,
) -> Result<Html<String>, PageError> {
    let records = state.queries.all().await?;
    Ok(Html(render::index_page(&records)))
}

/// `GET /update-sat-score-form?name=`
pub async fn update_form<S: ScoreStore>(
    State(state): State<AppState<S>>,
    query: Result<Query<NameQuery>, QueryRejection>,
) -> Result<Html<String>, PageError> {
    let name = page_query(query)?.required()?;
    let record = state.queries.by_name(name).await?;
    Ok(Html(render::update_form(&record)))
}

/// `POST /api/submit-sat-score`
pub async fn submit_score<S: ScoreStore>(
    State(state): State<AppState<S>>,
    form: Result<Form<ScoreForm>, FormRejection>,
) -> Result<Html<String>, ApiError> {
    let record = api_form(form)?.into_new_record()?;
    let outcome = state.mutations.insert(record).await?;
    Ok(Html(render::table(&outcome.records)))
}

/// `GET /api/search-by-name?name=`
pub async fn search_by_name<S: ScoreStore>(
    State(state): State<AppState<S>>,
    query: Result<Query<NameQuery>, QueryRejection>,
) -> Result<Html<String>, ApiError> {
    let query = api_query(query)?;
    let records = state.queries.search(query.name.trim().to_string()).await?;
    Ok(Html(render::table(&records)))
}

/// `POST /api/update-sat-score`
pub async fn update_score<S: ScoreStore>(
    State(state): State<AppState<S>>,
    form: Result<Form<UpdateScoreForm>, FormRejection>,
) -> Result<Html<String>, ApiError> {
    let update = api_form(form)?.into_update()?;
    let outcome = state.mutations.update(update).await?;
    Ok(Html(render::form_with_table(&outcome.records)))
}

/// `DELETE /api/delete-record?name=`
pub async fn delete_record<S: ScoreStore>(
    State(state): State<AppState<S>>,
    query: Result<Query<NameQuery>, QueryRejection>,
) -> Result<Html<String>, ApiError> {
    let name = api_query(query)?.required()?;
    let outcome = state.mutations.delete(name).await?;
    Ok(Html(render::table(&outcome.records)))
}

/// `GET /api/view-all-data`
pub async fn view_all_data<S: ScoreStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<AllScores>, ApiError> {
    let sat_scores = state.queries.all().await?;
    Ok(Json(AllScores { sat_scores }))
}

/// `GET /api/score?name=`
pub async fn score_by_name<S: ScoreStore>(
    State(state): State<AppState<S>>,
    query: Result<Query<NameQuery>, QueryRejection>,
) -> Result<Json<ScoreRecord>, ApiError> {
    let name = api_query(query)?.required()?;
    Ok(Json(state.queries.by_name(name).await?))
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

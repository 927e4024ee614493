use std::sync::Arc;
use rocket::{State, get, post, delete, http::Status, serde::json::Json};
use tracing::{debug, instrument};
use shared::{models::*, tally::TallyError, document::ResultsDocument};
use crate::{
   error::ApiError,
   feedback::FeedbackAdapter,
   store::SessionStore,
   utils::parse_session_id,
};

pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub results: Option<ResultsDocument>,
}

impl AppState {
    pub fn new(results: Option<ResultsDocument>, idle_minutes: i64) -> Self {
        Self {
            sessions: Arc::new(SessionStore::new(idle_minutes)),
            results,
        }
    }
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}

#[get("/results")]
pub async fn get_results(state: &State<AppState>) -> Result<Json<ResultsDocument>, ApiError> {
    state.results.clone()
        .map(Json)
        .ok_or(ApiError::DocumentUnavailable)
}

#[post("/session")]
pub async fn create_session(state: &State<AppState>) -> Result<Json<SessionCreated>, ApiError> {
    let session_id = state.sessions.create()?;
    Ok(Json(SessionCreated { session_id }))
}

#[instrument(skip(state, event), fields(session_id = %id))]
#[post("/session/<id>/feedback", format = "json", data = "<event>")]
pub async fn record_feedback(
    state: &State<AppState>,
    id: &str,
    event: Json<VoteEvent>,
) -> Result<Json<VoteReceipt>, ApiError> {
    let session_id = parse_session_id(id)?;
    FeedbackAdapter::on_vote_clicked(&state.sessions, session_id, &event).map(Json)
}

#[get("/session/<id>/feedback")]
pub async fn session_summary(state: &State<AppState>, id: &str) -> Result<Json<SessionSummary>, ApiError> {
    let session_id = parse_session_id(id)?;
    state.sessions.summary(session_id).map(Json)
}

#[get("/session/<id>/feedback/<kind>/<item_id>")]
pub async fn get_tally(
    state: &State<AppState>,
    id: &str,
    kind: Result<ItemKind, TallyError>,
    item_id: &str,
) -> Result<Json<Option<TallySnapshot>>, ApiError> {
    let session_id = parse_session_id(id)?;
    let item = ItemRef::new(kind?, item_id)?;
    state.sessions.snapshot(session_id, &item).map(Json)
}

#[delete("/session/<id>")]
pub async fn end_session(state: &State<AppState>, id: &str) -> Result<Status, ApiError> {
    let session_id = parse_session_id(id)?;
    state.sessions.end(session_id)?;
    debug!("Session {} closed by client", session_id);
    Ok(Status::NoContent)
}

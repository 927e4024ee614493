pub mod config;
pub mod feedback;
pub mod routes;
pub mod store;
pub mod cors;
pub mod error;
pub mod utils;
pub mod catchers;
pub use shared::{models::*, error::ErrorResponse};

use rocket::{Build, Rocket, catchers, routes};
use time::OffsetDateTime;
use tracing::{error, info};

use crate::routes::AppState;
use crate::store::SessionStore;

/// Rocket instance serving the JSON API under `/api`.
pub fn build_rocket(state: AppState) -> Rocket<Build> {
    rocket::build()
        .attach(cors::CORS)
        .manage(state)
        .mount(
            "/api",
            routes![
                routes::get_results,
                routes::create_session,
                routes::record_feedback,
                routes::session_summary,
                routes::get_tally,
                routes::end_session,
                routes::all_options,
            ],
        )
        .register(
            "/",
            catchers![
                catchers::bad_request,
                catchers::not_found,
                catchers::unprocessable,
                catchers::internal_error,
            ],
        )
}

pub fn purge_idle_sessions(sessions: &SessionStore) {
    match sessions.purge_idle(OffsetDateTime::now_utc()) {
        Ok(0) => {}
        Ok(count) => info!("🗑️ Removed {} idle sessions", count),
        Err(e) => error!("Session cleanup failed: {}", e),
    }
}

#[cfg(test)]
mod tests;

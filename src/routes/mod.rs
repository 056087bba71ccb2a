// Route exports
pub mod errors;
pub mod participants;
pub mod teams;

use actix_web::web;
use std::sync::Arc;
use crate::core::TeamMatcher;
use crate::services::RosterStore;

pub use errors::{handle_json_payload_error, handle_query_payload_error};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<RosterStore>,
    pub matcher: TeamMatcher,
}

impl AppState {
    pub fn new(matcher: TeamMatcher) -> Self {
        Self {
            roster: Arc::new(RosterStore::new()),
            matcher,
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(teams::configure)
            .configure(participants::configure),
    );
}

//! Builders for the HTTP state ports.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;

use worddee_backend::domain::ports::{
    AttemptRepository, PracticeSummaryQuery, SentenceValidationCommand, WordQuery,
};
use worddee_backend::domain::{PracticeSummaryService, SentenceValidationService, WordService};
use worddee_backend::inbound::http::state::{HttpState, HttpStatePorts};
use worddee_backend::outbound::persistence::DieselAttemptRepository;

use super::ServerConfig;

/// Build handler state from the configured adapters.
///
/// Each port falls back to its fixture when an adapter it needs is missing:
/// words need the gateway, validation needs the gateway and the store, the
/// summary needs the store.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let fixtures = HttpStatePorts::default();
    let attempts: Option<Arc<dyn AttemptRepository>> = config
        .db_pool
        .as_ref()
        .map(|pool| Arc::new(DieselAttemptRepository::new(pool.clone())) as _);

    let words: Arc<dyn WordQuery> = match &config.workflow {
        Some(gateway) => Arc::new(WordService::new(gateway.clone())),
        None => fixtures.words,
    };

    let validation: Arc<dyn SentenceValidationCommand> = match (&config.workflow, &attempts) {
        (Some(gateway), Some(attempts)) => Arc::new(SentenceValidationService::new(
            gateway.clone(),
            attempts.clone(),
        )),
        _ => fixtures.validation,
    };

    let summary: Arc<dyn PracticeSummaryQuery> = match attempts {
        Some(attempts) => Arc::new(PracticeSummaryService::new(
            attempts,
            Arc::new(DefaultClock),
        )),
        None => fixtures.summary,
    };

    web::Data::new(HttpState::new(HttpStatePorts {
        words,
        validation,
        summary,
    }))
}

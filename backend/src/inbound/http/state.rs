//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    FixturePracticeSummaryQuery, FixtureSentenceValidationCommand, FixtureWordQuery,
    PracticeSummaryQuery, SentenceValidationCommand, WordQuery,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub words: Arc<dyn WordQuery>,
    pub validation: Arc<dyn SentenceValidationCommand>,
    pub summary: Arc<dyn PracticeSummaryQuery>,
}

impl Default for HttpStatePorts {
    fn default() -> Self {
        Self {
            words: Arc::new(FixtureWordQuery),
            validation: Arc::new(FixtureSentenceValidationCommand),
            summary: Arc::new(FixturePracticeSummaryQuery),
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub words: Arc<dyn WordQuery>,
    pub validation: Arc<dyn SentenceValidationCommand>,
    pub summary: Arc<dyn PracticeSummaryQuery>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use worddee_backend::inbound::http::state::{HttpState, HttpStatePorts};
    ///
    /// let state = HttpState::new(HttpStatePorts::default());
    /// let _words = state.words.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            words,
            validation,
            summary,
        } = ports;
        Self {
            words,
            validation,
            summary,
        }
    }
}

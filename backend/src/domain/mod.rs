//! Domain primitives, ports and services.
//!
//! Purpose: keep vocabulary-practice rules independent of HTTP and storage.
//! Inbound adapters call the driving ports in [`ports`]; outbound adapters
//! implement the driven ones.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure type.
//! - WordCard, NewAttempt / Attempt, PracticeSummary: domain values.
//! - WordService, SentenceValidationService, PracticeSummaryService: port
//!   implementations wired by the server.
//! - RetryingWorkflowGateway and the fixed-delay retry helpers.

pub mod attempt;
pub mod error;
pub mod ports;
pub mod practice_summary_service;
pub mod retry;
pub mod retrying_workflow_gateway;
pub mod sentence_validation_service;
pub mod summary;
pub mod trace_id;
pub mod word_card;
pub mod word_service;

pub use self::attempt::{Attempt, DEFAULT_LEVEL, NewAttempt, VerdictError};
pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::practice_summary_service::PracticeSummaryService;
pub use self::retry::{FixedRetryPolicy, Sleeper, TokioSleeper, retry_fixed};
pub use self::retrying_workflow_gateway::RetryingWorkflowGateway;
pub use self::sentence_validation_service::SentenceValidationService;
pub use self::summary::{
    MINUTES_PER_ATTEMPT, PracticeSummary, SUMMARY_WINDOW, current_streak,
};
pub use self::trace_id::TraceId;
pub use self::word_card::{WordCard, WordCardError};
pub use self::word_service::WordService;

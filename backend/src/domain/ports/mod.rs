//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod attempt_repository;
mod practice_summary_query;
mod sentence_validation_command;
mod word_query;
mod workflow_gateway;

#[cfg(test)]
pub use attempt_repository::MockAttemptRepository;
pub use attempt_repository::{
    AttemptRepository, AttemptRepositoryError, FixtureAttemptRepository,
};
#[cfg(test)]
pub use practice_summary_query::MockPracticeSummaryQuery;
pub use practice_summary_query::{FixturePracticeSummaryQuery, PracticeSummaryQuery};
#[cfg(test)]
pub use sentence_validation_command::MockSentenceValidationCommand;
pub use sentence_validation_command::{
    FixtureSentenceValidationCommand, SentenceValidationCommand, ValidateSentenceRequest,
    ValidateSentenceResponse,
};
#[cfg(test)]
pub use word_query::MockWordQuery;
pub use word_query::{FixtureWordQuery, WordQuery};
#[cfg(test)]
pub use workflow_gateway::MockWorkflowGateway;
pub use workflow_gateway::{
    FixtureWorkflowGateway, WorkflowGateway, WorkflowGatewayError, WorkflowOperation,
};

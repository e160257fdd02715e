//! Workflow-automation service outbound adapters.
//!
//! This module provides a thin HTTP implementation of the `WorkflowGateway`
//! port.

mod http_gateway;

pub use http_gateway::{DEFAULT_REQUEST_TIMEOUT, WorkflowHttpGateway, WorkflowHttpGatewayBuildError};

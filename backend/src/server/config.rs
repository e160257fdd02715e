//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use worddee_backend::domain::ports::WorkflowGateway;
use worddee_backend::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
///
/// Ports without a configured adapter are served by fixtures, which keeps
/// the server bootable in tests without a database or workflow service.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) workflow: Option<Arc<dyn WorkflowGateway>>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            workflow: None,
        }
    }

    /// Attach a database connection pool for the history store.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Attach the gateway used for word generation and grading.
    #[must_use]
    pub fn with_workflow_gateway(mut self, gateway: Arc<dyn WorkflowGateway>) -> Self {
        self.workflow = Some(gateway);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

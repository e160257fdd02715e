//! Backend entry-point: loads settings, prepares the history store and the
//! workflow client, then serves the practice API until shutdown.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), forbid(clippy::expect_used))]

mod server;

use std::sync::Arc;
use std::time::Duration;

use actix_web::web;
use color_eyre::eyre::WrapErr;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use worddee_backend::domain::ports::WorkflowGateway;
use worddee_backend::domain::{FixedRetryPolicy, RetryingWorkflowGateway, TokioSleeper};
use worddee_backend::inbound::http::health::HealthState;
use worddee_backend::outbound::persistence::{PoolConfig, connect_and_bootstrap};
use worddee_backend::outbound::workflow::WorkflowHttpGateway;
use worddee_backend::settings::Settings;

use server::{ServerConfig, create_server};

/// Checkout timeout used while polling for the store during startup.
const STORE_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();

    let settings = Settings::load()?;

    let pool_config = PoolConfig::new(settings.database.database_url()?)
        .with_checkout_timeout(STORE_CONNECT_TIMEOUT);
    let pool = connect_and_bootstrap(pool_config, FixedRetryPolicy::STORE_BOOTSTRAP, &TokioSleeper)
        .await
        .wrap_err("history store did not become available")?;

    let base_url = settings.workflow.base_url()?;
    info!(url = %base_url, "workflow service configured");
    let http_gateway = WorkflowHttpGateway::new(base_url)
        .wrap_err("failed to build workflow client")?;
    let gateway: Arc<dyn WorkflowGateway> =
        Arc::new(RetryingWorkflowGateway::new(Arc::new(http_gateway)));

    let config = ServerConfig::new(settings.server.bind_addr()?)
        .with_db_pool(pool)
        .with_workflow_gateway(gateway.clone());
    let bind_addr = config.bind_addr();

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;
    info!(addr = %bind_addr, "server listening");

    let outcome = server.await;

    health_state.mark_unhealthy();
    drop(gateway);
    info!("workflow client closed");

    outcome.wrap_err("server terminated with an error")
}

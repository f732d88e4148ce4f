//! retreat-relay - submission relay server
//!
//! Accepts `POST /api/submit` and forwards the JSON body to the configured
//! webhook. Stops on Ctrl-C after in-flight requests finish.

use anyhow::Context;
use retreat_infra::{config, observability, RelayServer, RelayState, WebhookForwarder};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load().context("failed to load configuration")?;
    observability::init_tracing(&config.logging).context("failed to initialise logging")?;

    let forwarder =
        WebhookForwarder::from_config(&config.relay).context("invalid relay configuration")?;
    if !forwarder.is_configured() {
        warn!("no webhook URL configured; submissions will be rejected");
    }

    let server = RelayServer::start(&config.relay.bind_addr, RelayState::new(forwarder))
        .await
        .context("failed to start relay server")?;
    info!(submit_url = %server.submit_url(), "retreat relay ready");

    tokio::signal::ctrl_c().await.context("failed to listen for shutdown signal")?;
    info!("shutdown requested");

    server.shutdown().await.context("relay server did not stop cleanly")?;
    Ok(())
}

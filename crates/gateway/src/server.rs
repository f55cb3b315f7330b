use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use {popauth_config::Credentials, popauth_oauth::ExchangeClient};

use crate::{routes::build_router, state::GatewayState};

/// Bind and serve the gateway until the task is cancelled or the listener
/// fails. Requests are handled independently; one in-flight code exchange
/// never blocks another request.
pub async fn start_gateway(bind: &str, port: u16, credentials: Credentials) -> anyhow::Result<()> {
    let state = GatewayState::new(ExchangeClient::new(credentials));
    let router = build_router(state);

    let addr = format!("{bind}:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(%addr, "gateway listening");
    axum::serve(listener, router)
        .await
        .context("gateway server exited")
}

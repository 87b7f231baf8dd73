use anyhow::Context;

use clientdesk_api::config::ServerConfig;
use clientdesk_core::LabelPolicy;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    clientdesk_observability::init();

    let config = ServerConfig::from_env();
    let app = clientdesk_api::app::build_app(LabelPolicy::default(), &config);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, "Server Start...");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

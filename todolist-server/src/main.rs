use anyhow::Context;
use std::sync::Arc;

// ri-utilizziamo le funzioni e strutture definite in lib.rs
use todolist_server::{routes, telemetry, AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env().context("read configuration")?;
    telemetry::init_tracing(config.log_format)?;

    // stdout riceve gli username, i log vanno su stderr
    let state = Arc::new(AppState::stdout());
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("bind tcp listener on {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, "listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server shutdown")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        // senza segnale restiamo in ascolto finché il processo non viene terminato
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

use std::sync::Arc;

use demo_service::config::Config;
use demo_service::inbound::http::router::create_router;
use duo_web::DuoWeb;
use duo_web::SystemClock;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "demo_service=debug,duo_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "demo-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        api_hostname = %config.duo.api_hostname,
        integration_key = %config.duo.integration_key,
        "Configuration loaded"
    );

    for kind in config.duo.keys().short_keys(&config.protocol) {
        tracing::warn!(key = %kind, "Key is shorter than the protocol minimum");
    }

    let duo = Arc::new(DuoWeb::with_protocol(SystemClock, config.protocol.clone()));
    let http_application = create_router(duo, Arc::new(config.duo.clone()));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, http_application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }

    tracing::info!("Stopping http server");
}

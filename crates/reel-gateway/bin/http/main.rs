mod cli;

use crate::cli::{LogFormatArg, CLI};
use clap::Parser;
use reel_catalog::VideoCatalogService;
use reel_gateway::{App, AppState};
use reel_generator::seq::SeqGenerator;
use reel_storage::InMemoryRepository;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CLI::try_parse()?;
    init_tracing(config.log_format);

    info!(
        listen_addr = %config.listen_addr,
        id_offset = config.id_offset,
        unlike_policy = %config.unlike_policy,
        "starting gateway server"
    );

    let service = VideoCatalogService::new(
        InMemoryRepository::new(),
        SeqGenerator::with_offset(config.id_offset),
    )
    .with_unlike_policy(config.unlike_policy.into());
    let state = AppState::new(Arc::new(service));

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway stopped");
    Ok(())
}

fn init_tracing(format: LogFormatArg) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormatArg::Text => subscriber.init(),
        LogFormatArg::Json => subscriber.json().init(),
    }
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

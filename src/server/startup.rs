use std::sync::Arc;

use dioxus_logger::tracing;
use tokio::net::TcpListener;

use crate::server::{
    config::Config, data::store::CharacterStore, error::Error, model::app::AppState,
};

/// Open the character store, seeding it if no usable store exists
pub fn open_store(config: &Config) -> Result<Arc<CharacterStore>, Error> {
    let store = CharacterStore::open(&config.characters_file)?;

    Ok(Arc::new(store))
}

/// Bind the TCP listener the API is served on
pub async fn bind_listener(config: &Config) -> Result<TcpListener, Error> {
    let listener = TcpListener::bind(config.bind_address()).await?;

    Ok(listener)
}

/// Serve the API until a shutdown signal is received
///
/// The store is dropped together with the router once the server has shut down.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), Error> {
    let router = crate::server::router::app(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received, finishing in-flight requests");
}

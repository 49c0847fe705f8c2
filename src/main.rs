#![allow(non_snake_case)]

mod client;
mod model;

#[cfg(feature = "server")]
use marvel_characters::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    run_server();
}

#[cfg(feature = "server")]
#[tokio::main]
async fn run_server() {
    use dioxus_logger::tracing::{self, Level};

    use crate::server::{config::Config, model::app::AppState, startup};

    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let store = match startup::open_store(&config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open character store: {}", e);
            std::process::exit(1);
        }
    };

    let listener = match startup::bind_listener(&config).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", config.bind_address(), e);
            std::process::exit(1);
        }
    };

    tracing::info!("Marvel Characters API started");
    tracing::info!("URL: http://localhost:{}", config.port);
    tracing::info!("Try: http://localhost:{}/characters", config.port);

    if let Err(e) = startup::serve(listener, AppState { store }).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

mod config;
mod routes;

use config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: std::net::SocketAddr, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "nobleguard server exiting");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let server_config = ServerConfig::from_env()?;
    let conf = leptos::config::get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = server_config.bind_addr(leptos_options.site_addr);

    let app = routes::app(leptos_options);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    let api = client::config::ApiConfig::from_build_env();
    tracing::info!(%addr, api_base_url = %api.base_url, "nobleguard listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

//! Service entry point.
//!
//! Configuration is injected: one `AppConfig` is loaded here (file named by
//! `SOKRAT_CONFIG`, else `./sokrat.toml`, else built-in defaults), every
//! client is built from it once, and nothing else reads the environment.

use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

use sokrat_core::AppConfig;
use sokrat_server::routes;
use sokrat_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config()?;
    let bind_addr = config.server.bind_addr.clone();
    let state = AppState::from_config(config);
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Listening on {}", bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}

fn load_config() -> anyhow::Result<AppConfig> {
    if let Ok(path) = std::env::var("SOKRAT_CONFIG") {
        let path = PathBuf::from(path);
        info!("Loading config from {}", path.display());
        return Ok(AppConfig::from_file(&path)?);
    }

    let default_path = PathBuf::from("sokrat.toml");
    if default_path.exists() {
        info!("Loading config from {}", default_path.display());
        return Ok(AppConfig::from_file(&default_path)?);
    }

    info!("No config file found, using built-in defaults");
    Ok(AppConfig::default())
}

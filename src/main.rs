//! HR cost API server.
//!
//! Main entry point for the payroll cost service.

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hr_cost::api::{AppState, create_router};
use hr_cost::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/default";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hr_cost=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir =
        std::env::var("HR_COST_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        calendar_years = ?config.calendar_years(),
        access_gate = config.access_key().is_some(),
        "Configuration loaded"
    );

    let addr = format!("{}:{}", config.server().host, config.server().port);
    let app = create_router(AppState::new(config));

    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

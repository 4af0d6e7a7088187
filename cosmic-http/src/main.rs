use cosmic_http::{AppState, ServerConfig, router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cosmic_http=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let app = router(AppState::from_config(&config));

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(
        addr = %config.bind,
        content_root = %config.content_root.display(),
        "cosmic-http listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}

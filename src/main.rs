use std::net::SocketAddr;

use mock_gateway::{config, logging::time::LocalTimer, server};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_timer(LocalTimer)
        .init();

    let config = config::Settings::load()?;

    let addr = config.server.bind_addr();
    let app = server::create_app(config).await?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Mock gateway running on http://{}", addr);

    // ConnectInfo 用于记录客户端地址
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

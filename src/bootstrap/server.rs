use std::net::SocketAddr;

use roster_core::DataSource;

use crate::app::state::AppState;
use crate::config::AppConfig;

pub async fn init_server(config: &AppConfig, source: DataSource) -> anyhow::Result<()> {
    let state = AppState::new(source);

    // Build the router
    let app = crate::routes::routes(state, &config.cors_origin)?;

    // Start the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

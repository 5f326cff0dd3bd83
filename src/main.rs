mod app;
mod bootstrap;
mod config;
mod docs;
mod routes;

use config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bootstrap::init_base().await;

    let config = AppConfig::get().await?;

    let source = bootstrap::init_database(&config).await?;

    bootstrap::init_server(&config, source).await
}

use roster_core::{Bootstrap, DataSource, Seeder};

use crate::config::AppConfig;

/// Opens the pool and prepares the `employees` table before the server
/// starts accepting requests.
///
/// Bootstrap failures are logged by `Bootstrap::initialize`; the server still
/// starts and requests report the database error themselves.
pub async fn init_database(config: &AppConfig) -> anyhow::Result<DataSource> {
    let source = DataSource::connect(&config.data_source()).await?;

    let seeder = Seeder::new(source.clone()).transactional(config.seed_in_transaction);
    let report = Bootstrap::new(source.clone())
        .with_seeder(seeder)
        .initialize()
        .await;

    if !report.is_ready() {
        tracing::warn!("starting with an incomplete database bootstrap");
    }

    Ok(source)
}

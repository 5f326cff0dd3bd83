use std::time::Duration;

use roster_core::DataSourceOptions;
use roster_core::config::ConfigBuilder;
use tokio::sync::OnceCell;

static APP: OnceCell<AppConfig> = OnceCell::const_new();

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub cors_origin: String,
    pub max_connections: u32,
    pub statement_timeout: Duration,
    pub seed_in_transaction: bool,
}

impl ConfigBuilder for AppConfig {
    fn build_from<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .unwrap_or_else(|| {
                tracing::warn!("cannot read `PORT` defaulting to `3000`");

                "3000".into()
            })
            .parse()
            .unwrap_or_else(|err| {
                tracing::error!("cannot parse `PORT`. defaulting to 3000 {:?}", err);
                3000
            });

        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| anyhow::anyhow!("cannot read `DATABASE_URL`"))?;

        let cors_origin = lookup("CORS_ORIGIN").unwrap_or_else(|| "http://localhost:5173".into());

        let max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?;

        let statement_timeout =
            Duration::from_secs(parse_or(&lookup, "DATABASE_STATEMENT_TIMEOUT_SECS", 10)?);

        let seed_in_transaction = parse_or(&lookup, "SEED_IN_TRANSACTION", false)?;

        Ok(AppConfig {
            port,
            database_url,
            cors_origin,
            max_connections,
            statement_timeout,
            seed_in_transaction,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|err| anyhow::anyhow!("cannot parse `{key}`: {err}")),
        None => Ok(default),
    }
}

impl AppConfig {
    pub async fn get() -> anyhow::Result<AppConfig> {
        APP.get_or_try_init(|| async { AppConfig::build() })
            .await
            .cloned()
    }

    pub fn data_source(&self) -> DataSourceOptions {
        DataSourceOptions::new(self.database_url.clone())
            .with_max_connections(self.max_connections)
            .with_statement_timeout(self.statement_timeout)
    }
}

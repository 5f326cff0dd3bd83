
pub async fn init_tracing() {
    // `RUST_LOG` wins; otherwise our own spans at info and the driver kept quiet
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new("info,sqlx=warn,sea_orm=warn")
        });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

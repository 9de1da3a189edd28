use census_worker::config::SourceConfig;
use census_worker::harvester::Harvester;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// One-shot harvest: run every worker once against the configured database.
#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "census_worker=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = census_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    census_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let config = SourceConfig::from_env();
    let harvester = Harvester::over_http(&config);
    tracing::info!(sources = ?harvester.source_names(), "Harvest starting");

    match harvester.run(&pool).await {
        Ok(summaries) => {
            let total: usize = summaries.iter().map(|s| s.persons_created).sum();
            tracing::info!(total, "Harvest complete");
        }
        Err(e) => {
            tracing::error!(error = %e, "Harvest failed");
            std::process::exit(1);
        }
    }
}

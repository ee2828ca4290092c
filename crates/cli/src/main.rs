mod config;

use clap::Parser;
use commerce_content_core::context::Context;
use commerce_content_core::seed::PageSeeder;
use commerce_content_core::store::pg::{PgIdStore, PgPageStore};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

/// Create a demo landing page from randomized catalog content.
#[derive(Parser, Debug)]
#[command(name = "demo-page", version, about)]
struct Cli {
    /// Delete previously generated pages before creating a new one
    #[arg(long)]
    reset: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (dev convenience)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = config::AppConfig::from_env()
        .map_err(|e| anyhow::anyhow!("Failed to load config: {e}. Is DATABASE_URL set?"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to database: {e}"))?;

    tracing::info!("Connected to PostgreSQL");

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {e}"))?;

    tracing::info!("Database migrations applied");

    let ctx = Context::default_context();
    let seeder = PageSeeder::new(
        PgPageStore::new(pool.clone()),
        PgIdStore::products(pool.clone()),
        PgIdStore::categories(pool.clone()),
        PgIdStore::media(pool),
    );

    let id = seeder.run(cli.reset, &ctx).await?;
    println!("ID: {id}");

    Ok(())
}

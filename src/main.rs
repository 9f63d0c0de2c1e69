//! Exam bulk uploader - Main entry point.
//!
//! Uploads every recognized file in the configured directory, then exits.

use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;

use exam_uploader_lib::config::Config;
use exam_uploader_lib::db::DbPool;
use exam_uploader_lib::error::AppResult;
use exam_uploader_lib::services::{Storage, run_batch};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }

    let config = Config::from_env().inspect_err(|e| {
        error!("Failed to load configuration: {}", e);
        error!("");
        error!("Please check your environment variables:");
        error!("  - RUST_ENV must be set to 'development' or 'production'");
        error!("  - In production, DATABASE_URL, S3 credentials and EXAMS_UPLOADER_ID must be set");
    })?;

    info!("Exam uploader ({})", config.environment);
    if config.is_development() {
        warn!("Running in DEVELOPMENT mode - do not use in production!");
    }

    let pool = DbPool::new(&config.database).await?;
    info!("Database connection established");

    if config.database.run_migrations {
        pool.run_migrations().await?;
    }

    let storage = Storage::new(&config.storage, config.is_development()).await?;

    run_batch(&config.upload_dir, &storage, &pool, config.uploader_id).await?;

    Ok(())
}

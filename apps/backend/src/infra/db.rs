//! DB bootstrap: connect with startup retry, then bring the schema
//! current.

use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{db_url, DbProfile};
use crate::error::AppError;

/// Retry a connection attempt with fixed interval delays; the DB
/// container may still be coming up when the service starts.
async fn connect_with_retry(
    url: &str,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(url.to_string());
    opt.max_connections(10)
        .acquire_timeout(Duration::from_secs(2))
        .sqlx_logging(false);

    let mut last_error = None;
    for attempt in 1..=max_attempts {
        match Database::connect(opt.clone()).await {
            Ok(conn) => {
                if attempt > 1 {
                    info!("db_connect=ok attempts={attempt}");
                }
                return Ok(conn);
            }
            Err(e) => {
                last_error = Some(e);
                if attempt < max_attempts {
                    warn!("db_connect=retry attempt={attempt} max_attempts={max_attempts}");
                    tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                }
            }
        }
    }

    let detail = last_error
        .map(|e| e.to_string())
        .unwrap_or_else(|| "no connection attempts made".to_string());
    Err(AppError::db(format!("failed to connect to Postgres: {detail}")))
}

/// Build the app DB connection *and* guarantee the schema is current.
pub async fn bootstrap_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile)?;
    let conn = connect_with_retry(&url, 5, 500).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    Ok(conn)
}

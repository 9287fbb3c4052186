/**
 * Database Configuration
 *
 * Opens the SQLite connection pool described by `AppConfig` and applies the
 * board schema.
 *
 * In-memory databases (`sqlite::memory:`) exist per connection, so they get a
 * single connection that is never recycled.
 */

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::backend::board::db::init_schema;
use crate::shared::AppConfig;

/// How long a writer waits for the database lock before failing
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open the database configured for the server
///
/// # Errors
///
/// Unlike optional services, the store is required: any failure to connect
/// or to apply the schema aborts startup.
pub async fn load_database(config: &AppConfig) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");
    let pool = connect_database(&config.database_url, config.max_connections).await?;
    tracing::info!("Database ready");
    Ok(pool)
}

/// Create a SQLite pool for `database_url` and apply the schema
pub async fn connect_database(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(BUSY_TIMEOUT);

    let pool = if is_memory_url(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        // Readers never block the writer; writers queue on the busy timeout
        SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options.journal_mode(SqliteJournalMode::Wal))
            .await?
    };

    tracing::debug!("Applying board schema");
    init_schema(&pool).await?;

    Ok(pool)
}

fn is_memory_url(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

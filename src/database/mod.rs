pub mod dismissal_repo;
pub mod friend_request_repo;
pub mod friends_repo;
pub mod relationship_store;
pub mod schema;
pub mod user_repo;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

pub async fn connect(database_url: &str, max_connections: u32) -> sqlx::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;
    schema::ensure_schema(&pool).await?;
    Ok(pool)
}

/// In-memory database with the schema applied. Each `:memory:` connection is
/// its own database, so the pool holds exactly one connection and never
/// recycles it.
pub async fn connect_in_memory() -> sqlx::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    schema::ensure_schema(&pool).await?;
    Ok(pool)
}

//! Catalog database: connection settings, pool, and embedded schema.
//!
//! SYSTEM CONTEXT
//! ==============
//! The functions server keeps books and authors as `jsonb` documents. Startup
//! reads [`DbConfig`] from the environment, opens one shared pool, and applies
//! the catalog migrations before `countBooks` or the catalog routes run.

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

/// Where the catalog lives and how many connections to hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub url: String,
    pub max_connections: u32,
}

/// The catalog cannot run without a database.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("DATABASE_URL required")]
pub struct MissingDatabaseUrl;

impl DbConfig {
    /// Load from `DATABASE_URL` and `DB_MAX_CONNECTIONS`.
    ///
    /// # Errors
    ///
    /// Returns [`MissingDatabaseUrl`] if `DATABASE_URL` is unset or blank.
    pub fn from_env() -> Result<Self, MissingDatabaseUrl> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self, MissingDatabaseUrl> {
        let url = get("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(MissingDatabaseUrl)?;
        // Zero would make every acquire wait forever.
        let max_connections = get("DB_MAX_CONNECTIONS")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS);
        Ok(Self { url, max_connections })
    }
}

/// Open the catalog pool and bring the schema up to date.
///
/// # Errors
///
/// Returns an error if the connection or migrations fail.
pub async fn init_pool(config: &DbConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    sqlx::migrate!("src/db/migrations").run(&pool).await?;
    tracing::info!(max_connections = config.max_connections, "catalog schema ready");

    Ok(pool)
}

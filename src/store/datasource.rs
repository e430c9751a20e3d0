use anyhow::{Context, Result};
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::DatabaseConfig;

/// Connection pool of one vertical. Each vertical owns its own datasource so
/// the domains can live in separate databases within one process.
#[derive(Debug, Clone)]
pub struct Datasource {
    name: &'static str,
    pool: PgPool,
}

impl Datasource {
    /// Create a pool for the named vertical from its configuration
    pub async fn connect(name: &'static str, config: &DatabaseConfig) -> Result<Self> {
        let url = config.url();
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&url)
            .await
            .with_context(|| format!("Failed to create PostgreSQL connection pool for '{}'", name))?;

        log::info!("Connected {} datasource ({} max connections)", name, config.max_connections);
        Ok(Self { name, pool })
    }

    /// Create the vertical's tables and indexes when they are missing
    pub async fn apply_schema(&self, statements: &[&str]) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        for statement in statements {
            sqlx::query(statement)
                .execute(&mut *tx)
                .await
                .with_context(|| format!("Failed to apply {} schema", self.name))?;
        }
        tx.commit().await?;
        log::info!("{} schema ready", self.name);
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

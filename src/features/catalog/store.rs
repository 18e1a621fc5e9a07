use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::catalog::models::CatalogEntry;

/// Read access to the category and amenity reference lists
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<CatalogEntry>>;
    async fn list_amenities(&self) -> Result<Vec<CatalogEntry>>;
}

pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn list_categories(&self) -> Result<Vec<CatalogEntry>> {
        sqlx::query_as::<_, CatalogEntry>(
            r#"
            SELECT id, en, it, weight
            FROM venue_categories
            ORDER BY weight DESC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch venue categories: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn list_amenities(&self) -> Result<Vec<CatalogEntry>> {
        sqlx::query_as::<_, CatalogEntry>(
            r#"
            SELECT id, en, it, weight
            FROM amenities
            ORDER BY weight DESC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch amenities: {:?}", e);
            AppError::Database(e)
        })
    }
}

#[cfg(test)]
pub use memory::MemoryCatalogStore;

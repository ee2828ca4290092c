//! Postgres-backed stores. Blocks are stored as JSONB alongside the
//! page row; id sources are plain tenant-scoped tables.

use sqlx::PgPool;
use uuid::Uuid;

use crate::context::Context;
use crate::page::model::DemoPage;
use crate::store::{Criteria, IdSearchResult, IdStore, PageStore, RepositoryError};

const DEFAULT_SEARCH_LIMIT: u32 = 100;

/// Id source over a single entity table. Table names come from the
/// named constructors only; they are never caller-supplied.
#[derive(Debug, Clone)]
pub struct PgIdStore {
    pool: PgPool,
    table: &'static str,
}

impl PgIdStore {
    pub fn products(pool: PgPool) -> Self {
        Self {
            pool,
            table: "product",
        }
    }

    pub fn categories(pool: PgPool) -> Self {
        Self {
            pool,
            table: "category",
        }
    }

    pub fn media(pool: PgPool) -> Self {
        Self {
            pool,
            table: "media",
        }
    }
}

impl IdStore for PgIdStore {
    async fn search_ids(
        &self,
        criteria: &Criteria,
        ctx: &Context,
    ) -> Result<IdSearchResult, RepositoryError> {
        search_table_ids(&self.pool, self.table, criteria, ctx).await
    }
}

/// Store for generated demo pages (`cms_page`).
#[derive(Debug, Clone)]
pub struct PgPageStore {
    pool: PgPool,
}

impl PgPageStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl IdStore for PgPageStore {
    async fn search_ids(
        &self,
        criteria: &Criteria,
        ctx: &Context,
    ) -> Result<IdSearchResult, RepositoryError> {
        search_table_ids(&self.pool, "cms_page", criteria, ctx).await
    }
}

impl PageStore for PgPageStore {
    async fn create(&self, pages: &[DemoPage], ctx: &Context) -> Result<(), RepositoryError> {
        for page in pages {
            let blocks = serde_json::to_value(&page.blocks)?;
            sqlx::query(
                "INSERT INTO cms_page (id, tenant_id, name, page_type, blocks, created_at) \
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(page.id)
            .bind(ctx.tenant_id)
            .bind(&page.name)
            .bind(page.page_type.as_str())
            .bind(blocks)
            .bind(chrono::Utc::now())
            .execute(&self.pool)
            .await?;
        }
        Ok(())
    }

    async fn delete(&self, ids: &[Uuid], ctx: &Context) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM cms_page WHERE tenant_id = $1 AND id = ANY($2)")
            .bind(ctx.tenant_id)
            .bind(ids)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

async fn search_table_ids(
    pool: &PgPool,
    table: &str,
    criteria: &Criteria,
    ctx: &Context,
) -> Result<IdSearchResult, RepositoryError> {
    let limit = criteria.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    let ids: Vec<Uuid> = sqlx::query_scalar(&format!(
        "SELECT id FROM {table} WHERE tenant_id = $1 ORDER BY created_at, id LIMIT $2"
    ))
    .bind(ctx.tenant_id)
    .bind(i64::from(limit))
    .fetch_all(pool)
    .await?;

    let total = ids.len() as u64;
    Ok(IdSearchResult { ids, total })
}

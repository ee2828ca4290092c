use rand::Rng;
use uuid::Uuid;

use crate::context::Context;
use crate::seed::SeedError;
use crate::store::{Criteria, IdStore};

/// Upper bound on candidate ids fetched per entity type.
pub(crate) const POOL_LIMIT: u32 = 100;

/// Per-invocation cache of candidate foreign keys.
///
/// Each pool is populated at most once per invocation, so every random
/// pick for an entity type draws from the same fixed sample. The struct
/// is owned by the invocation and discarded with it; there is no hidden
/// instance state shared across runs.
#[derive(Debug, Default)]
pub struct IdPools {
    products: Option<Vec<Uuid>>,
    categories: Option<Vec<Uuid>>,
    media: Option<Vec<Uuid>>,
}

impl IdPools {
    pub async fn random_product_id<S: IdStore>(
        &mut self,
        store: &S,
        rng: &mut impl Rng,
        ctx: &Context,
    ) -> Result<Uuid, SeedError> {
        Self::pick_cached(store, &mut self.products, "product", rng, ctx).await
    }

    pub async fn random_category_id<S: IdStore>(
        &mut self,
        store: &S,
        rng: &mut impl Rng,
        ctx: &Context,
    ) -> Result<Uuid, SeedError> {
        Self::pick_cached(store, &mut self.categories, "category", rng, ctx).await
    }

    pub async fn random_media_id<S: IdStore>(
        &mut self,
        store: &S,
        rng: &mut impl Rng,
        ctx: &Context,
    ) -> Result<Uuid, SeedError> {
        Self::pick_cached(store, &mut self.media, "media", rng, ctx).await
    }

    async fn pick_cached<S: IdStore>(
        store: &S,
        pool: &mut Option<Vec<Uuid>>,
        entity: &'static str,
        rng: &mut impl Rng,
        ctx: &Context,
    ) -> Result<Uuid, SeedError> {
        if let Some(ids) = pool {
            return Self::draw(ids, entity, rng);
        }

        let found = store
            .search_ids(&Criteria::with_limit(POOL_LIMIT), ctx)
            .await?;
        tracing::debug!(entity, count = found.ids.len(), "populated id pool");

        Self::draw(pool.insert(found.ids), entity, rng)
    }

    fn draw(ids: &[Uuid], entity: &'static str, rng: &mut impl Rng) -> Result<Uuid, SeedError> {
        if ids.is_empty() {
            return Err(SeedError::NoCandidateRecords { entity });
        }
        Ok(ids[rng.random_range(0..ids.len())])
    }
}

//! One-shot demo landing-page seeder.
//!
//! Builds a single fixed-layout page from randomized catalog references
//! and persists it through the [`PageStore`] seam. Best effort: no
//! retries, no partial-failure recovery.

pub mod pools;
pub mod text;

use rand::Rng;
use thiserror::Error;
use uuid::Uuid;

use crate::context::Context;
use crate::page::model::{
    BlockSlot, BlockType, ContentBlock, DemoPage, PageType, SlotConfig, SlotPosition, SlotType,
};
use crate::store::{Criteria, IdStore, PageStore, RepositoryError};

use pools::IdPools;

/// Upper bound on previously generated pages visible to one reset pass.
const RESET_SEARCH_LIMIT: u32 = 999;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("no candidate records in source collection `{entity}`")]
    NoCandidateRecords { entity: &'static str },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Seeds one demo landing page per [`run`](PageSeeder::run) call.
pub struct PageSeeder<P, S> {
    pages: P,
    products: S,
    categories: S,
    media: S,
}

impl<P: PageStore, S: IdStore> PageSeeder<P, S> {
    pub fn new(pages: P, products: S, categories: S, media: S) -> Self {
        Self {
            pages,
            products,
            categories,
            media,
        }
    }

    /// Create one demo page, optionally purging previously generated
    /// pages first. Returns the id of the created page.
    pub async fn run(&self, reset_existing: bool, ctx: &Context) -> Result<Uuid, SeedError> {
        if reset_existing {
            self.reset_pages(ctx).await?;
        }

        let mut pools = IdPools::default();
        let mut rng = rand::rng();
        let page = self.build_page(&mut pools, &mut rng, ctx).await?;
        let id = page.id;

        self.pages.create(&[page], ctx).await?;
        tracing::info!(%id, "created demo page");

        Ok(id)
    }

    async fn reset_pages(&self, ctx: &Context) -> Result<(), SeedError> {
        let found = self
            .pages
            .search_ids(&Criteria::with_limit(RESET_SEARCH_LIMIT), ctx)
            .await?;

        if found.total == 0 {
            return Ok(());
        }

        tracing::info!(total = found.total, "deleting previously generated pages");
        self.pages.delete(&found.ids, ctx).await?;
        Ok(())
    }

    /// Assemble the fixed four-block landing page. Only config values
    /// vary between runs; the block and slot layout is constant.
    async fn build_page(
        &self,
        pools: &mut IdPools,
        rng: &mut impl Rng,
        ctx: &Context,
    ) -> Result<DemoPage, SeedError> {
        let blocks = vec![
            ContentBlock {
                block_type: BlockType::ImageText,
                slots: vec![
                    BlockSlot {
                        slot_type: SlotType::ProductBox,
                        position: SlotPosition::Left,
                        config: SlotConfig::ProductBox {
                            product_id: pools.random_product_id(&self.products, rng, ctx).await?,
                        },
                    },
                    BlockSlot {
                        slot_type: SlotType::Image,
                        position: SlotPosition::Right,
                        config: SlotConfig::Image {
                            url: text::random_image_url(rng),
                        },
                    },
                ],
            },
            ContentBlock {
                block_type: BlockType::ImageText,
                slots: vec![
                    BlockSlot {
                        slot_type: SlotType::Text,
                        position: SlotPosition::Left,
                        config: SlotConfig::Text {
                            content: text::paragraph(rng),
                        },
                    },
                    BlockSlot {
                        slot_type: SlotType::ProductBox,
                        position: SlotPosition::Right,
                        config: SlotConfig::ProductBox {
                            product_id: pools.random_product_id(&self.products, rng, ctx).await?,
                        },
                    },
                ],
            },
            ContentBlock {
                block_type: BlockType::ImageText,
                slots: vec![
                    BlockSlot {
                        slot_type: SlotType::Text,
                        position: SlotPosition::Right,
                        config: SlotConfig::Text {
                            content: text::paragraph(rng),
                        },
                    },
                    BlockSlot {
                        slot_type: SlotType::Image,
                        position: SlotPosition::Left,
                        config: SlotConfig::Media {
                            media_id: pools.random_media_id(&self.media, rng, ctx).await?,
                        },
                    },
                ],
            },
            ContentBlock {
                block_type: BlockType::Listing,
                slots: vec![BlockSlot {
                    slot_type: SlotType::ProductListing,
                    position: SlotPosition::Listing,
                    config: SlotConfig::ProductListing {
                        category_id: pools.random_category_id(&self.categories, rng, ctx).await?,
                    },
                }],
            },
        ];

        Ok(DemoPage {
            id: Uuid::new_v4(),
            name: text::company_name(rng),
            page_type: PageType::LandingPage,
            blocks,
        })
    }
}

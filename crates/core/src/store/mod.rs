//! Persistence seams consumed by the seeder.
//!
//! These traits mirror the surrounding framework's repository surface
//! (`create` / `search_ids` / `delete`); all real query semantics live
//! behind them. Failures propagate unchanged — no local retry.

pub mod pg;

use thiserror::Error;
use uuid::Uuid;

use crate::context::Context;
use crate::page::model::DemoPage;

/// Query specification for id searches.
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    pub limit: Option<u32>,
}

impl Criteria {
    pub fn with_limit(limit: u32) -> Self {
        Self { limit: Some(limit) }
    }
}

/// Result of an id search: the visible ids plus the matched total.
/// With the default count mode, `total` is the number of returned ids.
#[derive(Debug, Clone)]
pub struct IdSearchResult {
    pub ids: Vec<Uuid>,
    pub total: u64,
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("backend error: {0}")]
    Backend(String),
}

/// A collection that can be searched for primary keys.
pub trait IdStore {
    fn search_ids(
        &self,
        criteria: &Criteria,
        ctx: &Context,
    ) -> impl std::future::Future<Output = Result<IdSearchResult, RepositoryError>>;
}

/// The demo-page collection: id search plus batch create and delete.
pub trait PageStore: IdStore {
    fn create(
        &self,
        pages: &[DemoPage],
        ctx: &Context,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>>;

    fn delete(
        &self,
        ids: &[Uuid],
        ctx: &Context,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>>;
}

// Port for the document store that owns persisted deals.
//
// Responsibilities
// - Narrow candidates by exact country and format, newest first, bounded by a limit.
// - Persist a validated deal, assigning its id and a server-side creation timestamp.
//
// Boundaries
// - Coordination between concurrent writers is the store's concern, not the caller's.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::deals::core::deal::{Deal, Market, NewDeal};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Backend(String),
}

#[async_trait]
pub trait DealStore: Send + Sync {
    /// Deals in `market`, ordered by `createdAt` descending, at most `limit` of them.
    async fn list_recent(&self, market: Market, limit: usize) -> Result<Vec<Deal>, StoreError>;

    /// Persists `deal` and returns the identifier assigned by the store.
    async fn insert(&self, deal: NewDeal) -> Result<String, StoreError>;
}

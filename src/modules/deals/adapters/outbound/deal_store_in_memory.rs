// In memory implementation of the DealStore port.
//
// Purpose
// - Support handler tests and local development without the managed document store.
//
// Responsibilities
// - Keep deals in insertion order and assign ids and strictly increasing creation timestamps.
// - Answer recency queries scoped to a market.

use crate::modules::deals::adapters::outbound::deal_store::{DealStore, StoreError};
use crate::modules::deals::core::deal::{Deal, Market, NewDeal};
use crate::shared::infrastructure::store_provider::{InitError, ServiceAccount, StoreConnector};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryDealStore {
    deals: RwLock<Vec<Deal>>,
    offline: AtomicBool,
}

impl InMemoryDealStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.offline.fetch_xor(true, Ordering::SeqCst);
    }

    /// Stores `deal` as is, bypassing validation. Used to load existing records.
    pub async fn seed(&self, deal: Deal) {
        self.deals.write().await.push(deal);
    }

    pub async fn len(&self) -> usize {
        self.deals.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("Deal store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl DealStore for InMemoryDealStore {
    async fn list_recent(&self, market: Market, limit: usize) -> Result<Vec<Deal>, StoreError> {
        self.ensure_online()?;
        let guard = self.deals.read().await;
        let mut matching: Vec<Deal> = guard
            .iter()
            .rev()
            .filter(|deal| market.contains(&deal.country, &deal.format))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matching.truncate(limit);
        Ok(matching)
    }

    async fn insert(&self, deal: NewDeal) -> Result<String, StoreError> {
        self.ensure_online()?;
        let mut guard = self.deals.write().await;
        let latest = guard.iter().map(|d| d.created_at).max().unwrap_or(i64::MIN);
        let created_at = Utc::now().timestamp_millis().max(latest.saturating_add(1));
        let id = Uuid::now_v7().to_string();
        guard.push(deal.into_deal(id.clone(), created_at));
        Ok(id)
    }
}

/// Hands out a shared in-memory store once credentials have been checked.
pub struct InMemoryDealStoreConnector {
    store: Arc<InMemoryDealStore>,
}

impl InMemoryDealStoreConnector {
    pub fn new(store: Arc<InMemoryDealStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl StoreConnector<dyn DealStore> for InMemoryDealStoreConnector {
    async fn connect(&self, account: &ServiceAccount) -> Result<Arc<dyn DealStore>, InitError> {
        tracing::info!(project_id = %account.project_id, "using in-memory deal store");
        let store: Arc<dyn DealStore> = self.store.clone();
        Ok(store)
    }
}

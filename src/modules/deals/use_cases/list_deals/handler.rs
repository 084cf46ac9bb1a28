use crate::modules::deals::adapters::outbound::deal_store::DealStore;
use crate::modules::deals::core::deal::{Deal, Market};
use crate::modules::deals::core::errors::ApplicationError;
use crate::modules::deals::use_cases::list_deals::filter::{CANDIDATE_LIMIT, filter_and_rank};
use crate::modules::deals::use_cases::list_deals::query::DealQuery;
use std::sync::Arc;

pub struct ListDealsHandler {
    store: Arc<dyn DealStore>,
}

impl ListDealsHandler {
    pub fn new(store: Arc<dyn DealStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: &DealQuery) -> Result<Vec<Deal>, ApplicationError> {
        let candidates = self
            .store
            .list_recent(Market::FR_PHYSICAL, CANDIDATE_LIMIT)
            .await?;
        let scanned = candidates.len();
        let deals = filter_and_rank(candidates, query);
        tracing::info!(scanned, returned = deals.len(), "deals listed");
        Ok(deals)
    }
}

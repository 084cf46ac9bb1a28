use crate::modules::deals::adapters::outbound::deal_store::DealStore;
use crate::shared::infrastructure::store_provider::StoreProvider;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub stores: Arc<StoreProvider<dyn DealStore>>,
    pub admin_token: Option<String>,
}

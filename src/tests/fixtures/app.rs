// Shared helpers for driving the axum router in tests.

use axum::response::Response;
use http_body_util::BodyExt;
use std::sync::Arc;

use crate::modules::deals::adapters::outbound::deal_store::DealStore;
use crate::modules::deals::adapters::outbound::deal_store_in_memory::{
    InMemoryDealStore, InMemoryDealStoreConnector,
};
use crate::shared::infrastructure::store_provider::StoreProvider;
use crate::shell::state::AppState;

pub const TOKEN: &str = "admin-token-0001";
pub const CREDENTIALS: &str = r#"{"project_id":"deals-test"}"#;

pub fn test_state(store: Arc<InMemoryDealStore>, admin_token: Option<&str>) -> AppState {
    let connector = Arc::new(InMemoryDealStoreConnector::new(store));
    let stores = StoreProvider::<dyn DealStore>::new(Some(CREDENTIALS.to_string()), connector);
    AppState {
        stores: Arc::new(stores),
        admin_token: admin_token.map(String::from),
    }
}

/// State with neither store credentials nor an admin secret.
pub fn unconfigured_state() -> AppState {
    let store = Arc::new(InMemoryDealStore::new());
    let connector = Arc::new(InMemoryDealStoreConnector::new(store));
    AppState {
        stores: Arc::new(StoreProvider::<dyn DealStore>::new(None, connector)),
        admin_token: None,
    }
}

pub async fn read_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

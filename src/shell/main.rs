use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use deals::modules::deals::adapters::outbound::deal_store::DealStore;
use deals::modules::deals::adapters::outbound::deal_store_in_memory::{
    InMemoryDealStore, InMemoryDealStoreConnector,
};
use deals::shared::infrastructure::store_provider::StoreProvider;
use deals::shell::config::AppConfig;
use deals::shell::http::{DEALS_PATH, router};
use deals::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    // In-memory store for now; the connector runs on the first GET or POST.
    let store = Arc::new(InMemoryDealStore::new());
    let connector = Arc::new(InMemoryDealStoreConnector::new(store));
    let stores = StoreProvider::<dyn DealStore>::new(config.store_credentials, connector);
    let state = AppState {
        stores: Arc::new(stores),
        admin_token: config.admin_token,
    };

    let app = router(state);

    tracing::info!("deals endpoint: http://{}{}", config.bind_addr, DEALS_PATH);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

// Process-wide, lazily initialized store client.
//
// Responsibilities
// - Parse the configured service account and connect on first use, never at startup.
// - Connect at most once, even when the first requests arrive concurrently.
// - Leave the cell empty on failure so a later request can try again.

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::OnceCell;

pub const CREDENTIALS_VAR: &str = "STORE_SERVICE_ACCOUNT";

#[derive(Debug, Error)]
pub enum InitError {
    #[error("Missing {} env var", CREDENTIALS_VAR)]
    MissingCredentials,

    #[error("invalid store credentials: {0}")]
    InvalidCredentials(#[from] serde_json::Error),

    #[error("store connection failed: {0}")]
    Connect(String),
}

/// The subset of a service-account key the store client needs. Other keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceAccount {
    pub project_id: String,
}

#[async_trait]
pub trait StoreConnector<T: ?Sized + Send + Sync>: Send + Sync {
    async fn connect(&self, account: &ServiceAccount) -> Result<Arc<T>, InitError>;
}

pub struct StoreProvider<T: ?Sized + Send + Sync> {
    credentials: Option<String>,
    connector: Arc<dyn StoreConnector<T>>,
    client: OnceCell<Arc<T>>,
}

impl<T: ?Sized + Send + Sync> StoreProvider<T> {
    pub fn new(credentials: Option<String>, connector: Arc<dyn StoreConnector<T>>) -> Self {
        Self {
            credentials,
            connector,
            client: OnceCell::new(),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.client.initialized()
    }

    pub async fn ensure_initialized(&self) -> Result<Arc<T>, InitError> {
        let client = self
            .client
            .get_or_try_init(|| async {
                let raw = self
                    .credentials
                    .as_deref()
                    .map(str::trim)
                    .filter(|raw| !raw.is_empty())
                    .ok_or(InitError::MissingCredentials)?;
                let account: ServiceAccount = serde_json::from_str(raw)?;
                let client = self.connector.connect(&account).await?;
                tracing::info!(project_id = %account.project_id, "store client initialized");
                Ok::<_, InitError>(client)
            })
            .await?;
        Ok(client.clone())
    }
}

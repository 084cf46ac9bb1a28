use crate::modules::deals::adapters::outbound::deal_store::DealStore;
use crate::modules::deals::core::errors::ApplicationError;
use crate::modules::deals::use_cases::create_deal::authorize::authorize;
use crate::modules::deals::use_cases::create_deal::command::parse_payload;
use crate::modules::deals::use_cases::create_deal::decide::decide_create;
use std::sync::Arc;

pub struct CreateDealHandler {
    store: Arc<dyn DealStore>,
    admin_token: Option<String>,
}

impl CreateDealHandler {
    pub fn new(store: Arc<dyn DealStore>, admin_token: Option<String>) -> Self {
        Self { store, admin_token }
    }

    /// Authorizes, validates and persists one submission, returning the new deal id.
    ///
    /// The payload is only read once the token has been accepted, and nothing is
    /// written unless every check passes.
    pub async fn handle(
        &self,
        supplied_token: Option<&str>,
        payload: &[u8],
    ) -> Result<String, ApplicationError> {
        authorize(self.admin_token.as_deref(), supplied_token)?;

        let command = parse_payload(payload)?;
        let deal = decide_create(command)?;
        let cut = deal.cut;

        let id = self.store.insert(deal).await?;
        tracing::info!(deal_id = %id, cut, "deal created");
        Ok(id)
    }
}

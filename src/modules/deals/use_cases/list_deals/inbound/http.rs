use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::modules::deals::core::deal::Deal;
use crate::modules::deals::core::errors::ApplicationError;
use crate::modules::deals::use_cases::list_deals::handler::ListDealsHandler;
use crate::modules::deals::use_cases::list_deals::query::{DealQuery, ListDealsParams};
use crate::shell::state::AppState;

type QueryPairs = Vec<(String, String)>;

pub async fn handle(
    State(state): State<AppState>,
    pairs: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<Vec<Deal>>, ApplicationError> {
    let pairs = pairs.map(|Query(pairs)| pairs).unwrap_or_default();
    let params = ListDealsParams::from_pairs(pairs);
    let store = state.stores.ensure_initialized().await?;
    let deals = ListDealsHandler::new(store)
        .handle(&DealQuery::from(params))
        .await?;
    Ok(Json(deals))
}

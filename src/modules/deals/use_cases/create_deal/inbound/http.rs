use axum::{Json, body::Bytes, extract::State, http::HeaderMap};
use serde::Serialize;

use crate::modules::deals::core::errors::ApplicationError;
use crate::modules::deals::use_cases::create_deal::handler::CreateDealHandler;
use crate::shell::state::AppState;

pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

#[derive(Debug, Serialize)]
pub struct CreateDealResponse {
    pub ok: bool,
    pub id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<CreateDealResponse>, ApplicationError> {
    let store = state.stores.ensure_initialized().await?;
    let token = headers
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());

    let id = CreateDealHandler::new(store, state.admin_token.clone())
        .handle(token, &body)
        .await?;

    Ok(Json(CreateDealResponse { ok: true, id }))
}

use thiserror::Error;

use crate::modules::deals::adapters::outbound::deal_store::StoreError;
use crate::modules::deals::use_cases::create_deal::decide::DecideError;
use crate::shared::infrastructure::store_provider::InitError;

/// Failures surfaced by the reader and writer. The shell maps these to responses.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("{0}")]
    Configuration(String),

    #[error(transparent)]
    Initialization(#[from] InitError),

    #[error("forbidden")]
    Forbidden,

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    Rejected(#[from] DecideError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

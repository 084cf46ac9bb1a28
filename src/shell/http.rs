use axum::{
    Json, Router,
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::modules::deals::core::errors::ApplicationError;
use crate::modules::deals::use_cases::create_deal::inbound::http as create_http;
use crate::modules::deals::use_cases::list_deals::inbound::http as list_http;
use crate::shell::state::AppState;

pub const DEALS_PATH: &str = "/deals";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: error.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match &self {
            ApplicationError::Forbidden => {
                tracing::warn!("deal submission rejected: bad admin token");
                error_response(StatusCode::FORBIDDEN, "forbidden")
            }
            ApplicationError::InvalidBody(reason) => {
                tracing::warn!(%reason, "deal submission rejected");
                error_response(StatusCode::BAD_REQUEST, "invalid_body")
            }
            ApplicationError::Rejected(reason) => {
                tracing::warn!(%reason, "deal submission rejected");
                error_response(StatusCode::BAD_REQUEST, reason.code())
            }
            ApplicationError::Configuration(_)
            | ApplicationError::Initialization(_)
            | ApplicationError::Store(_) => {
                tracing::error!(error = %self, "request failed");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        }
    }
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "method_not_allowed")
}

async fn fallback(method: Method) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    error_response(StatusCode::NOT_FOUND, "not_found")
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            DEALS_PATH,
            get(list_http::handle)
                .head(method_not_allowed)
                .post(create_http::handle)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .fallback(fallback)
        .with_state(state)
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type, X-Admin-Token"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ))
        .layer(TraceLayer::new_for_http())
}

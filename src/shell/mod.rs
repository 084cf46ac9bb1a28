// Composition root for the deals service.
//
// Responsibilities
// - Read config from environment.
// - Wire the lazily initialized store and the admin secret into the application state.
// - Dispatch requests by method and map application errors to JSON responses.

pub mod config;
pub mod http;
pub mod state;

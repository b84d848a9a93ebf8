//! HTTP transport for the triage engine.
//!
//! `POST /chat` accepts `{"message": "..."}` and returns a `type`-tagged
//! outcome; `GET /health` reports liveness. Requests pass through
//! CORS → audit logging → handler.
//!
//! The router is composable: `api_router()` returns a `Router` that can
//! be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{start_server, ServerError, ServerHandle, ServerSession};
pub use types::ApiContext;

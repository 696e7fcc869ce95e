//! # Agent Exposure Assessment API
//!
//! HTTP shell around the assessment core. Each session owns an isolated
//! [`AssessmentState`](agent_exposure_assessment::AssessmentState); the server
//! only forwards calls and renders the resulting state as JSON.
//!
//! ## Endpoints
//!
//! ```text
//! GET    /health
//! GET    /questions
//! POST   /assess                              <- complete profile in, result out
//! POST   /sessions                            <- new session at step 1
//! GET    /sessions/{id}
//! DELETE /sessions/{id}
//! PUT    /sessions/{id}/answers/{step}        <- {"value": ...}
//! POST   /sessions/{id}/advance | retreat | reset
//! GET    /sessions/{id}/result
//! GET    /api-doc/openapi.json
//! ```
//!
//! ## Error Handling
//!
//! Errors are returned as `ErrorResponse` JSON with a machine-readable code:
//!
//! - `VALIDATION_ERROR` (400): unanswered step on advance, or out-of-domain value
//! - `SESSION_NOT_FOUND` (404)
//! - `INVALID_TRANSITION` (409): retreat from step 1, advance past results,
//!   result requested before results
//! - `INCOMPLETE_PROFILE` (422): scoring a partial profile
//! - `SESSION_LIMIT` (503)

pub mod error;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod sessions;
pub mod types;

pub use error::ApiError;
pub use server::{AppState, ExposureServer};
pub use types::*;

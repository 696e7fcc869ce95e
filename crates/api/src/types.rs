//! Type definitions for the assessment API

use agent_exposure_assessment::AssessmentState;
use agent_exposure_common::{AgentProfile, SessionId, Step, StepPosition};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Snapshot of one assessment session, returned after every session call
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    /// Session identifier to use in subsequent calls
    pub session_id: SessionId,

    /// Current step number (1-5), or `"results"`
    #[schema(value_type = Object)]
    pub current_step: StepPosition,

    /// Answers recorded so far
    pub profile: AgentProfile,

    /// Steps still unanswered, in order
    pub missing: Vec<Step>,

    /// Whether all five answers are present
    pub complete: bool,
}

impl SessionView {
    pub fn new(session_id: SessionId, state: &AssessmentState) -> Self {
        Self {
            session_id,
            current_step: state.current_step(),
            profile: state.profile().clone(),
            missing: state.profile().missing(),
            complete: state.is_complete(),
        }
    }
}

/// Request body for answering a step
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AnswerRequest {
    /// `true`/`false` for yes/no steps, an option value or label otherwise
    #[schema(value_type = Object)]
    pub value: serde_json::Value,
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status
    pub status: String,

    /// Number of open assessment sessions
    pub active_sessions: usize,

    /// Timestamp of health check
    pub timestamp: DateTime<Utc>,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Machine-readable error code
    pub code: Option<String>,

    /// Timestamp of error
    pub timestamp: DateTime<Utc>,
}

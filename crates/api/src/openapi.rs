//! OpenAPI document configuration
//!
//! Generated from the route handlers and types with utoipa and served at
//! `/api-doc/openapi.json`.

use agent_exposure_assessment::{AnswerOption, Contribution, Question};
use agent_exposure_common::{
    AgentProfile, AssessmentResult, AutonomyLevel, CompleteProfile, DataSensitivity,
    DecisionImpact, ExposureTier, SessionId, Step,
};
use axum::Json;
use utoipa::OpenApi;

use crate::routes;
use crate::types::*;

/// OpenAPI document for the assessment API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Agent Exposure Assessment API",
        description = "
Guided questionnaire that scores an AI agent's deployment configuration.

## Usage Pattern

1. **Create a session**: POST `/sessions`
2. **Answer the current step**: PUT `/sessions/{session_id}/answers/{step}`
3. **Advance**: POST `/sessions/{session_id}/advance` (repeat for steps 1-5)
4. **Read the result**: GET `/sessions/{session_id}/result`

`POST /assess` scores a complete profile in one call.

## Scoring

Autonomy, data sensitivity and decision impact add 1-3 points each, tool access
adds 3 and public input adds 2. Scores of 6 or less are Low exposure, 7-11
Moderate, 12 or more High.
",
        version = "0.1.0"
    ),
    paths(
        routes::health::health,
        routes::questions::list_questions,
        routes::assess::assess_profile,
        routes::sessions::create_session,
        routes::sessions::get_session,
        routes::sessions::delete_session,
        routes::sessions::set_answer,
        routes::sessions::advance,
        routes::sessions::retreat,
        routes::sessions::reset,
        routes::sessions::get_result,
    ),
    components(schemas(
        AgentProfile,
        CompleteProfile,
        AssessmentResult,
        AutonomyLevel,
        DataSensitivity,
        DecisionImpact,
        ExposureTier,
        SessionId,
        Step,
        Question,
        AnswerOption,
        Contribution,
        SessionView,
        AnswerRequest,
        HealthResponse,
        ErrorResponse,
    )),
    tags(
        (name = "System", description = "Health checks"),
        (name = "Assessment", description = "Question catalog and stateless scoring"),
        (name = "Sessions", description = "Step-by-step questionnaire sessions"),
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

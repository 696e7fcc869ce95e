use agent_exposure_assessment::compute_result;
use agent_exposure_common::{AgentProfile, AssessmentResult};
use axum::{body::Bytes, Json};
use tracing::{info, instrument};

use crate::error::ApiError;

/// Score a complete profile in one call
///
/// Stateless counterpart of the session flow. Every field is required;
/// a partial profile is rejected with `INCOMPLETE_PROFILE` and the list of
/// missing fields rather than scored with defaults. Field values accept the
/// same labels and aliases as `PUT /sessions/{session_id}/answers/{step}`.
#[utoipa::path(
    post,
    path = "/assess",
    request_body = AgentProfile,
    responses(
        (status = 200, description = "Assessment result", body = AssessmentResult),
        (status = 400, description = "Malformed body or out-of-domain value", body = crate::types::ErrorResponse),
        (status = 422, description = "Profile is missing fields", body = crate::types::ErrorResponse),
    ),
    tag = "Assessment"
)]
#[instrument(skip(body), fields(body_size = body.len()))]
pub async fn assess_profile(body: Bytes) -> Result<Json<AssessmentResult>, ApiError> {
    let value: serde_json::Value = super::parse_body(&body, "profile")?;
    let profile = AgentProfile::from_json(&value)?;

    let result = compute_result(&profile)?;
    info!(
        score = result.score,
        tier = %result.exposure_tier,
        "Assessed profile"
    );
    Ok(Json(result))
}

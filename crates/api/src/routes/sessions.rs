//! Session routes
//!
//! Drive one [`AssessmentState`](agent_exposure_assessment::AssessmentState)
//! per session through the questionnaire. Each call returns the updated
//! [`SessionView`] so the caller can re-render.

use agent_exposure_common::{Answer, AssessmentResult, ExposureError, SessionId, Step};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};

use crate::{
    error::ApiError,
    server::AppState,
    types::{AnswerRequest, SessionView},
};

/// Start a new assessment at step 1
#[utoipa::path(
    post,
    path = "/sessions",
    responses(
        (status = 201, description = "Session created", body = SessionView),
        (status = 503, description = "Too many open sessions", body = crate::types::ErrorResponse),
    ),
    tag = "Sessions"
)]
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionView>), ApiError> {
    let (id, session) = state.sessions.create()?;
    Ok((StatusCode::CREATED, Json(SessionView::new(id, &session))))
}

/// Current step and answers of a session
#[utoipa::path(
    get,
    path = "/sessions/{session_id}",
    params(("session_id" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Session snapshot", body = SessionView),
        (status = 404, description = "Session not found", body = crate::types::ErrorResponse),
    ),
    tag = "Sessions"
)]
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionView>, ApiError> {
    let id: SessionId = session_id.parse()?;
    let view = state
        .sessions
        .read(id, |session| Ok(SessionView::new(id, session)))?;
    Ok(Json(view))
}

/// Discard a session and its answers
#[utoipa::path(
    delete,
    path = "/sessions/{session_id}",
    params(("session_id" = String, Path, description = "Session ID")),
    responses(
        (status = 204, description = "Session discarded"),
        (status = 404, description = "Session not found", body = crate::types::ErrorResponse),
    ),
    tag = "Sessions"
)]
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: SessionId = session_id.parse()?;
    state.sessions.remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Record the answer for one step without moving
#[utoipa::path(
    put,
    path = "/sessions/{session_id}/answers/{step}",
    params(
        ("session_id" = String, Path, description = "Session ID"),
        ("step" = String, Path, description = "Step number, 1-5"),
    ),
    request_body = AnswerRequest,
    responses(
        (status = 200, description = "Answer recorded", body = SessionView),
        (status = 400, description = "Value outside the step's domain", body = crate::types::ErrorResponse),
        (status = 404, description = "Session not found", body = crate::types::ErrorResponse),
    ),
    tag = "Sessions"
)]
pub async fn set_answer(
    State(state): State<AppState>,
    Path((session_id, step)): Path<(String, String)>,
    body: Bytes,
) -> Result<Json<SessionView>, ApiError> {
    let id: SessionId = session_id.parse()?;
    let step = parse_step(&step)?;
    let request: AnswerRequest = super::parse_body(&body, "answer")?;
    let answer = Answer::from_json(step, &request.value)?;

    let view = state.sessions.update(id, |session| {
        session.set_answer(step, answer)?;
        Ok(SessionView::new(id, session))
    })?;
    debug!(session_id = %id, %step, %answer, "Answer recorded");
    Ok(Json(view))
}

/// Move to the next step; the current step must be answered
#[utoipa::path(
    post,
    path = "/sessions/{session_id}/advance",
    params(("session_id" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Moved forward", body = SessionView),
        (status = 400, description = "Current step unanswered", body = crate::types::ErrorResponse),
        (status = 409, description = "Already at results", body = crate::types::ErrorResponse),
        (status = 404, description = "Session not found", body = crate::types::ErrorResponse),
    ),
    tag = "Sessions"
)]
pub async fn advance(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionView>, ApiError> {
    let id: SessionId = session_id.parse()?;
    let view = state.sessions.update(id, |session| {
        session.advance()?;
        Ok(SessionView::new(id, session))
    })?;
    Ok(Json(view))
}

/// Move back one step, keeping all answers
#[utoipa::path(
    post,
    path = "/sessions/{session_id}/retreat",
    params(("session_id" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Moved back", body = SessionView),
        (status = 409, description = "Already at step 1", body = crate::types::ErrorResponse),
        (status = 404, description = "Session not found", body = crate::types::ErrorResponse),
    ),
    tag = "Sessions"
)]
pub async fn retreat(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionView>, ApiError> {
    let id: SessionId = session_id.parse()?;
    let view = state.sessions.update(id, |session| {
        session.retreat()?;
        Ok(SessionView::new(id, session))
    })?;
    Ok(Json(view))
}

/// Clear all answers and return to step 1
#[utoipa::path(
    post,
    path = "/sessions/{session_id}/reset",
    params(("session_id" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Session reset", body = SessionView),
        (status = 404, description = "Session not found", body = crate::types::ErrorResponse),
    ),
    tag = "Sessions"
)]
pub async fn reset(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionView>, ApiError> {
    let id: SessionId = session_id.parse()?;
    let view = state.sessions.update(id, |session| {
        session.reset();
        Ok(SessionView::new(id, session))
    })?;
    Ok(Json(view))
}

/// Score the session once it reached the results step
#[utoipa::path(
    get,
    path = "/sessions/{session_id}/result",
    params(("session_id" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Assessment result", body = AssessmentResult),
        (status = 409, description = "Session has not reached results", body = crate::types::ErrorResponse),
        (status = 422, description = "Profile is missing answers", body = crate::types::ErrorResponse),
        (status = 404, description = "Session not found", body = crate::types::ErrorResponse),
    ),
    tag = "Sessions"
)]
pub async fn get_result(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<AssessmentResult>, ApiError> {
    let id: SessionId = session_id.parse()?;
    let result = state.sessions.read(id, |session| session.compute_result())?;
    info!(
        session_id = %id,
        score = result.score,
        tier = %result.exposure_tier,
        "Session assessed"
    );
    Ok(Json(result))
}

fn parse_step(raw: &str) -> Result<Step, ExposureError> {
    let number = raw.trim().parse::<u8>().map_err(|_| {
        ExposureError::validation(format!("step must be a number from 1 to 5, got '{}'", raw))
    })?;
    Step::from_number(number)
}

use agent_exposure_assessment::{catalog, Question};
use axum::Json;

/// List the five questions with their help text and selectable options
#[utoipa::path(
    get,
    path = "/questions",
    responses(
        (status = 200, description = "Question catalog in step order", body = [Question]),
    ),
    tag = "Assessment"
)]
pub async fn list_questions() -> Json<Vec<Question>> {
    Json(catalog())
}

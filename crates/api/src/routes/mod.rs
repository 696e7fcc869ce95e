use agent_exposure_common::ExposureError;
use serde::de::DeserializeOwned;

pub mod assess;
pub mod health;
pub mod questions;
pub mod sessions;

/// Decode a request body, reporting syntax and shape errors as validation failures
pub(crate) fn parse_body<T: DeserializeOwned>(body: &[u8], what: &str) -> Result<T, ExposureError> {
    serde_json::from_slice(body).map_err(|e| {
        ExposureError::validation(format!(
            "Invalid {} at line {}, column {}: {}",
            what,
            e.line(),
            e.column(),
            e
        ))
    })
}

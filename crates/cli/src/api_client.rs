use agent_exposure_common::{AssessmentResult, CompleteProfile};
use anyhow::{Context, Result};
use serde::Deserialize;

/// Client for the assessment API server
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
    code: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Score a complete profile with `POST /assess`
    pub async fn assess(&self, profile: &CompleteProfile) -> Result<AssessmentResult> {
        let url = format!("{}/assess", self.base_url);
        tracing::debug!(%url, "Requesting remote assessment");

        let response = self
            .client
            .post(&url)
            .json(profile)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            match serde_json::from_str::<ErrorBody>(&body) {
                Ok(err) => anyhow::bail!(
                    "Assessment failed ({}): {} [{}]",
                    status,
                    err.error,
                    err.code.as_deref().unwrap_or("UNKNOWN")
                ),
                Err(_) => anyhow::bail!("Assessment failed: {}", status),
            }
        }

        response
            .json::<AssessmentResult>()
            .await
            .context("Invalid assessment response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::core::adapter::ExternalMatch;
use crate::models::{Persona, Profile};

/// Errors that can occur when calling the remote matching service
#[derive(Debug, Error)]
pub enum MatchServiceError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Payload returned by the remote matching service
#[derive(Debug, Deserialize)]
pub struct RemoteMatchResponse {
    #[serde(default)]
    pub matches: Vec<ExternalMatch>,
    #[serde(default)]
    pub persona: Option<Persona>,
}

/// Client for the remote matching service.
///
/// One POST per search; no retries. A failed or empty response is not an
/// error at the service boundary above this one, it just routes the
/// search to the built-in catalog.
pub struct RemoteMatchClient {
    base_url: String,
    client: Client,
}

impl RemoteMatchClient {
    pub fn new(base_url: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a completed profile and collect the remote shortlist
    pub async fn find_matches(
        &self,
        profile: &Profile,
    ) -> Result<RemoteMatchResponse, MatchServiceError> {
        let url = format!("{}/api/match", self.base_url.trim_end_matches('/'));

        tracing::debug!("Requesting remote matches from: {}", url);

        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "answers": profile }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MatchServiceError::ApiError(format!(
                "Match request failed: {}",
                response.status()
            )));
        }

        let payload: RemoteMatchResponse = response
            .json()
            .await
            .map_err(|e| MatchServiceError::InvalidResponse(e.to_string()))?;

        tracing::debug!("Remote service returned {} matches", payload.matches.len());

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnswerValue, ProfileField};

    fn sample_profile() -> Profile {
        let mut profile = Profile::new();
        profile.set(ProfileField::Location, AnswerValue::Single("Cork".into()));
        profile.set(ProfileField::Budget, AnswerValue::Single("€200K – €400K".into()));
        profile
    }

    #[tokio::test]
    async fn test_find_matches_parses_payload() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/match")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "matches": [
                        {
                            "property": {"id": "r1", "price": 310000, "city": "Cork"},
                            "score": 91.0,
                            "highlights": ["In Cork"]
                        }
                    ],
                    "persona": {"title": "The Smart Buyer", "emoji": "🏡", "description": "Methodical."}
                }"#,
            )
            .create_async()
            .await;

        let client = RemoteMatchClient::new(server.url(), 5);
        let payload = client.find_matches(&sample_profile()).await.unwrap();

        assert_eq!(payload.matches.len(), 1);
        assert_eq!(payload.persona.unwrap().title, "The Smart Buyer");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_server_error_surfaces_as_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/match")
            .with_status(502)
            .create_async()
            .await;

        let client = RemoteMatchClient::new(server.url(), 5);
        let result = client.find_matches(&sample_profile()).await;
        assert!(matches!(result, Err(MatchServiceError::ApiError(_))));
    }

    #[tokio::test]
    async fn test_missing_fields_default_to_empty() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/match")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{}")
            .create_async()
            .await;

        let client = RemoteMatchClient::new(server.url(), 5);
        let payload = client.find_matches(&sample_profile()).await.unwrap();
        assert!(payload.matches.is_empty());
        assert!(payload.persona.is_none());
    }
}

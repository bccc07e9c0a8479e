use serde::{Deserialize, Serialize};

use crate::models::domain::{MatchResult, Persona};

/// Where a search result set came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchSource {
    Remote,
    Local,
}

/// Response for the search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub search_id: String,
    pub persona: Persona,
    pub matches: Vec<MatchResult>,
    pub total_scored: usize,
    pub source: MatchSource,
}

/// Response for the question-set endpoint
#[derive(Debug, Clone, Serialize)]
pub struct QuestionSetResponse {
    pub market: Option<String>,
    pub questions: Vec<crate::core::flow::Question>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::Profile;

/// Request to run a property search against a completed quiz profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    pub answers: Profile,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 50))]
    pub limit: u16,
}

fn default_limit() -> u16 {
    5
}

/// Query parameters for the question-set endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSetQuery {
    pub market: Option<String>,
}

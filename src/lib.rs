//! homeAImatch Algo - Lifestyle-first property matching engine
//!
//! This library powers the homeAImatch buyer experience: a conversational
//! quiz collects a buyer profile, a weighted rubric scores property
//! listings against it, and a ranker produces an explainable shortlist.
//! Remote shortlists from the hosted matching service are adapted into
//! the same result shape, with the built-in catalog as fallback.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{build_question_set, classify, score, QuizFlow, Ranker};
pub use crate::models::{
    MatchResult, Persona, Profile, ProfileField, Property, ScoringWeights, SearchRequest,
    SearchResponse,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let flow = QuizFlow::new();
        assert!(!flow.is_complete());
        assert_eq!(ScoringWeights::default().max_points(), 163);
    }
}

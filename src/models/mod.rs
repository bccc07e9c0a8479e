// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AgentContact, AnswerValue, CommuteDestination, CommuteInfo, CommuteMinutes, Condition, Density, Market, MatchResult, Persona, Profile, ProfileField, Property, ScoringWeights, YardSize};
pub use requests::{QuestionSetQuery, SearchRequest};
pub use responses::{ErrorResponse, HealthResponse, MatchSource, QuestionSetResponse, SearchResponse};

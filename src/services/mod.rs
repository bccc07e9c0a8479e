// Service exports
pub mod matching;

pub use matching::{MatchServiceError, RemoteMatchClient, RemoteMatchResponse};

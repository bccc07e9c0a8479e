// Core algorithm exports
pub mod adapter;
pub mod catalog;
pub mod flow;
pub mod persona;
pub mod questions;
pub mod ranker;
pub mod scoring;

pub use adapter::{adapt, AdapterError, ExternalMatch, ExternalProperty};
pub use catalog::catalog_for;
pub use flow::{InputKind, Question, QuizFlow};
pub use persona::classify;
pub use questions::build_question_set;
pub use ranker::{Ranker, DEFAULT_LIMIT};
pub use scoring::{score, CriterionScore, RUBRIC};

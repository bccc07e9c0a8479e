use serde::Serialize;

use crate::core::questions::build_question_set;
use crate::models::{AnswerValue, Market, Profile, ProfileField};

/// Input type of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Single,
    Multi,
    Freetext,
    Search,
}

/// A static question definition
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: &'static str,
    /// Target profile field; `None` for purely informational prompts
    pub field: Option<ProfileField>,
    pub kind: InputKind,
    pub prompt: &'static str,
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_len: Option<usize>,
    /// Visibility predicate; a question is skipped entirely when this
    /// evaluates false against the profile at the time the flow reaches it
    #[serde(skip)]
    pub show_if: Option<fn(&Profile) -> bool>,
}

/// First visible question after `from`, or `None` when the flow is complete
pub fn next_visible_index(questions: &[Question], from: usize, profile: &Profile) -> Option<usize> {
    questions
        .iter()
        .enumerate()
        .skip(from + 1)
        .find(|(_, q)| q.show_if.map_or(true, |visible| visible(profile)))
        .map(|(index, _)| index)
}

/// The conversational question-flow state machine.
///
/// Collects the buyer profile one answer at a time with conditional
/// branching. The flow is the single writer of the profile; scoring only
/// ever sees a frozen, completed profile. Answering a completed flow or
/// answering with the wrong input kind is a programming defect and panics.
#[derive(Debug, Clone)]
pub struct QuizFlow {
    questions: Vec<Question>,
    current: Option<usize>,
    profile: Profile,
    selection: Vec<String>,
    answered: usize,
}

impl QuizFlow {
    /// Start a fresh quiz session. The question set is rebuilt for the
    /// selected market once the region answer arrives.
    pub fn new() -> Self {
        Self {
            questions: build_question_set(None),
            current: Some(0),
            profile: Profile::new(),
            selection: Vec::new(),
            answered: 0,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current.map(|index| &self.questions[index])
    }

    pub fn is_complete(&self) -> bool {
        self.current.is_none()
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// The frozen profile, available once the flow has finished
    pub fn completed_profile(&self) -> Option<&Profile> {
        if self.is_complete() {
            Some(&self.profile)
        } else {
            None
        }
    }

    pub fn answered_count(&self) -> usize {
        self.answered
    }

    /// Number of visible questions beyond the greeting, given the current
    /// profile. Used for step counters; shrinks as branching resolves.
    pub fn total_visible_count(&self) -> usize {
        self.questions
            .iter()
            .skip(1)
            .filter(|q| q.show_if.map_or(true, |visible| visible(&self.profile)))
            .count()
    }

    /// Type-ahead filter for the current search question: case-insensitive
    /// substring match over the option list.
    pub fn filtered_options(&self, input: &str) -> Vec<&str> {
        let question = self.expect_current(InputKind::Search, "filtered_options");
        let needle = input.to_lowercase();
        question
            .options
            .iter()
            .filter(|option| option.to_lowercase().contains(&needle))
            .map(|option| option.as_str())
            .collect()
    }

    /// Answer the current single-choice question and advance
    pub fn answer_single(&mut self, option: &str) {
        self.expect_current(InputKind::Single, "answer_single");
        self.record(AnswerValue::Single(option.to_string()));
    }

    /// Answer the current type-ahead question; a filtered option and
    /// submitted free text are both valid answers
    pub fn answer_search(&mut self, value: &str) {
        self.expect_current(InputKind::Search, "answer_search");
        self.record(AnswerValue::Single(value.to_string()));
    }

    /// Answer the current free-text question. Input is length-capped; an
    /// empty submission records the explicit "No preference" affordance so
    /// the question is always answerable.
    pub fn answer_text(&mut self, text: &str) {
        let question = self.expect_current(InputKind::Freetext, "answer_text");
        let cap = question.max_len.unwrap_or(200);
        let trimmed = text.trim();
        let answer = if trimmed.is_empty() {
            "No preference".to_string()
        } else {
            trimmed.chars().take(cap).collect()
        };
        self.record(AnswerValue::Text(answer));
    }

    /// Toggle one option in the transient multi-choice selection
    pub fn toggle_option(&mut self, option: &str) {
        self.expect_current(InputKind::Multi, "toggle_option");
        if let Some(position) = self.selection.iter().position(|o| o == option) {
            self.selection.remove(position);
        } else {
            self.selection.push(option.to_string());
        }
    }

    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    /// Commit the multi-choice selection and advance. Returns false and
    /// stays on the question when nothing is selected.
    pub fn commit_selection(&mut self) -> bool {
        self.expect_current(InputKind::Multi, "commit_selection");
        if self.selection.is_empty() {
            return false;
        }
        let selected = std::mem::take(&mut self.selection);
        self.record(AnswerValue::Multi(selected));
        true
    }

    fn expect_current(&self, kind: InputKind, operation: &str) -> &Question {
        let index = self
            .current
            .unwrap_or_else(|| panic!("{} called on a completed flow", operation));
        let question = &self.questions[index];
        if question.kind != kind {
            panic!(
                "{} called for question '{}' with input kind {:?}",
                operation, question.id, question.kind
            );
        }
        question
    }

    fn record(&mut self, value: AnswerValue) {
        let index = self.current.expect("flow already complete");
        let question = &self.questions[index];

        if let Some(field) = question.field {
            self.profile.set(field, value.clone());
        }
        if question.id == "greeting" {
            self.apply_region_selection(&value);
        }

        self.answered += 1;
        self.current = next_visible_index(&self.questions, index, &self.profile);
    }

    /// Dual-write for the region answer: besides seeding the location, the
    /// selected region determines the market and currency, and the question
    /// set is rebuilt so the location question offers that market's cities.
    fn apply_region_selection(&mut self, answer: &AnswerValue) {
        let text = answer.as_single().expect("region answer must be single-choice");
        let lower = text.to_lowercase();

        let market = if lower.contains("cork") || lower.contains("ireland") {
            Market::Ie
        } else if lower.contains("lourinh") || lower.contains("portugal") {
            Market::Pt
        } else {
            Market::Uk
        };
        let location_seed = match market {
            Market::Ie => "Cork".to_string(),
            Market::Pt => "Lourinhã".to_string(),
            Market::Uk => text.to_string(),
        };

        self.profile.set(ProfileField::Location, AnswerValue::Single(location_seed));
        self.profile
            .set(ProfileField::Market, AnswerValue::Single(market.code().to_string()));
        self.profile
            .set(ProfileField::Currency, AnswerValue::Single(market.currency().to_string()));

        self.questions = build_question_set(Some(market));
    }
}

impl Default for QuizFlow {
    fn default() -> Self {
        Self::new()
    }
}

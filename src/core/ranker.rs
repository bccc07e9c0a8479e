use crate::core::scoring::score;
use crate::models::{MatchResult, Profile, Property, ScoringWeights};

/// Default shortlist length
pub const DEFAULT_LIMIT: usize = 5;

/// Ranks a property catalog against a completed buyer profile.
///
/// Every catalog entry is scored exactly once, sorted by percentage
/// descending (stable with respect to catalog order on ties), and
/// truncated to the requested shortlist length.
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: ScoringWeights,
}

impl Ranker {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self { weights: ScoringWeights::default() }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn rank(&self, catalog: &[Property], profile: &Profile, limit: usize) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = catalog
            .iter()
            .map(|property| score(property, profile, &self.weights))
            .collect();

        // Vec::sort_by is stable, so catalog order breaks ties
        results.sort_by(|a, b| b.percentage.cmp(&a.percentage));
        results.truncate(limit);
        results
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::catalog_for;
    use crate::models::{AnswerValue, Market, ProfileField};

    fn cork_profile() -> Profile {
        let mut profile = Profile::new();
        profile.set(ProfileField::Location, AnswerValue::Single("Cork".into()));
        profile.set(ProfileField::Budget, AnswerValue::Single("€200K – €400K".into()));
        profile.set(ProfileField::Family, AnswerValue::Single("Just me".into()));
        profile.set(ProfileField::WorkFromHome, AnswerValue::Single("Fully remote".into()));
        profile.set(ProfileField::Condition, AnswerValue::Single("Don't care".into()));
        profile
    }

    #[test]
    fn test_rank_respects_limit() {
        let catalog = catalog_for(Market::Ie);
        let results = Ranker::with_default_weights().rank(&catalog, &cork_profile(), 3);
        assert!(results.len() <= 3);
    }

    #[test]
    fn test_rank_sorted_non_increasing() {
        let catalog = catalog_for(Market::Ie);
        let results = Ranker::with_default_weights().rank(&catalog, &cork_profile(), DEFAULT_LIMIT);
        for pair in results.windows(2) {
            assert!(pair[0].percentage >= pair[1].percentage);
        }
    }

    #[test]
    fn test_no_lower_scored_property_preferred() {
        let catalog = catalog_for(Market::Ie);
        let ranker = Ranker::with_default_weights();
        let profile = cork_profile();

        let shortlist = ranker.rank(&catalog, &profile, 2);
        let everything = ranker.rank(&catalog, &profile, catalog.len());

        let cutoff = shortlist.last().map(|m| m.percentage).unwrap_or(0);
        for excluded in everything.iter().skip(shortlist.len()) {
            assert!(excluded.percentage <= cutoff);
        }
    }

    #[test]
    fn test_ties_preserve_catalog_order() {
        let catalog = catalog_for(Market::Ie);
        // An empty profile scores every property zero
        let results = Ranker::with_default_weights().rank(&catalog, &Profile::new(), catalog.len());
        let ids: Vec<&str> = results.iter().map(|m| m.property.id.as_str()).collect();
        let expected: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, expected);
    }
}

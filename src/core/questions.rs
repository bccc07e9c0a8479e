use crate::core::flow::{InputKind, Question};
use crate::models::{Market, Profile, ProfileField};

fn opts(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn commutes_to_office(profile: &Profile) -> bool {
    matches!(
        profile.single(ProfileField::WorkFromHome),
        Some("Hybrid (2-3 days office)") | Some("Full-time in office")
    )
}

/// Build the question set for a market. Before the region answer arrives
/// the market is unknown, so the location question starts with no city
/// options; the flow rebuilds the set once the market is decided.
pub fn build_question_set(market: Option<Market>) -> Vec<Question> {
    let cities = market.map(|m| opts(m.cities())).unwrap_or_default();
    let budget_options = match market {
        Some(Market::Uk) => opts(&[
            "Under £200K",
            "£200K – £400K",
            "£400K – £600K",
            "£600K – £800K",
            "£800K+",
        ]),
        _ => opts(&[
            "Under €200K",
            "€200K – €400K",
            "€400K – €600K",
            "€600K – €800K",
            "€800K+",
        ]),
    };

    vec![
        Question {
            id: "greeting",
            field: None,
            kind: InputKind::Single,
            prompt: "Welcome to homeAImatch! I'll learn what matters to you and find properties that truly fit your life. Which region?",
            options: opts(&["Cork, Ireland", "Lourinhã, Portugal"]),
            placeholder: None,
            max_len: None,
            show_if: None,
        },
        Question {
            id: "location",
            field: Some(ProfileField::Location),
            kind: InputKind::Search,
            prompt: "Which city or area interests you?",
            options: cities,
            placeholder: Some("Type a city..."),
            max_len: None,
            show_if: None,
        },
        Question {
            id: "radius",
            field: Some(ProfileField::Radius),
            kind: InputKind::Single,
            prompt: "How far from the city centre would you consider?",
            options: opts(&[
                "Within 10 km",
                "Within 25 km",
                "Within 50 km",
                "Anywhere in the region",
            ]),
            placeholder: None,
            max_len: None,
            show_if: None,
        },
        Question {
            id: "budget",
            field: Some(ProfileField::Budget),
            kind: InputKind::Single,
            prompt: "Budget ceiling?",
            options: budget_options,
            placeholder: None,
            max_len: None,
            show_if: None,
        },
        Question {
            id: "lifestyle",
            field: Some(ProfileField::Lifestyle),
            kind: InputKind::Single,
            prompt: "What setting feels right?",
            options: opts(&[
                "City buzz — walkable & alive",
                "Suburban — space with access",
                "Countryside — nature & peace",
                "Flexible — wherever suits",
            ]),
            placeholder: None,
            max_len: None,
            show_if: None,
        },
        Question {
            id: "family",
            field: Some(ProfileField::Family),
            kind: InputKind::Single,
            prompt: "Who's moving in?",
            options: opts(&[
                "Just me",
                "Me and a partner",
                "Small family (1-2 kids)",
                "Larger family (3+ kids)",
                "Housemates",
            ]),
            placeholder: None,
            max_len: None,
            show_if: None,
        },
        Question {
            id: "workFromHome",
            field: Some(ProfileField::WorkFromHome),
            kind: InputKind::Single,
            prompt: "What's your work setup?",
            options: opts(&[
                "Fully remote",
                "Hybrid (2-3 days office)",
                "Full-time in office",
                "Retired / not working",
            ]),
            placeholder: None,
            max_len: None,
            show_if: None,
        },
        Question {
            id: "workDestination",
            field: Some(ProfileField::WorkDestination),
            kind: InputKind::Single,
            prompt: "Where do you commute to?",
            options: opts(&[
                "City centre",
                "Tech hub / business park",
                "Airport area",
                "Multiple locations",
            ]),
            placeholder: None,
            max_len: None,
            show_if: Some(commutes_to_office),
        },
        Question {
            id: "maxCommute",
            field: Some(ProfileField::MaxCommute),
            kind: InputKind::Single,
            prompt: "How long a commute would you accept?",
            options: opts(&["Under 15 min", "Under 30 min", "Under 45 min", "Don't mind"]),
            placeholder: None,
            max_len: None,
            show_if: Some(commutes_to_office),
        },
        Question {
            id: "condition",
            field: Some(ProfileField::Condition),
            kind: InputKind::Single,
            prompt: "How about renovation?",
            options: opts(&[
                "Move-in ready only",
                "Light cosmetic work ok",
                "Big project — bring it on!",
                "Don't care",
            ]),
            placeholder: None,
            max_len: None,
            show_if: None,
        },
        Question {
            id: "neighborhoodVibe",
            field: Some(ProfileField::NeighborhoodVibe),
            kind: InputKind::Multi,
            prompt: "What neighbourhood personality? Pick all that fit.",
            options: opts(&[
                "Family-friendly",
                "Nightlife & dining",
                "Artsy & creative",
                "Quiet & peaceful",
                "Close to nature",
                "Upscale",
            ]),
            placeholder: None,
            max_len: None,
            show_if: None,
        },
        Question {
            id: "pets",
            field: Some(ProfileField::Pets),
            kind: InputKind::Single,
            prompt: "Any furry companions?",
            options: opts(&[
                "Dog(s) — need garden!",
                "Dog(s) — parks work",
                "Cat(s) only",
                "No pets",
                "Getting one soon",
            ]),
            placeholder: None,
            max_len: None,
            show_if: None,
        },
        Question {
            id: "parking",
            field: Some(ProfileField::Parking),
            kind: InputKind::Multi,
            prompt: "Parking needs?",
            options: opts(&[
                "Garage must-have",
                "Driveway fine",
                "Street ok",
                "EV charging",
                "No car",
            ]),
            placeholder: None,
            max_len: None,
            show_if: None,
        },
        Question {
            id: "mustHave",
            field: Some(ProfileField::MustHave),
            kind: InputKind::Freetext,
            prompt: "Anything essential in your new home? (e.g. garden, garage, sea view)",
            options: Vec::new(),
            placeholder: Some("Type here..."),
            max_len: Some(100),
            show_if: None,
        },
        Question {
            id: "priorities",
            field: Some(ProfileField::Priorities),
            kind: InputKind::Multi,
            prompt: "Nearly done! Top 3 priorities?",
            options: opts(&[
                "Short commute",
                "Great schools",
                "Outdoor space",
                "Modern finishes",
                "Walkable area",
                "Home office",
                "Energy efficient",
                "Great views",
            ]),
            placeholder: None,
            max_len: None,
            show_if: None,
        },
        Question {
            id: "vibe",
            field: Some(ProfileField::Vibe),
            kind: InputKind::Single,
            prompt: "What’s your dream style?",
            options: opts(&[
                "Cosy & warm",
                "Sleek & modern",
                "Rustic & charming",
                "Luxurious & refined",
                "Simple & practical",
            ]),
            placeholder: None,
            max_len: None,
            show_if: None,
        },
        Question {
            id: "purpose",
            field: Some(ProfileField::Purpose),
            kind: InputKind::Single,
            prompt: "First things first — what’s this property for?",
            options: opts(&[
                "Primary home",
                "Holiday home",
                "Investment property",
                "Relocation from abroad",
            ]),
            placeholder: None,
            max_len: None,
            show_if: None,
        },
        Question {
            id: "mortgage",
            field: Some(ProfileField::Mortgage),
            kind: InputKind::Single,
            prompt: "What’s your mortgage situation?",
            options: opts(&[
                "Pre-approved mortgage",
                "Will need a mortgage",
                "Cash buyer — no mortgage needed",
                "Not sure yet",
            ]),
            placeholder: None,
            max_len: None,
            show_if: None,
        },
        Question {
            id: "intent",
            field: Some(ProfileField::Intent),
            kind: InputKind::Single,
            prompt: "How ready are you to buy?",
            options: opts(&["Ready to buy now", "Actively searching", "Just exploring"]),
            placeholder: None,
            max_len: None,
            show_if: None,
        },
        Question {
            id: "timeline",
            field: Some(ProfileField::Timeline),
            kind: InputKind::Single,
            prompt: "What’s your timeline?",
            options: opts(&["Within 3 months", "3-6 months", "6-12 months", "No rush"]),
            placeholder: None,
            max_len: None,
            show_if: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnswerValue;

    #[test]
    fn test_question_ids_are_unique() {
        let questions = build_question_set(Some(Market::Ie));
        let mut ids: Vec<&str> = questions.iter().map(|q| q.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), questions.len());
    }

    #[test]
    fn test_location_options_follow_market() {
        let unknown = build_question_set(None);
        let location = unknown.iter().find(|q| q.id == "location").unwrap();
        assert!(location.options.is_empty());

        let ie = build_question_set(Some(Market::Ie));
        let location = ie.iter().find(|q| q.id == "location").unwrap();
        assert!(location.options.iter().any(|c| c == "Kinsale"));
    }

    #[test]
    fn test_uk_budget_bands_use_pounds() {
        let uk = build_question_set(Some(Market::Uk));
        let budget = uk.iter().find(|q| q.id == "budget").unwrap();
        assert!(budget.options.iter().all(|o| o.contains('£')));
    }

    #[test]
    fn test_commute_questions_hidden_for_remote_workers() {
        let questions = build_question_set(Some(Market::Ie));
        let destination = questions.iter().find(|q| q.id == "workDestination").unwrap();
        let visible = destination.show_if.unwrap();

        let mut profile = Profile::new();
        profile.set(
            ProfileField::WorkFromHome,
            AnswerValue::Single("Fully remote".into()),
        );
        assert!(!visible(&profile));

        profile.set(
            ProfileField::WorkFromHome,
            AnswerValue::Single("Full-time in office".into()),
        );
        assert!(visible(&profile));
    }

    #[test]
    fn test_only_greeting_has_no_field() {
        let questions = build_question_set(Some(Market::Pt));
        for question in &questions {
            assert_eq!(question.field.is_none(), question.id == "greeting");
        }
    }
}

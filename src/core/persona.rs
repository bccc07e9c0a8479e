use crate::models::{Persona, Profile, ProfileField};

/// One classification rule: predicate over the profile plus the persona
/// it produces. Rules are not mutually exclusive; order decides.
struct PersonaRule {
    applies: fn(&Profile) -> bool,
    build: fn() -> Persona,
}

/// Ordered rule list, first match wins
const RULES: &[PersonaRule] = &[
    PersonaRule { applies: is_renovator, build: visionary_renovator },
    PersonaRule { applies: is_digital_nomad, build: digital_nomad },
    PersonaRule { applies: is_family, build: nesting_pro },
    PersonaRule { applies: is_city_leaning, build: urban_explorer },
    PersonaRule { applies: is_luxury_leaning, build: refined_seeker },
];

/// Summarize a completed profile into one archetype. Deterministic and
/// stateless; recomputed on every call, never persisted.
pub fn classify(profile: &Profile) -> Persona {
    for rule in RULES {
        if (rule.applies)(profile) {
            return (rule.build)();
        }
    }
    smart_buyer()
}

fn is_renovator(profile: &Profile) -> bool {
    profile
        .single(ProfileField::Condition)
        .map_or(false, |c| c.contains("project"))
}

fn is_digital_nomad(profile: &Profile) -> bool {
    profile.single(ProfileField::WorkFromHome) == Some("Fully remote")
        && profile
            .single(ProfileField::Lifestyle)
            .map_or(false, |l| l.contains("Countryside"))
}

fn is_family(profile: &Profile) -> bool {
    profile
        .single(ProfileField::Family)
        .map_or(false, |f| f.contains("family"))
}

fn is_city_leaning(profile: &Profile) -> bool {
    profile
        .single(ProfileField::Lifestyle)
        .map_or(false, |l| l.contains("City"))
}

fn is_luxury_leaning(profile: &Profile) -> bool {
    profile.single(ProfileField::Vibe) == Some("Luxurious & refined")
}

fn visionary_renovator() -> Persona {
    Persona::new(
        "The Visionary Renovator",
        "🔨",
        "You see diamonds in the rough and have the vision to transform them.",
    )
}

fn digital_nomad() -> Persona {
    Persona::new("The Digital Nomad", "🌍", "Freedom to live wherever inspires you.")
}

fn nesting_pro() -> Persona {
    Persona::new(
        "The Nesting Pro",
        "🐣",
        "Schools, space, and safety — building a home for your crew.",
    )
}

fn urban_explorer() -> Persona {
    Persona::new(
        "The Urban Explorer",
        "🌃",
        "Walkability, culture, and being in the thick of it.",
    )
}

fn refined_seeker() -> Persona {
    Persona::new(
        "The Refined Seeker",
        "✨",
        "You appreciate quality, design, and the finer details.",
    )
}

fn smart_buyer() -> Persona {
    Persona::new(
        "The Smart Buyer",
        "🏡",
        "Methodical, informed, and ready to find the perfect fit.",
    )
}

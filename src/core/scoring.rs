use crate::models::{
    CommuteDestination, CommuteInfo, Condition, Density, MatchResult, Profile, ProfileField,
    Property, ScoringWeights, YardSize,
};

/// Outcome of evaluating one criterion against one property
pub struct CriterionScore {
    pub points: u32,
    pub weight: u32,
    pub reasons: Vec<String>,
}

impl CriterionScore {
    fn empty(weight: u32) -> Self {
        Self { points: 0, weight, reasons: Vec::new() }
    }

    fn flat(points: u32, weight: u32) -> Self {
        Self { points, weight, reasons: Vec::new() }
    }

    fn with_reason(points: u32, weight: u32, reason: String) -> Self {
        Self { points, weight, reasons: vec![reason] }
    }
}

/// One independently-weighted rule in the scoring rubric
pub struct Criterion {
    pub name: &'static str,
    pub eval: fn(&Property, &Profile, &ScoringWeights) -> CriterionScore,
}

/// The fixed, ordered scoring rubric. Every property is evaluated against
/// every criterion; a criterion whose profile field is unanswered
/// contributes zero points and no reason.
pub const RUBRIC: &[Criterion] = &[
    Criterion { name: "location", eval: eval_location },
    Criterion { name: "budget", eval: eval_budget },
    Criterion { name: "work", eval: eval_work },
    Criterion { name: "bedrooms", eval: eval_bedrooms },
    Criterion { name: "condition", eval: eval_condition },
    Criterion { name: "lifestyle", eval: eval_lifestyle },
    Criterion { name: "vibe", eval: eval_vibe },
    Criterion { name: "pets", eval: eval_pets },
    Criterion { name: "parking", eval: eval_parking },
    Criterion { name: "priorities", eval: eval_priorities },
    Criterion { name: "style", eval: eval_style },
];

/// Score one property against one profile.
///
/// Pure: identical inputs always yield an identical result, including
/// reason ordering. Reasons are deduplicated preserving first occurrence.
/// The percentage is clamped to 99 so a match never claims certainty.
pub fn score(property: &Property, profile: &Profile, weights: &ScoringWeights) -> MatchResult {
    let mut points = 0u32;
    let mut max_points = 0u32;
    let mut reasons: Vec<String> = Vec::new();

    for criterion in RUBRIC {
        let outcome = (criterion.eval)(property, profile, weights);
        points += outcome.points;
        max_points += outcome.weight;
        for reason in outcome.reasons {
            if !reasons.contains(&reason) {
                reasons.push(reason);
            }
        }
    }

    let percentage = if max_points == 0 {
        0
    } else {
        ((points as f64 / max_points as f64) * 100.0).round().min(99.0) as u8
    };

    MatchResult {
        property: property.clone(),
        points,
        max_points,
        percentage,
        reasons,
        commute: commute_annotation(property, profile),
    }
}

/// Budget band bounds for a budget answer, in listing currency units
fn budget_band(answer: &str) -> Option<(u64, u64)> {
    match answer {
        "Under €200K" | "Under £200K" => Some((0, 200_000)),
        "€200K – €400K" | "£200K – £400K" => Some((200_000, 400_000)),
        "€400K – €600K" | "£400K – £600K" => Some((400_000, 600_000)),
        "€600K – €800K" | "£600K – £800K" => Some((600_000, 800_000)),
        "€800K+" | "£800K+" => Some((800_000, u64::MAX)),
        _ => None,
    }
}

/// Minimum bedrooms implied by the household answer
fn min_bedrooms(family: &str) -> Option<u8> {
    match family {
        "Just me" | "Me and a partner" => Some(1),
        "Small family (1-2 kids)" => Some(3),
        "Larger family (3+ kids)" => Some(4),
        "Housemates" => Some(3),
        _ => None,
    }
}

/// Property conditions acceptable for a renovation-tolerance answer.
/// The sets are monotonic: move-in-only buyers accept the least.
fn accepted_conditions(answer: &str) -> Option<&'static [Condition]> {
    match answer {
        "Move-in ready only" => Some(&[Condition::MoveIn]),
        "Light cosmetic work ok" => Some(&[Condition::MoveIn, Condition::RenovationLight]),
        "Big project — bring it on!" => {
            Some(&[Condition::RenovationMajor, Condition::RenovationLight])
        }
        "Don't care" => Some(&[
            Condition::MoveIn,
            Condition::RenovationLight,
            Condition::RenovationMajor,
        ]),
        _ => None,
    }
}

/// Vibe option → property vibe tag
fn vibe_tag(answer: &str) -> Option<&'static str> {
    match answer {
        "Family-friendly" => Some("family-friendly"),
        "Nightlife & dining" => Some("nightlife"),
        "Artsy & creative" => Some("artsy"),
        "Quiet & peaceful" => Some("quiet"),
        "Close to nature" => Some("nature-lovers"),
        "Upscale" => Some("luxury"),
        _ => None,
    }
}

/// Dream-style answer → matching property style tags
fn style_tags(answer: &str) -> Option<&'static [&'static str]> {
    match answer {
        "Cosy & warm" => Some(&["cottage", "craftsman", "traditional", "georgian"]),
        "Sleek & modern" => Some(&["modern", "contemporary", "industrial"]),
        "Rustic & charming" => {
            Some(&["cottage", "historic", "traditional", "victorian", "mediterranean"])
        }
        "Luxurious & refined" => Some(&["luxury", "modern", "contemporary"]),
        "Simple & practical" => Some(&["traditional", "modern"]),
        _ => None,
    }
}

fn is_commuter(profile: &Profile) -> bool {
    matches!(
        profile.single(ProfileField::WorkFromHome),
        Some("Hybrid (2-3 days office)") | Some("Full-time in office")
    )
}

/// Commute tolerance in minutes; `None` means the buyer doesn't mind
fn commute_tolerance(profile: &Profile) -> Option<u32> {
    match profile.single(ProfileField::MaxCommute) {
        Some("Under 15 min") => Some(15),
        Some("Under 30 min") => Some(30),
        Some("Under 45 min") => Some(45),
        Some("Don't mind") => None,
        _ => Some(30),
    }
}

/// Minutes and destination label for the buyer's stated destination.
/// "Multiple locations" takes the property's worst commute.
fn commute_to_destination(property: &Property, profile: &Profile) -> (u32, &'static str) {
    match profile.single(ProfileField::WorkDestination) {
        Some("Tech hub / business park") => (
            property.commute_mins.to(CommuteDestination::TechHub),
            CommuteDestination::TechHub.label(),
        ),
        Some("Airport area") => (
            property.commute_mins.to(CommuteDestination::Airport),
            CommuteDestination::Airport.label(),
        ),
        Some("Multiple locations") => (property.commute_mins.worst(), "your destinations"),
        _ => (
            property.commute_mins.to(CommuteDestination::CityCenter),
            CommuteDestination::CityCenter.label(),
        ),
    }
}

/// Commute annotation for a scored match; present only for commuting buyers
pub fn commute_annotation(property: &Property, profile: &Profile) -> Option<CommuteInfo> {
    if !is_commuter(profile) {
        return None;
    }
    let (minutes, destination) = commute_to_destination(property, profile);
    Some(CommuteInfo { minutes, destination: destination.to_string() })
}

fn eval_location(property: &Property, profile: &Profile, w: &ScoringWeights) -> CriterionScore {
    let weight = w.location;
    let Some(location) = profile.single(ProfileField::Location) else {
        return CriterionScore::empty(weight);
    };
    let wanted = location.to_lowercase();
    let city_match = property.city.to_lowercase() == wanted;
    let region_match = property
        .region
        .as_deref()
        .map_or(false, |r| r.to_lowercase().contains(&wanted));
    if city_match || region_match {
        let place = property.region.as_deref().unwrap_or(&property.city);
        CriterionScore::with_reason(weight, weight, format!("In {}", place))
    } else {
        CriterionScore::empty(weight)
    }
}

fn eval_budget(property: &Property, profile: &Profile, w: &ScoringWeights) -> CriterionScore {
    let weight = w.budget;
    let Some(band) = profile.single(ProfileField::Budget).and_then(budget_band) else {
        return CriterionScore::empty(weight);
    };
    let (low, high) = band;
    let price = property.price;
    if price >= low && price <= high {
        return CriterionScore::with_reason(weight, weight, "Within budget".to_string());
    }
    let near_low = low as f64 * 0.85;
    let near_high = high as f64 * 1.15;
    if price as f64 >= near_low && price as f64 <= near_high {
        return CriterionScore::with_reason(weight / 2, weight, "Near budget range".to_string());
    }
    CriterionScore::empty(weight)
}

fn eval_work(property: &Property, profile: &Profile, w: &ScoringWeights) -> CriterionScore {
    let weight = w.work;
    match profile.single(ProfileField::WorkFromHome) {
        Some("Fully remote") => {
            let has_workspace = property
                .features
                .iter()
                .any(|f| f.contains("office") || f.contains("coworking"));
            if has_workspace {
                CriterionScore::with_reason(weight, weight, "Workspace included".to_string())
            } else if property.sqm >= 140 {
                CriterionScore::with_reason(
                    weight * 3 / 5,
                    weight,
                    "Room for office".to_string(),
                )
            } else {
                CriterionScore::flat(weight * 3 / 10, weight)
            }
        }
        Some("Hybrid (2-3 days office)") | Some("Full-time in office") => {
            let (minutes, destination) = commute_to_destination(property, profile);
            let reason = format!("{} min to {}", minutes, destination);
            match commute_tolerance(profile) {
                None => CriterionScore::with_reason(weight, weight, reason),
                Some(tolerance) => {
                    if minutes <= tolerance {
                        CriterionScore::with_reason(weight, weight, reason)
                    } else if minutes as f64 <= tolerance as f64 * 1.3 {
                        CriterionScore::with_reason(weight / 2, weight, reason)
                    } else {
                        CriterionScore::flat(weight / 4, weight)
                    }
                }
            }
        }
        Some("Retired / not working") => CriterionScore::flat(weight / 2, weight),
        _ => CriterionScore::empty(weight),
    }
}

fn eval_bedrooms(property: &Property, profile: &Profile, w: &ScoringWeights) -> CriterionScore {
    let weight = w.bedrooms;
    let Some(needed) = profile.single(ProfileField::Family).and_then(min_bedrooms) else {
        return CriterionScore::empty(weight);
    };
    if property.beds >= needed {
        CriterionScore::with_reason(weight, weight, format!("{} bedrooms", property.beds))
    } else if property.beds + 1 == needed {
        CriterionScore::flat(weight / 2, weight)
    } else {
        CriterionScore::empty(weight)
    }
}

fn eval_condition(property: &Property, profile: &Profile, w: &ScoringWeights) -> CriterionScore {
    let weight = w.condition;
    let Some(accepted) = profile
        .single(ProfileField::Condition)
        .and_then(accepted_conditions)
    else {
        return CriterionScore::empty(weight);
    };
    if accepted.contains(&property.condition) {
        CriterionScore::with_reason(weight, weight, property.condition.label().to_string())
    } else {
        CriterionScore::empty(weight)
    }
}

fn eval_lifestyle(property: &Property, profile: &Profile, w: &ScoringWeights) -> CriterionScore {
    let weight = w.lifestyle;
    match profile.single(ProfileField::Lifestyle) {
        Some("City buzz — walkable & alive") => density_match(property, Density::Urban, weight),
        Some("Suburban — space with access") => density_match(property, Density::Suburban, weight),
        Some("Countryside — nature & peace") => density_match(property, Density::Rural, weight),
        // Flexible buyers get fixed partial credit regardless of the property
        Some("Flexible — wherever suits") => CriterionScore::flat(weight * 2 / 3, weight),
        _ => CriterionScore::empty(weight),
    }
}

fn density_match(property: &Property, wanted: Density, weight: u32) -> CriterionScore {
    if property.neighborhood == wanted {
        CriterionScore::with_reason(weight, weight, format!("{} area", wanted.label()))
    } else {
        CriterionScore::empty(weight)
    }
}

fn eval_vibe(property: &Property, profile: &Profile, w: &ScoringWeights) -> CriterionScore {
    let weight = w.vibe;
    let hits = profile
        .multi(ProfileField::NeighborhoodVibe)
        .iter()
        .filter_map(|v| vibe_tag(v))
        .filter(|tag| property.neighborhood_vibe.iter().any(|t| t == tag))
        .count() as u32;
    if hits > 0 {
        CriterionScore::with_reason(
            (hits * (weight / 2)).min(weight),
            weight,
            "Vibe match".to_string(),
        )
    } else {
        CriterionScore::empty(weight)
    }
}

fn eval_pets(property: &Property, profile: &Profile, w: &ScoringWeights) -> CriterionScore {
    let weight = w.pets;
    match profile.single(ProfileField::Pets) {
        Some("Dog(s) — need garden!") => {
            if property.pet_friendly && property.yard >= YardSize::Medium {
                CriterionScore::with_reason(weight, weight, "Garden for dogs".to_string())
            } else if property.pet_friendly {
                CriterionScore::flat(weight * 2 / 5, weight)
            } else {
                CriterionScore::empty(weight)
            }
        }
        Some("Dog(s) — parks work") | Some("Getting one soon") => {
            if property.pet_friendly && property.nearby_dog_park {
                CriterionScore::with_reason(weight, weight, "Dog parks nearby".to_string())
            } else if property.pet_friendly {
                CriterionScore::flat(weight / 2, weight)
            } else {
                CriterionScore::empty(weight)
            }
        }
        // Cats need a pet-friendly listing for the higher baseline; a
        // pet-hostile property never beats the no-pets flat score.
        Some("Cat(s) only") => {
            if property.pet_friendly {
                CriterionScore::flat(weight * 7 / 10, weight)
            } else {
                CriterionScore::flat(weight * 3 / 5, weight)
            }
        }
        Some("No pets") => CriterionScore::flat(weight * 3 / 5, weight),
        _ => CriterionScore::empty(weight),
    }
}

fn eval_parking(property: &Property, profile: &Profile, w: &ScoringWeights) -> CriterionScore {
    let weight = w.parking;
    let hits = profile
        .multi(ProfileField::Parking)
        .iter()
        .filter(|pref| parking_satisfied(property, pref))
        .count() as u32;
    if hits > 0 {
        CriterionScore::with_reason(
            (hits * (weight / 2)).min(weight),
            weight,
            "Parking ✓".to_string(),
        )
    } else {
        CriterionScore::empty(weight)
    }
}

fn parking_satisfied(property: &Property, preference: &str) -> bool {
    match preference {
        "Garage must-have" => property.parking.iter().any(|p| p.contains("garage")),
        "EV charging" => property.parking.iter().any(|p| p.contains("ev-charging")),
        "Driveway fine" => property
            .parking
            .iter()
            .any(|p| p.contains("driveway") || p.contains("garage")),
        "Street ok" | "No car" => true,
        _ => false,
    }
}

/// Priority catalog: label → predicate over the property. Each satisfied
/// priority adds a fixed increment; the criterion is uncapped except by
/// the global percentage clamp.
const PRIORITY_CHECKS: &[(&str, fn(&Property) -> bool)] = &[
    ("Short commute", priority_short_commute),
    ("Great schools", priority_great_schools),
    ("Outdoor space", priority_outdoor_space),
    ("Modern finishes", priority_modern_finishes),
    ("Walkable area", priority_walkable),
    ("Home office", priority_home_office),
    ("Energy efficient", priority_energy_efficient),
    ("Great views", priority_great_views),
];

fn priority_short_commute(p: &Property) -> bool {
    p.commute_mins.best() <= 15
}

fn priority_great_schools(p: &Property) -> bool {
    p.schools == "excellent"
}

fn priority_outdoor_space(p: &Property) -> bool {
    p.yard != YardSize::None
}

fn priority_modern_finishes(p: &Property) -> bool {
    matches!(p.style.as_str(), "modern" | "contemporary" | "luxury" | "industrial")
}

fn priority_walkable(p: &Property) -> bool {
    p.walkability >= 8
}

fn priority_home_office(p: &Property) -> bool {
    p.features.iter().any(|f| f.contains("office"))
}

fn priority_energy_efficient(p: &Property) -> bool {
    p.features.iter().any(|f| f.contains("solar") || f.contains("heat-pump"))
        || p.epc.as_deref().map_or(false, |e| e.starts_with('A'))
}

fn priority_great_views(p: &Property) -> bool {
    p.features.iter().any(|f| {
        f.contains("view") || f.contains("sea") || f.contains("river") || f.contains("ocean")
    })
}

fn eval_priorities(property: &Property, profile: &Profile, w: &ScoringWeights) -> CriterionScore {
    let weight = w.priorities;
    let increment = weight / 3;
    let mut outcome = CriterionScore::empty(weight);
    for selected in profile.multi(ProfileField::Priorities) {
        if let Some((label, check)) = PRIORITY_CHECKS.iter().find(|(l, _)| l == selected) {
            if check(property) {
                outcome.points += increment;
                outcome.reasons.push(format!("✓ {}", label));
            }
        }
    }
    outcome
}

fn eval_style(property: &Property, profile: &Profile, w: &ScoringWeights) -> CriterionScore {
    let weight = w.style;
    let Some(tags) = profile.single(ProfileField::Vibe).and_then(style_tags) else {
        return CriterionScore::empty(weight);
    };
    if tags.contains(&property.style.as_str()) {
        CriterionScore::with_reason(weight, weight, "Style match".to_string())
    } else {
        CriterionScore::empty(weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnswerValue, CommuteMinutes};

    fn test_property() -> Property {
        Property {
            id: "ie1".to_string(),
            name: "Blackrock Bay House".to_string(),
            price: 350_000,
            currency: "EUR".to_string(),
            beds: 3,
            baths: 2,
            sqm: 120,
            sqft: 1292,
            property_type: "semi-detached".to_string(),
            style: "modern".to_string(),
            yard: YardSize::Medium,
            neighborhood: Density::Suburban,
            city: "Cork".to_string(),
            region: Some("Blackrock".to_string()),
            postcode: Some("T12 AB12".to_string()),
            epc: Some("B".to_string()),
            commute_mins: CommuteMinutes { city_center: 20, tech_hub: 15, airport: 25 },
            schools: "excellent".to_string(),
            walkability: 7,
            condition: Condition::MoveIn,
            parking: vec!["driveway".to_string()],
            pet_friendly: true,
            nearby_dog_park: true,
            neighborhood_vibe: vec!["family-friendly".to_string(), "quiet".to_string()],
            features: vec!["garden".to_string(), "home-office".to_string()],
            tagline: String::new(),
            description: String::new(),
            agent: None,
        }
    }

    fn profile_with(pairs: &[(ProfileField, AnswerValue)]) -> Profile {
        let mut profile = Profile::new();
        for (field, value) in pairs {
            profile.set(*field, value.clone());
        }
        profile
    }

    fn single(s: &str) -> AnswerValue {
        AnswerValue::Single(s.to_string())
    }

    #[test]
    fn test_percentage_always_clamped() {
        let property = test_property();
        let profile = profile_with(&[
            (ProfileField::Location, single("Cork")),
            (ProfileField::Budget, single("€200K – €400K")),
            (ProfileField::WorkFromHome, single("Fully remote")),
            (ProfileField::Family, single("Just me")),
            (ProfileField::Condition, single("Don't care")),
            (ProfileField::Lifestyle, single("Suburban — space with access")),
            (
                ProfileField::NeighborhoodVibe,
                AnswerValue::Multi(vec!["Family-friendly".into(), "Quiet & peaceful".into()]),
            ),
            (ProfileField::Pets, single("Dog(s) — need garden!")),
            (
                ProfileField::Parking,
                AnswerValue::Multi(vec!["Driveway fine".into(), "Street ok".into()]),
            ),
            (
                ProfileField::Priorities,
                AnswerValue::Multi(vec![
                    "Short commute".into(),
                    "Great schools".into(),
                    "Outdoor space".into(),
                    "Modern finishes".into(),
                    "Home office".into(),
                ]),
            ),
            (ProfileField::Vibe, single("Sleek & modern")),
        ]);

        let result = score(&property, &profile, &ScoringWeights::default());
        assert!(result.percentage <= 99, "percentage {} exceeds 99", result.percentage);
        assert!(result.points > 0);
    }

    #[test]
    fn test_score_is_deterministic() {
        let property = test_property();
        let profile = profile_with(&[
            (ProfileField::Location, single("Cork")),
            (ProfileField::Budget, single("€200K – €400K")),
            (ProfileField::WorkFromHome, single("Fully remote")),
            (
                ProfileField::Priorities,
                AnswerValue::Multi(vec!["Outdoor space".into(), "Great schools".into()]),
            ),
        ]);

        let first = score(&property, &profile, &ScoringWeights::default());
        let second = score(&property, &profile, &ScoringWeights::default());
        assert_eq!(first.points, second.points);
        assert_eq!(first.percentage, second.percentage);
        assert_eq!(first.reasons, second.reasons);
    }

    #[test]
    fn test_budget_band_lower_bound_scores_full() {
        let mut property = test_property();
        property.price = 200_000;
        let profile = profile_with(&[(ProfileField::Budget, single("€200K – €400K"))]);

        let outcome = eval_budget(&property, &profile, &ScoringWeights::default());
        assert_eq!(outcome.points, 25);
        assert_eq!(outcome.reasons, vec!["Within budget".to_string()]);
    }

    #[test]
    fn test_budget_well_over_band_scores_zero() {
        let mut property = test_property();
        property.price = 480_000; // 1.2x the €400K ceiling
        let profile = profile_with(&[(ProfileField::Budget, single("€200K – €400K"))]);

        let outcome = eval_budget(&property, &profile, &ScoringWeights::default());
        assert_eq!(outcome.points, 0);
    }

    #[test]
    fn test_budget_near_band_scores_partial() {
        let mut property = test_property();
        property.price = 440_000; // within 1.15x the ceiling
        let profile = profile_with(&[(ProfileField::Budget, single("€200K – €400K"))]);

        let outcome = eval_budget(&property, &profile, &ScoringWeights::default());
        assert_eq!(outcome.points, 12);
    }

    #[test]
    fn test_bedroom_tiers_for_larger_family() {
        let profile = profile_with(&[(ProfileField::Family, single("Larger family (3+ kids)"))]);
        let weights = ScoringWeights::default();

        let mut property = test_property();
        property.beds = 4;
        assert_eq!(eval_bedrooms(&property, &profile, &weights).points, 15);

        property.beds = 3;
        assert_eq!(eval_bedrooms(&property, &profile, &weights).points, 7);

        property.beds = 2;
        assert_eq!(eval_bedrooms(&property, &profile, &weights).points, 0);
    }

    #[test]
    fn test_pet_hostile_property_capped_at_no_pets_baseline() {
        let mut property = test_property();
        property.pet_friendly = false;
        let weights = ScoringWeights::default();
        let no_pets = profile_with(&[(ProfileField::Pets, single("No pets"))]);
        let baseline = eval_pets(&property, &no_pets, &weights).points;

        for answer in [
            "Dog(s) — need garden!",
            "Dog(s) — parks work",
            "Cat(s) only",
            "Getting one soon",
        ] {
            let profile = profile_with(&[(ProfileField::Pets, single(answer))]);
            let points = eval_pets(&property, &profile, &weights).points;
            assert!(
                points <= baseline,
                "{} scored {} above the no-pets baseline {}",
                answer,
                points,
                baseline
            );
        }
    }

    #[test]
    fn test_unanswered_criteria_contribute_nothing() {
        let property = test_property();
        let result = score(&property, &Profile::new(), &ScoringWeights::default());
        assert_eq!(result.points, 0);
        assert_eq!(result.percentage, 0);
        assert!(result.reasons.is_empty());
        assert_eq!(result.max_points, 163);
    }

    #[test]
    fn test_max_points_independent_of_property() {
        let profile = profile_with(&[(ProfileField::Budget, single("€800K+"))]);
        let weights = ScoringWeights::default();

        let first = score(&test_property(), &profile, &weights);
        let mut other = test_property();
        other.price = 1;
        other.beds = 1;
        let second = score(&other, &profile, &weights);
        assert_eq!(first.max_points, second.max_points);
    }

    #[test]
    fn test_commute_tolerance_tiers() {
        let property = test_property(); // 20 min to city centre
        let weights = ScoringWeights::default();

        let within = profile_with(&[
            (ProfileField::WorkFromHome, single("Hybrid (2-3 days office)")),
            (ProfileField::WorkDestination, single("City centre")),
            (ProfileField::MaxCommute, single("Under 30 min")),
        ]);
        assert_eq!(eval_work(&property, &within, &weights).points, 20);

        let tight = profile_with(&[
            (ProfileField::WorkFromHome, single("Full-time in office")),
            (ProfileField::WorkDestination, single("City centre")),
            (ProfileField::MaxCommute, single("Under 15 min")),
        ]);
        // 20 min is past 15 * 1.3 = 19.5, so only the flat baseline
        assert_eq!(eval_work(&property, &tight, &weights).points, 5);

        let relaxed = profile_with(&[
            (ProfileField::WorkFromHome, single("Full-time in office")),
            (ProfileField::WorkDestination, single("City centre")),
            (ProfileField::MaxCommute, single("Don't mind")),
        ]);
        assert_eq!(eval_work(&property, &relaxed, &weights).points, 20);
    }

    #[test]
    fn test_retired_buyer_gets_flat_work_credit_and_no_commute() {
        let property = test_property();
        let profile = profile_with(&[(ProfileField::WorkFromHome, single("Retired / not working"))]);

        let outcome = eval_work(&property, &profile, &ScoringWeights::default());
        assert_eq!(outcome.points, 10);
        assert!(outcome.reasons.is_empty());
        assert!(commute_annotation(&property, &profile).is_none());
    }

    #[test]
    fn test_priorities_are_uncapped() {
        let mut property = test_property();
        property.style = "modern".to_string();
        property.walkability = 9;
        property.epc = Some("A".to_string());
        property.features = vec![
            "home-office".to_string(),
            "sea-view".to_string(),
            "solar".to_string(),
            "garden".to_string(),
        ];
        let profile = profile_with(&[(
            ProfileField::Priorities,
            AnswerValue::Multi(vec![
                "Short commute".into(),
                "Great schools".into(),
                "Outdoor space".into(),
                "Modern finishes".into(),
                "Walkable area".into(),
                "Home office".into(),
                "Energy efficient".into(),
                "Great views".into(),
            ]),
        )]);

        let outcome = eval_priorities(&property, &profile, &ScoringWeights::default());
        assert_eq!(outcome.points, 40); // 8 satisfied x 5, past the nominal 15
        assert_eq!(outcome.reasons.len(), 8);
    }

    #[test]
    fn test_reasons_deduplicated_order_preserving() {
        let property = test_property();
        let profile = profile_with(&[
            (ProfileField::Location, single("Cork")),
            (ProfileField::Budget, single("€200K – €400K")),
        ]);

        let result = score(&property, &profile, &ScoringWeights::default());
        assert_eq!(result.reasons[0], "In Blackrock");
        assert_eq!(result.reasons[1], "Within budget");
        let mut deduped = result.reasons.clone();
        deduped.dedup();
        assert_eq!(deduped, result.reasons);
    }
}

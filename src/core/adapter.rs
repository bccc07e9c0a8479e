use serde::Deserialize;
use thiserror::Error;

use crate::models::{
    AgentContact, CommuteInfo, CommuteMinutes, Condition, Density, MatchResult, Property,
    YardSize,
};

/// A scored match as returned by the remote matching service. Field
/// coverage varies by listing source, so almost everything is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalMatch {
    pub property: ExternalProperty,
    pub score: Option<f64>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub concerns: Vec<String>,
    #[serde(default)]
    pub reasoning: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalProperty {
    pub id: Option<String>,
    pub title: Option<String>,
    pub price: Option<u64>,
    pub currency: Option<String>,
    pub beds: Option<u8>,
    pub baths: Option<u8>,
    pub sqm: Option<u32>,
    pub sqft: Option<u32>,
    pub property_type: Option<String>,
    pub style: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub neighborhood_vibe: Vec<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postcode: Option<String>,
    pub epc_rating: Option<String>,
    pub commute_city_center: Option<u32>,
    pub schools_quality: Option<String>,
    pub walkability: Option<u8>,
    pub condition: Option<String>,
    #[serde(default)]
    pub parking: Vec<String>,
    pub pet_friendly: Option<bool>,
    pub nearby_dog_park: Option<bool>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub agent: Option<ExternalAgent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalAgent {
    pub name: String,
    pub agency: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("remote match missing required field '{0}'")]
    MissingField(&'static str),
}

/// Convert one remote match into the local result shape. Remote scores
/// are percentages; they map onto a 100-point rubric so downstream
/// consumers see one uniform `points / max_points / percentage` triple.
pub fn adapt(external: ExternalMatch) -> Result<MatchResult, AdapterError> {
    let p = external.property;

    let id = p.id.ok_or(AdapterError::MissingField("id"))?;
    let price = p.price.ok_or(AdapterError::MissingField("price"))?;

    let sqm = p.sqm.unwrap_or(0);
    let sqft = p
        .sqft
        .unwrap_or_else(|| (sqm as f64 * 10.7639).round() as u32);

    let yard = if p.features.iter().any(|f| f.contains("garden")) {
        YardSize::Medium
    } else {
        YardSize::None
    };
    let neighborhood = if p.neighborhood_vibe.iter().any(|v| v.contains("urban")) {
        Density::Urban
    } else {
        Density::Suburban
    };
    let condition = match p.condition.as_deref() {
        Some("renovation-light") => Condition::RenovationLight,
        Some("renovation-major") => Condition::RenovationMajor,
        _ => Condition::MoveIn,
    };

    // Only the city-centre commute comes over the wire; the other legs
    // are estimated so the local shape stays total.
    let city_center = p.commute_city_center.unwrap_or(20);
    let commute_mins = CommuteMinutes {
        city_center,
        tech_hub: city_center + 5,
        airport: 40,
    };
    let commute = p.commute_city_center.map(|minutes| CommuteInfo {
        minutes,
        destination: "City centre".to_string(),
    });

    let property = Property {
        id,
        name: p.title.unwrap_or_else(|| "Untitled listing".to_string()),
        price,
        currency: p.currency.unwrap_or_else(|| "EUR".to_string()),
        beds: p.beds.unwrap_or(0),
        baths: p.baths.unwrap_or(0),
        sqm,
        sqft,
        property_type: p.property_type.unwrap_or_else(|| "house".to_string()),
        style: p.style.unwrap_or_else(|| "modern".to_string()),
        yard,
        neighborhood,
        city: p.city.unwrap_or_default(),
        region: p.region,
        postcode: p.postcode,
        epc: p.epc_rating,
        commute_mins,
        schools: p.schools_quality.unwrap_or_else(|| "good".to_string()),
        walkability: p.walkability.unwrap_or(5),
        condition,
        parking: p.parking,
        pet_friendly: p.pet_friendly.unwrap_or(false),
        nearby_dog_park: p.nearby_dog_park.unwrap_or(false),
        neighborhood_vibe: p.neighborhood_vibe,
        features: p.features,
        tagline: p.tagline.unwrap_or_default(),
        description: p.description.unwrap_or_default(),
        agent: p.agent.map(|a| AgentContact {
            name: a.name,
            agency: a.agency.unwrap_or_default(),
            phone: a.phone.unwrap_or_default(),
            initials: None,
        }),
    };

    let percentage = external
        .score
        .map(|s| s.round().clamp(0.0, 99.0) as u8)
        .unwrap_or(0);

    let mut reasons: Vec<String> = Vec::new();
    for highlight in external.highlights {
        if !reasons.contains(&highlight) {
            reasons.push(highlight);
        }
    }

    Ok(MatchResult {
        property,
        points: percentage as u32,
        max_points: 100,
        percentage,
        reasons,
        commute,
    })
}

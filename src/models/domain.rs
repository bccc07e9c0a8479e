use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A market region with its own catalog and city list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Market {
    Uk,
    Ie,
    Pt,
}

impl Market {
    pub fn code(&self) -> &'static str {
        match self {
            Market::Uk => "uk",
            Market::Ie => "ie",
            Market::Pt => "pt",
        }
    }

    pub fn from_code(code: &str) -> Option<Market> {
        match code {
            "uk" => Some(Market::Uk),
            "ie" => Some(Market::Ie),
            "pt" => Some(Market::Pt),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Market::Uk => "United Kingdom",
            Market::Ie => "Ireland",
            Market::Pt => "Portugal",
        }
    }

    /// ISO currency code used for listings in this market
    pub fn currency(&self) -> &'static str {
        match self {
            Market::Uk => "GBP",
            Market::Ie | Market::Pt => "EUR",
        }
    }

    /// City options offered by the location question for this market
    pub fn cities(&self) -> &'static [&'static str] {
        match self {
            Market::Uk => &[
                "London", "Manchester", "Birmingham", "Leeds", "Bristol", "Liverpool",
                "Edinburgh", "Glasgow", "Cardiff", "Newcastle", "Sheffield", "Nottingham",
                "Cambridge", "Oxford", "Bath", "Brighton", "York",
            ],
            Market::Ie => &[
                "Cork", "Dublin", "Limerick", "Galway", "Waterford", "Killarney",
                "Kinsale", "Cobh", "Midleton", "Mallow", "Bandon", "Clonakilty",
                "Fermoy", "Youghal", "Carrigaline",
            ],
            Market::Pt => &[
                "Lourinhã", "Peniche", "Torres Vedras", "Óbidos", "Caldas da Rainha",
                "Ericeira", "Mafra", "Sintra", "Cascais", "Nazaré", "Alcobaça",
                "Bombarral", "Cadaval", "Atouguia da Baleia", "Areia Branca",
                "São Martinho do Porto",
            ],
        }
    }
}

/// Yard size category, ordered smallest to largest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum YardSize {
    None,
    Small,
    Medium,
    Large,
}

/// Neighborhood density category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Urban,
    Suburban,
    Rural,
}

impl Density {
    pub fn label(&self) -> &'static str {
        match self {
            Density::Urban => "Urban",
            Density::Suburban => "Suburban",
            Density::Rural => "Rural",
        }
    }
}

/// Property condition category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    MoveIn,
    RenovationLight,
    RenovationMajor,
}

impl Condition {
    pub fn label(&self) -> &'static str {
        match self {
            Condition::MoveIn => "Move-in ready",
            Condition::RenovationLight => "Light reno",
            Condition::RenovationMajor => "Reno project",
        }
    }
}

/// Commute destination types the buyer can name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CommuteDestination {
    CityCenter,
    TechHub,
    Airport,
}

impl CommuteDestination {
    pub fn label(&self) -> &'static str {
        match self {
            CommuteDestination::CityCenter => "City centre",
            CommuteDestination::TechHub => "Tech hub",
            CommuteDestination::Airport => "Airport",
        }
    }
}

/// Commute minutes from the property, keyed by destination type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommuteMinutes {
    pub city_center: u32,
    pub tech_hub: u32,
    pub airport: u32,
}

impl CommuteMinutes {
    pub fn to(&self, destination: CommuteDestination) -> u32 {
        match destination {
            CommuteDestination::CityCenter => self.city_center,
            CommuteDestination::TechHub => self.tech_hub,
            CommuteDestination::Airport => self.airport,
        }
    }

    /// Shortest commute across all destinations
    pub fn best(&self) -> u32 {
        self.city_center.min(self.tech_hub).min(self.airport)
    }

    /// Longest commute across all destinations
    pub fn worst(&self) -> u32 {
        self.city_center.max(self.tech_hub).max(self.airport)
    }
}

/// Listing agent contact details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentContact {
    pub name: String,
    pub agency: String,
    pub phone: String,
    #[serde(default)]
    pub initials: Option<String>,
}

/// A property listing. Immutable reference data for the life of a search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub name: String,
    pub price: u64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub beds: u8,
    pub baths: u8,
    pub sqm: u32,
    pub sqft: u32,
    #[serde(rename = "type")]
    pub property_type: String,
    pub style: String,
    pub yard: YardSize,
    pub neighborhood: Density,
    pub city: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub epc: Option<String>,
    pub commute_mins: CommuteMinutes,
    pub schools: String,
    pub walkability: u8,
    pub condition: Condition,
    #[serde(default)]
    pub parking: Vec<String>,
    pub pet_friendly: bool,
    pub nearby_dog_park: bool,
    #[serde(default)]
    pub neighborhood_vibe: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub agent: Option<AgentContact>,
}

fn default_currency() -> String {
    "EUR".to_string()
}

/// A profile field the question flow can write
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    Location,
    Radius,
    Budget,
    Lifestyle,
    Family,
    WorkFromHome,
    WorkDestination,
    MaxCommute,
    Condition,
    NeighborhoodVibe,
    Pets,
    Parking,
    MustHave,
    Priorities,
    Vibe,
    Purpose,
    Mortgage,
    Intent,
    Timeline,
    Market,
    Currency,
}

/// One recorded answer, tagged by the input type that produced it.
///
/// The wire format matches the original quiz payload: single-choice and
/// free-text answers are plain strings, multi-choice answers are string
/// arrays. Free text therefore deserializes as `Single`; accessors treat
/// the two interchangeably.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Multi(Vec<String>),
    Single(String),
    Text(String),
}

impl AnswerValue {
    pub fn as_single(&self) -> Option<&str> {
        match self {
            AnswerValue::Single(s) | AnswerValue::Text(s) => Some(s.as_str()),
            AnswerValue::Multi(_) => None,
        }
    }

    pub fn as_multi(&self) -> Option<&[String]> {
        match self {
            AnswerValue::Multi(values) => Some(values.as_slice()),
            _ => None,
        }
    }
}

/// The accumulated buyer answers for one quiz session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile {
    answers: BTreeMap<ProfileField, AnswerValue>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: ProfileField, value: AnswerValue) {
        self.answers.insert(field, value);
    }

    pub fn get(&self, field: ProfileField) -> Option<&AnswerValue> {
        self.answers.get(&field)
    }

    pub fn is_set(&self, field: ProfileField) -> bool {
        self.answers.contains_key(&field)
    }

    /// Single-choice or free-text answer for a field, if present
    pub fn single(&self, field: ProfileField) -> Option<&str> {
        self.answers.get(&field).and_then(AnswerValue::as_single)
    }

    /// Multi-choice answer for a field; empty when unanswered
    pub fn multi(&self, field: ProfileField) -> &[String] {
        self.answers
            .get(&field)
            .and_then(AnswerValue::as_multi)
            .unwrap_or(&[])
    }

    pub fn market(&self) -> Option<Market> {
        self.single(ProfileField::Market).and_then(Market::from_code)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }
}

/// Commute annotation attached to a scored match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommuteInfo {
    pub minutes: u32,
    pub destination: String,
}

/// The scored, annotated outcome of evaluating one property against one profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub property: Property,
    pub points: u32,
    pub max_points: u32,
    /// Clamped to 0-99; never 100, to avoid implying certainty
    pub percentage: u8,
    pub reasons: Vec<String>,
    #[serde(default)]
    pub commute: Option<CommuteInfo>,
}

/// A labeled archetype summarizing a completed profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    pub title: String,
    pub emoji: String,
    #[serde(alias = "desc")]
    pub description: String,
}

impl Persona {
    pub fn new(title: &str, emoji: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            emoji: emoji.to_string(),
            description: description.to_string(),
        }
    }
}

/// Points awarded by each scoring criterion. Partial-credit tiers within a
/// criterion are derived from its weight by fixed ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    pub location: u32,
    pub budget: u32,
    pub work: u32,
    pub bedrooms: u32,
    pub condition: u32,
    pub lifestyle: u32,
    pub vibe: u32,
    pub pets: u32,
    pub parking: u32,
    pub priorities: u32,
    pub style: u32,
}

impl ScoringWeights {
    /// Maximum attainable points for one scoring run; constant across
    /// properties so every listing is scored against the same rubric.
    pub fn max_points(&self) -> u32 {
        self.location
            + self.budget
            + self.work
            + self.bedrooms
            + self.condition
            + self.lifestyle
            + self.vibe
            + self.pets
            + self.parking
            + self.priorities
            + self.style
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            location: 25,
            budget: 25,
            work: 20,
            bedrooms: 15,
            condition: 15,
            lifestyle: 12,
            vibe: 10,
            pets: 10,
            parking: 8,
            priorities: 15,
            style: 8,
        }
    }
}

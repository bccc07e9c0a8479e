use crate::models::{
    AgentContact, CommuteMinutes, Condition, Density, Market, Property, YardSize,
};

/// Built-in listings for a market, used whenever the remote matching
/// service is unavailable. Order is stable; the ranker relies on it to
/// break ties.
pub fn catalog_for(market: Market) -> Vec<Property> {
    match market {
        Market::Uk => uk_listings(),
        Market::Ie => ie_listings(),
        Market::Pt => pt_listings(),
    }
}

fn agent(name: &str, agency: &str, phone: &str, initials: &str) -> Option<AgentContact> {
    Some(AgentContact {
        name: name.to_string(),
        agency: agency.to_string(),
        phone: phone.to_string(),
        initials: Some(initials.to_string()),
    })
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    name: &str,
    market: Market,
    price: u64,
    beds: u8,
    baths: u8,
    sqm: u32,
    city: &str,
) -> Property {
    Property {
        id: id.to_string(),
        name: name.to_string(),
        price,
        currency: market.currency().to_string(),
        beds,
        baths,
        sqm,
        sqft: (sqm as f64 * 10.7639).round() as u32,
        property_type: "house".to_string(),
        style: "modern".to_string(),
        yard: YardSize::None,
        neighborhood: Density::Suburban,
        city: city.to_string(),
        region: None,
        postcode: None,
        epc: None,
        commute_mins: CommuteMinutes { city_center: 20, tech_hub: 25, airport: 40 },
        schools: "good".to_string(),
        walkability: 6,
        condition: Condition::MoveIn,
        parking: Vec::new(),
        pet_friendly: true,
        nearby_dog_park: false,
        neighborhood_vibe: Vec::new(),
        features: Vec::new(),
        tagline: String::new(),
        description: String::new(),
        agent: None,
    }
}

fn ie_listings() -> Vec<Property> {
    vec![
        Property {
            property_type: "terraced".to_string(),
            style: "victorian".to_string(),
            yard: YardSize::Medium,
            region: Some("Sunday's Well".to_string()),
            postcode: Some("T23 AK20".to_string()),
            epc: Some("C".to_string()),
            commute_mins: CommuteMinutes { city_center: 12, tech_hub: 18, airport: 25 },
            schools: "excellent".to_string(),
            walkability: 8,
            parking: strings(&["driveway"]),
            nearby_dog_park: true,
            neighborhood_vibe: strings(&["quiet", "family-friendly"]),
            features: strings(&["garden", "home-office", "period-features", "bay-windows"]),
            tagline: "Bay-windowed Victorian above the river Lee".to_string(),
            description: "Bright 3-bed terrace in Sunday's Well with a converted attic office, \
                          walled garden, and original fireplaces. Ten minutes' walk to the city \
                          centre across Daly's Bridge."
                .to_string(),
            agent: agent("Niamh O'Sullivan", "Sherry FitzGerald", "+353 21 427 5000", "NO"),
            ..listing("ie1", "Sunday's Well Victorian", Market::Ie, 345_000, 3, 2, 142, "Cork")
        },
        Property {
            property_type: "detached".to_string(),
            style: "cottage".to_string(),
            yard: YardSize::Small,
            neighborhood: Density::Rural,
            region: Some("Scilly".to_string()),
            epc: Some("D".to_string()),
            commute_mins: CommuteMinutes { city_center: 40, tech_hub: 45, airport: 30 },
            walkability: 7,
            parking: strings(&["on-street"]),
            nearby_dog_park: true,
            neighborhood_vibe: strings(&["quiet", "nature-lovers"]),
            features: strings(&["sea-view", "stone-walls", "fireplace", "garden"]),
            tagline: "Harbour-view stone cottage in Kinsale".to_string(),
            description: "Characterful 2-bed overlooking the marina. Exposed stone, wood-burning \
                          stove, and a sheltered patio garden. Stroll to Kinsale's restaurants."
                .to_string(),
            agent: agent("Declan Murphy", "DNG Kinsale", "+353 21 477 3000", "DM"),
            ..listing("ie2", "Kinsale Harbour Cottage", Market::Ie, 425_000, 2, 1, 96, "Kinsale")
        },
        Property {
            property_type: "semi-detached".to_string(),
            yard: YardSize::Large,
            region: Some("Douglas".to_string()),
            postcode: Some("T12 XY45".to_string()),
            epc: Some("B".to_string()),
            commute_mins: CommuteMinutes { city_center: 18, tech_hub: 10, airport: 15 },
            schools: "excellent".to_string(),
            walkability: 7,
            parking: strings(&["driveway", "garage", "ev-charging"]),
            nearby_dog_park: true,
            neighborhood_vibe: strings(&["family-friendly", "quiet"]),
            features: strings(&["garden", "modern-kitchen", "home-office", "heat-pump"]),
            tagline: "Extended family semi in leafy Douglas".to_string(),
            description: "Turn-key 4-bed with a south-facing garden, garage with EV charger, and \
                          a garden-room office. Excellent schools within walking distance."
                .to_string(),
            agent: agent("Aoife Barry", "Lisney Cork", "+353 21 427 5079", "AB"),
            ..listing("ie3", "Douglas Family Home", Market::Ie, 495_000, 4, 3, 168, "Cork")
        },
        Property {
            property_type: "terraced".to_string(),
            style: "victorian".to_string(),
            yard: YardSize::Small,
            neighborhood: Density::Urban,
            region: Some("Portobello".to_string()),
            postcode: Some("D08 F2P9".to_string()),
            epc: Some("D".to_string()),
            commute_mins: CommuteMinutes { city_center: 8, tech_hub: 15, airport: 35 },
            walkability: 10,
            parking: strings(&["on-street", "permit"]),
            neighborhood_vibe: strings(&["nightlife", "artsy"]),
            features: strings(&["period-features", "courtyard", "updated-kitchen"]),
            tagline: "Canal-side redbrick in the heart of Portobello".to_string(),
            description: "Classic 3-bed redbrick moments from the Grand Canal. Restored sash \
                          windows, granite kitchen, sunny courtyard. Walk everywhere."
                .to_string(),
            agent: agent("Conor Walsh", "Owen Reilly", "+353 1 677 7100", "CW"),
            ..listing("ie4", "Portobello Redbrick", Market::Ie, 650_000, 3, 2, 118, "Dublin")
        },
        Property {
            property_type: "terraced".to_string(),
            style: "georgian".to_string(),
            yard: YardSize::Small,
            neighborhood: Density::Urban,
            region: Some("West End".to_string()),
            epc: Some("F".to_string()),
            commute_mins: CommuteMinutes { city_center: 10, tech_hub: 20, airport: 25 },
            walkability: 9,
            condition: Condition::RenovationMajor,
            parking: strings(&["on-street"]),
            neighborhood_vibe: strings(&["artsy", "nightlife"]),
            features: strings(&["high-ceilings", "original-fireplaces", "potential"]),
            tagline: "Unrenovated Georgian with huge upside in Galway".to_string(),
            description: "4-bed needing full refurbishment. Intact cornicing and marble \
                          fireplaces, minutes from Shop Street. Priced for the work required."
                .to_string(),
            agent: agent("Sinead Kelly", "O'Donnellan & Joyce", "+353 91 564 212", "SK"),
            ..listing("ie5", "Galway Georgian Project", Market::Ie, 230_000, 4, 1, 150, "Galway")
        },
    ]
}

fn pt_listings() -> Vec<Property> {
    vec![
        Property {
            property_type: "detached".to_string(),
            yard: YardSize::Large,
            neighborhood: Density::Rural,
            region: Some("Praia da Areia Branca".to_string()),
            epc: Some("B".to_string()),
            commute_mins: CommuteMinutes { city_center: 10, tech_hub: 50, airport: 55 },
            walkability: 5,
            parking: strings(&["garage", "driveway"]),
            nearby_dog_park: true,
            neighborhood_vibe: strings(&["quiet", "nature-lovers"]),
            features: strings(&["sea-view", "terrace", "garden", "home-office"]),
            tagline: "Ocean-view villa above Areia Branca beach".to_string(),
            description: "Light-filled 3-bed villa with a wraparound terrace and Atlantic views. \
                          Dedicated office, mature garden, double garage. Five minutes to the \
                          beach."
                .to_string(),
            agent: agent("Marta Ferreira", "ERA Lourinhã", "+351 261 422 100", "MF"),
            ..listing("pt1", "Lourinhã Ocean Villa", Market::Pt, 420_000, 3, 2, 175, "Lourinhã")
        },
        Property {
            property_type: "townhouse".to_string(),
            yard: YardSize::Small,
            region: Some("Baleal".to_string()),
            epc: Some("C".to_string()),
            commute_mins: CommuteMinutes { city_center: 8, tech_hub: 45, airport: 60 },
            walkability: 7,
            parking: strings(&["on-street"]),
            nearby_dog_park: true,
            neighborhood_vibe: strings(&["nature-lovers", "artsy"]),
            features: strings(&["sea-view", "roof-terrace", "balcony"]),
            tagline: "Surf-side townhouse minutes from Baleal".to_string(),
            description: "2-bed townhouse with a roof terrace looking over the surf breaks. \
                          Recently repainted, ready to move in. Walk to the beach cafés."
                .to_string(),
            agent: agent("João Santos", "KW Peniche", "+351 262 787 000", "JS"),
            ..listing("pt2", "Peniche Surf House", Market::Pt, 280_000, 2, 1, 104, "Peniche")
        },
        Property {
            style: "rustic".to_string(),
            yard: YardSize::Medium,
            neighborhood: Density::Rural,
            epc: Some("E".to_string()),
            commute_mins: CommuteMinutes { city_center: 12, tech_hub: 55, airport: 65 },
            schools: "average".to_string(),
            walkability: 4,
            condition: Condition::RenovationLight,
            parking: strings(&["driveway"]),
            neighborhood_vibe: strings(&["quiet", "nature-lovers"]),
            features: strings(&["stone-walls", "fireplace", "garden", "original-beams"]),
            tagline: "Stone cottage inside the Óbidos countryside".to_string(),
            description: "Traditional 3-bed schist cottage with beamed ceilings and a walled \
                          orchard. Needs cosmetic updating. Ten minutes from the castle walls."
                .to_string(),
            agent: agent("Rita Almeida", "Century 21 Óbidos", "+351 262 959 300", "RA"),
            ..listing("pt3", "Óbidos Stone Cottage", Market::Pt, 195_000, 3, 1, 130, "Óbidos")
        },
        Property {
            property_type: "flat".to_string(),
            neighborhood: Density::Urban,
            epc: Some("A".to_string()),
            commute_mins: CommuteMinutes { city_center: 5, tech_hub: 35, airport: 45 },
            walkability: 9,
            parking: strings(&["underground", "ev-charging"]),
            neighborhood_vibe: strings(&["nightlife", "luxury"]),
            features: strings(&["balcony", "smart-home", "sea-view"]),
            tagline: "Contemporary apartment in central Ericeira".to_string(),
            description: "Sleek 2-bed with floor-to-ceiling glazing and a west-facing balcony \
                          catching the sunset. Underground parking with EV charging. EPC A."
                .to_string(),
            agent: agent("Pedro Costa", "Remax Ericeira", "+351 261 860 400", "PC"),
            ..listing("pt4", "Ericeira Modern Apartment", Market::Pt, 330_000, 2, 2, 92, "Ericeira")
        },
    ]
}

fn uk_listings() -> Vec<Property> {
    vec![
        Property {
            property_type: "semi-detached".to_string(),
            style: "edwardian".to_string(),
            yard: YardSize::Large,
            region: Some("Didsbury".to_string()),
            postcode: Some("M20 2FW".to_string()),
            epc: Some("C".to_string()),
            commute_mins: CommuteMinutes { city_center: 20, tech_hub: 15, airport: 15 },
            schools: "excellent".to_string(),
            walkability: 7,
            parking: strings(&["driveway", "garage"]),
            nearby_dog_park: true,
            neighborhood_vibe: strings(&["family-friendly", "quiet"]),
            features: strings(&["garden", "home-office", "period-features", "conservatory"]),
            tagline: "Edwardian family home in leafy Didsbury".to_string(),
            description: "Beautifully extended 4-bed with 80ft garden, home office, and \
                          conservatory. Walk to Didsbury village restaurants. Excellent schools \
                          catchment."
                .to_string(),
            agent: agent("Tom Richardson", "Gascoigne Halman", "+44 161 234 5678", "TR"),
            ..listing("uk1", "Didsbury Family Semi", Market::Uk, 485_000, 4, 3, 158, "Manchester")
        },
        Property {
            property_type: "terraced".to_string(),
            style: "cottage".to_string(),
            yard: YardSize::Medium,
            region: Some("Headingley".to_string()),
            postcode: Some("LS6 3AA".to_string()),
            epc: Some("D".to_string()),
            commute_mins: CommuteMinutes { city_center: 15, tech_hub: 20, airport: 30 },
            walkability: 8,
            condition: Condition::RenovationLight,
            parking: strings(&["on-street"]),
            nearby_dog_park: true,
            neighborhood_vibe: strings(&["artsy", "family-friendly"]),
            features: strings(&["stone-walls", "fireplace", "garden", "original-beams"]),
            tagline: "Stone cottage with bags of character in Headingley".to_string(),
            description: "Charming 3-bed stone terrace. Original beams, wood burner, walled \
                          garden. Kitchen needs updating."
                .to_string(),
            agent: agent("Hannah Moore", "Manning Stainton", "+44 113 234 5678", "HM"),
            ..listing("uk2", "Headingley Cottage", Market::Uk, 295_000, 3, 1, 102, "Leeds")
        },
        Property {
            property_type: "terraced".to_string(),
            style: "victorian".to_string(),
            yard: YardSize::Small,
            neighborhood: Density::Urban,
            region: Some("Jesmond".to_string()),
            postcode: Some("NE2 1AA".to_string()),
            epc: Some("F".to_string()),
            commute_mins: CommuteMinutes { city_center: 10, tech_hub: 15, airport: 20 },
            walkability: 9,
            condition: Condition::RenovationMajor,
            parking: strings(&["on-street"]),
            nearby_dog_park: true,
            neighborhood_vibe: strings(&["artsy", "nightlife"]),
            features: strings(&["high-ceilings", "original-fireplaces", "bay-windows"]),
            tagline: "Unrenovated Victorian with massive potential in Jesmond".to_string(),
            description: "4-bed needing full renovation. Original cornicing, marble fireplaces, \
                          high ceilings intact. Huge upside at this price."
                .to_string(),
            agent: agent("Craig Wilson", "Bradley Hall", "+44 191 234 5678", "CW"),
            ..listing("uk3", "Jesmond Renovation Project", Market::Uk, 225_000, 4, 1, 148, "Newcastle")
        },
        Property {
            property_type: "flat".to_string(),
            region: Some("Riverside".to_string()),
            postcode: Some("CB5 8AA".to_string()),
            epc: Some("A".to_string()),
            commute_mins: CommuteMinutes { city_center: 10, tech_hub: 5, airport: 55 },
            schools: "excellent".to_string(),
            walkability: 8,
            parking: strings(&["underground", "ev-charging"]),
            nearby_dog_park: true,
            neighborhood_vibe: strings(&["quiet", "family-friendly"]),
            features: strings(&["river-view", "smart-home", "terrace", "heat-pump"]),
            tagline: "Contemporary riverside living near the colleges".to_string(),
            description: "3-bed in an award-winning development on the Cam. Floor-to-ceiling \
                          glazing, smart home, communal gardens. EPC A."
                .to_string(),
            agent: agent("Alice Thornton", "Bidwells", "+44 1223 234 567", "AT"),
            ..listing("uk4", "Cambridge Riverside Modern", Market::Uk, 595_000, 3, 2, 112, "Cambridge")
        },
    ]
}

//! Top-level freight-posting parse: composes the location, vehicle,
//! weight/phone/urgency/cargo and message-type subextractors into one
//! `ParsedMessage`, then scores the result (spec.md §4.4).

use crate::common::tokenize;
use crate::confidence::{self, ConfidenceScore, ScoreInputs};
use crate::extract::{self, PhoneReading, WeightReading};
use crate::location::{self, ParsedLocations};
use crate::message_type::{self, MessageType};
use crate::normalize::preprocess;
use crate::routes::{self, RouteCandidate};
use crate::vehicle::{self, VehicleMatch};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParsedMessage {
    pub locations: ParsedLocations,
    pub vehicle: VehicleMatch,
    pub weight: Option<WeightReading>,
    pub phone: Option<PhoneReading>,
    pub is_urgent: bool,
    pub cargo_domain: Option<String>,
    pub message_type: MessageType,
    pub routes: Vec<RouteCandidate>,
    pub confidence: ConfidenceScore,
}

/// Runs every subextractor over `raw_text` and assembles the combined
/// `ParsedMessage`. Total: never panics, produces a low-confidence
/// `Unknown`-typed record for unrelated chat text.
pub fn parse_message(raw_text: &str) -> ParsedMessage {
    let normalized = preprocess(raw_text);
    let tokens = tokenize(&normalized);

    let locations = location::parse_locations(raw_text);
    let vehicle_match = vehicle::classify(&tokens);
    let weight = extract::extract_weight(&normalized);
    let phone = extract::extract_phone(raw_text);
    let is_urgent = extract::extract_urgency(&normalized);
    let cargo_domain = extract::extract_cargo_domain(&normalized)
        .or_else(|| locations.cargo_type.clone());
    let message_type = message_type::classify(&normalized);
    let routes = routes::extract_all_routes(raw_text);

    let confidence = confidence::score(ScoreInputs {
        has_origin: locations.origin.is_some(),
        has_destination: locations.destination.is_some() || !locations.destinations.is_empty(),
        has_vehicle_or_body: vehicle_match.vehicle_type.is_some() || vehicle_match.body_type.is_some(),
        has_phone: phone.is_some(),
        has_weight: weight.is_some(),
        has_cargo: cargo_domain.is_some(),
    });

    ParsedMessage {
        locations,
        vehicle: vehicle_match,
        weight,
        phone,
        is_urgent,
        cargo_domain,
        message_type,
        routes,
        confidence,
    }
}

/// Cheap pre-filter re-exported at the posting level for callers that only
/// want to decide whether to run the full parse at all.
pub fn is_likely_logistics_message(raw_text: &str) -> bool {
    message_type::is_likely_logistics_message(&preprocess(raw_text))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::confidence::ConfidenceLevel;
    use crate::vehicle::VehicleType;

    #[test]
    fn antalya_istanbul_tir_is_high_confidence() {
        let parsed = parse_message("Antalya'dan Istanbul'a 20 ton tir ariyorum 05321234567 acil");
        assert_eq!(parsed.locations.origin_province.as_deref(), Some("antalya"));
        assert_eq!(parsed.locations.destination_province.as_deref(), Some("istanbul"));
        assert_eq!(parsed.vehicle.vehicle_type, Some(VehicleType::Tir));
        assert!(parsed.weight.is_some());
        assert!(parsed.phone.is_some());
        assert!(parsed.is_urgent);
        assert_eq!(parsed.confidence.level, ConfidenceLevel::High);
        assert_eq!(parsed.message_type, MessageType::VehicleWanted);
    }

    #[test]
    fn unrelated_chat_is_low_confidence_unknown() {
        let parsed = parse_message("merhaba nasilsin bugun hava guzel");
        assert_eq!(parsed.message_type, MessageType::Unknown);
        assert_eq!(parsed.confidence.level, ConfidenceLevel::Low);
    }

    #[test]
    fn multi_route_posting_extracts_both_legs() {
        let parsed = parse_message("Antalya - Istanbul tir, Izmir - Ankara kamyon");
        assert_eq!(parsed.routes.len(), 2);
    }
}

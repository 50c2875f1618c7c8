//! Integration tests mirroring literal end-to-end parse scenarios.

use navlun_parser::confidence::ConfidenceLevel;
use navlun_parser::message_type::MessageType;
use navlun_parser::parse_message;
use navlun_parser::vehicle::VehicleType;

#[test]
fn full_posting_scenario_is_high_confidence_vehicle_wanted() {
    let parsed = parse_message(
        "ANTALYA - ISTANBUL 20 ton demir yük var TIR ARANIYOR 0532 111 22 33 acil",
    );

    assert_eq!(parsed.locations.origin_province.as_deref(), Some("antalya"));
    assert_eq!(parsed.locations.destination_province.as_deref(), Some("istanbul"));
    assert_eq!(parsed.vehicle.vehicle_type, Some(VehicleType::Tir));
    assert_eq!(parsed.weight.map(|w| w.tons), Some(20.0));
    assert_eq!(parsed.cargo_domain.as_deref(), Some("demir"));
    assert_eq!(parsed.phone.as_ref().map(|p| p.normalized.as_str()), Some("5321112233"));
    assert!(parsed.is_urgent);
    assert_eq!(parsed.confidence.level, ConfidenceLevel::High);
}

#[test]
fn multi_destination_scenario_yields_three_destinations() {
    let parsed = parse_message("Samsundan istanbul ankara izmir varmi");
    assert_eq!(parsed.locations.origin_province.as_deref(), Some("samsun"));
    for expected in ["istanbul", "ankara", "izmir"] {
        assert!(parsed.locations.destinations.contains(&expected.to_string()));
    }
}

#[test]
fn vehicle_term_collision_produces_empty_locations() {
    let parsed = parse_message("panel van ariyorum");
    assert_eq!(parsed.locations.origin, None);
    assert_eq!(parsed.locations.destination, None);
}

#[test]
fn parsiyel_cargo_is_detected_as_domain_when_no_keyword_regex_match() {
    let parsed = parse_message("kayseriden istanbula parsiyel yuk var");
    assert_eq!(parsed.cargo_domain.as_deref(), Some("parsiyel"));
    assert_eq!(parsed.message_type, MessageType::CargoAvailable);
}

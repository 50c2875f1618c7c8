//! Message-type classifier (spec.md §4.4): decides whether a freight
//! posting is someone looking for a vehicle, offering cargo, or offering a
//! vehicle, from keyword presence alone.

use lazy_static::lazy_static;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MessageType {
    VehicleWanted,
    CargoAvailable,
    VehicleAvailable,
    Unknown,
}

lazy_static! {
    static ref VEHICLE_WANTED_RE: Regex = Regex::new(
        r"(?i)\b(arac ariyorum|arac lazim|tir ariyorum|kamyon ariyorum|arac var mi|nakliyeci ariyorum|tir araniyor|kamyon araniyor|arac araniyor|kamyonet araniyor|dorse araniyor)\b"
    )
    .unwrap();
    static ref CARGO_AVAILABLE_RE: Regex =
        Regex::new(r"(?i)\b(yukum var|yuk var|yukumuz var|nakliye yuku|tasima isi var|yuk)\b").unwrap();
    static ref VEHICLE_AVAILABLE_RE: Regex =
        Regex::new(r"(?i)\b(aracim bos|aracim musait|bos arac|aracim var|musait)\b").unwrap();
}

/// Classifies `text`, in priority order `VehicleWanted` > `CargoAvailable` >
/// `VehicleAvailable` when more than one keyword class matches at once.
pub fn classify(text: &str) -> MessageType {
    if VEHICLE_WANTED_RE.is_match(text) {
        MessageType::VehicleWanted
    } else if CARGO_AVAILABLE_RE.is_match(text) {
        MessageType::CargoAvailable
    } else if VEHICLE_AVAILABLE_RE.is_match(text) {
        MessageType::VehicleAvailable
    } else {
        MessageType::Unknown
    }
}

/// A cheap pre-filter: does `text` look like a logistics posting at all?
/// Used to short-circuit full parsing for obviously unrelated chat noise.
pub fn is_likely_logistics_message(text: &str) -> bool {
    classify(text) != MessageType::Unknown
        || text.to_ascii_lowercase().contains("ton")
        || text.to_ascii_lowercase().contains("tir")
        || text.to_ascii_lowercase().contains("kamyon")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn vehicle_wanted_wins_over_cargo_available() {
        let text = "arac ariyorum, yukum var";
        assert_eq!(classify(text), MessageType::VehicleWanted);
    }

    #[test]
    fn cargo_available_matches() {
        assert_eq!(classify("istanbuldan ankaraya yukum var"), MessageType::CargoAvailable);
    }

    #[test]
    fn unknown_for_unrelated_chat() {
        assert_eq!(classify("merhaba nasilsin"), MessageType::Unknown);
        assert!(!is_likely_logistics_message("merhaba nasilsin"));
    }

    #[test]
    fn bare_yuk_classifies_as_cargo_available() {
        assert_eq!(classify("ankarada yuk"), MessageType::CargoAvailable);
    }

    #[test]
    fn bare_musait_classifies_as_vehicle_available() {
        assert_eq!(classify("istanbulda musait"), MessageType::VehicleAvailable);
    }
}

//! Multi-route extractor (spec.md §4.4): a single freight posting can list
//! several `<origin> - <destination>` legs, each with its own optional
//! inline vehicle/body.

use navlun_common as geo;

use crate::normalize::normalize_to_ascii;
use crate::vehicle::{self, VehicleMatch};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RouteCandidate {
    pub origin_province: String,
    pub destination_province: String,
    pub vehicle: VehicleMatch,
}

/// Splits `raw_text` on commas/semicolons into route segments, then each
/// segment on a dash into an origin/destination pair. A segment resolves
/// into a route only when both sides name a known province; anything else
/// is silently skipped (this is a best-effort enrichment, not the primary
/// location parse). Duplicate `(origin, destination)` pairs are dropped,
/// keeping the first occurrence's vehicle reading.
pub fn extract_all_routes(raw_text: &str) -> Vec<RouteCandidate> {
    let mut routes = Vec::new();
    for segment in raw_text.split([',', ';', '\n']) {
        let Some((left, right)) = split_on_dash(segment) else {
            continue;
        };
        let left_norm = normalize_to_ascii(left);
        let right_norm = normalize_to_ascii(right);
        let Some(origin) = first_province_token(&left_norm) else {
            continue;
        };
        let Some(destination) = first_province_token(&right_norm) else {
            continue;
        };
        if routes
            .iter()
            .any(|r: &RouteCandidate| r.origin_province == origin && r.destination_province == destination)
        {
            continue;
        }
        let segment_norm = normalize_to_ascii(segment);
        let tokens: Vec<&str> = segment_norm.split_whitespace().collect();
        let vehicle_match = vehicle::classify(&tokens);
        routes.push(RouteCandidate { origin_province: origin, destination_province: destination, vehicle: vehicle_match });
    }
    routes
}

/// Separators spec.md §4.4's multi-route pattern allows between provinces:
/// hyphen, en-dash, right-arrow, forward-slash.
const ROUTE_SEPARATORS: [char; 4] = ['-', '–', '→', '/'];

fn split_on_dash(segment: &str) -> Option<(&str, &str)> {
    for sep in ROUTE_SEPARATORS {
        if let Some(idx) = segment.find(sep) {
            let (left, right) = segment.split_at(idx);
            return Some((left.trim(), right[sep.len_utf8()..].trim()));
        }
    }
    None
}

fn first_province_token(normalized_segment: &str) -> Option<String> {
    normalized_segment
        .split_whitespace()
        .find_map(|word| geo::resolve_province(word).map(|p| p.ascii_name))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn extracts_single_route_with_vehicle() {
        let routes = extract_all_routes("Antalya - Istanbul tir");
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].origin_province, "antalya");
        assert_eq!(routes[0].destination_province, "istanbul");
    }

    #[test]
    fn extracts_multiple_routes_deduplicated() {
        let routes = extract_all_routes("Antalya - Istanbul, Izmir - Ankara, Antalya - Istanbul");
        assert_eq!(routes.len(), 2);
    }

    #[test]
    fn skips_segment_without_dash() {
        let routes = extract_all_routes("sadece antalya");
        assert!(routes.is_empty());
    }

    #[test]
    fn extracts_route_separated_by_arrow() {
        let routes = extract_all_routes("Antalya → Istanbul");
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].origin_province, "antalya");
        assert_eq!(routes[0].destination_province, "istanbul");
    }

    #[test]
    fn extracts_route_separated_by_slash() {
        let routes = extract_all_routes("Antalya / Istanbul");
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].origin_province, "antalya");
        assert_eq!(routes[0].destination_province, "istanbul");
    }

    #[test]
    fn extracts_route_separated_by_en_dash() {
        let routes = extract_all_routes("Antalya – Istanbul");
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].origin_province, "antalya");
        assert_eq!(routes[0].destination_province, "istanbul");
    }
}

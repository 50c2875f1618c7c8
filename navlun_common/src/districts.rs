use std::collections::{HashMap, HashSet};

use crate::data::DISTRICTS;
use crate::IstanbulSide;

/// A sub-administrative unit (ilçe) of a province (spec.md §3 `District`).
/// A single ascii name MAY map to multiple provinces; see
/// [`is_ambiguous_district`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct District {
    pub ascii_name: String,
    pub parent_province_code: u8,
    pub parent_province_ascii: String,
}

lazy_static! {
    static ref BY_ASCII: HashMap<&'static str, Vec<&'static str>> = {
        let mut map: HashMap<&'static str, Vec<&'static str>> = HashMap::new();
        for row in DISTRICTS {
            map.entry(row.ascii).or_default().push(row.province_ascii);
        }
        map
    };
    static ref AMBIGUOUS: HashSet<&'static str> = BY_ASCII
        .iter()
        .filter(|(_, provinces)| provinces.len() > 1)
        .map(|(&ascii, _)| ascii)
        .collect();
    static ref ISTANBUL_EUROPEAN: HashSet<&'static str> = [
        "besiktas", "sisli", "fatih", "bakirkoy", "beylikduzu", "avcilar", "esenyurt", "sariyer",
        "beyoglu",
    ]
    .into_iter()
    .collect();
    static ref ISTANBUL_ASIAN: HashSet<&'static str> = [
        "kadikoy", "uskudar", "maltepe", "kartal", "pendik", "sultanbeyli", "tuzla",
    ]
    .into_iter()
    .collect();
}

/// All districts matching `ascii` (possibly in several provinces). Empty if
/// unknown. Total: never panics.
pub fn resolve_districts(ascii: &str) -> Vec<District> {
    BY_ASCII
        .get(ascii)
        .map(|provinces| {
            provinces
                .iter()
                .map(|&province_ascii| District {
                    ascii_name: ascii.to_string(),
                    parent_province_code: crate::resolve_province(province_ascii)
                        .map(|p| p.code)
                        .unwrap_or_default(),
                    parent_province_ascii: province_ascii.to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Whether `ascii` names a district shared by more than one province (e.g.
/// `edremit`: Balıkesir and Van).
pub fn is_ambiguous_district(ascii: &str) -> bool {
    AMBIGUOUS.contains(ascii)
}

/// Which side of the Bosphorus `district_ascii` sits on, if it's a known
/// Istanbul district.
pub fn istanbul_side_of(district_ascii: &str) -> Option<IstanbulSide> {
    if ISTANBUL_EUROPEAN.contains(district_ascii) {
        Some(IstanbulSide::European)
    } else if ISTANBUL_ASIAN.contains(district_ascii) {
        Some(IstanbulSide::Asian)
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn edremit_is_ambiguous() {
        assert!(is_ambiguous_district("edremit"));
        let hits = resolve_districts("edremit");
        let provinces: HashSet<_> = hits.iter().map(|d| d.parent_province_ascii.as_str()).collect();
        assert!(provinces.contains("balikesir"));
        assert!(provinces.contains("van"));
    }

    #[test]
    fn unambiguous_district_resolves_single() {
        let hits = resolve_districts("kadikoy");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].parent_province_ascii, "istanbul");
    }

    #[test]
    fn unknown_district_is_empty() {
        assert!(resolve_districts("narniaburg").is_empty());
    }

    #[test]
    fn istanbul_side_lookup() {
        assert_eq!(istanbul_side_of("kadikoy"), Some(IstanbulSide::Asian));
        assert_eq!(istanbul_side_of("besiktas"), Some(IstanbulSide::European));
        assert_eq!(istanbul_side_of("adana"), None);
    }
}

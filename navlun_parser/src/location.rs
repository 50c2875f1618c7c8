//! Location parser (spec.md §4.3): turns one free-form Turkish utterance
//! into a `ParsedLocations` record. Total: never panics, returns an empty
//! record on no matches.

use std::collections::HashSet;

use regex::Regex;

use navlun_common::{self as geo, IstanbulSide, Region};

use crate::common::tokenize;
use crate::normalize::{preprocess, strip_suffix, strip_suffix_retry_candidates};

lazy_static! {
    static ref INTERNATIONAL_TERMS: HashSet<&'static str> = [
        "yurtdisi", "ihracat", "almanya", "bulgaristan", "yunanistan", "gurcistan", "iran",
        "irak", "suriye", "azerbaycan", "rusya", "italya", "fransa", "hollanda", "polonya",
        "romanya",
    ]
    .into_iter()
    .collect();
    static ref VEHICLE_TERMS_NOT_LOCATIONS: HashSet<&'static str> = [
        "arac", "kamyon", "tir", "dorse", "kasa", "kas", "kapali", "tenteli", "damperli", "frigo",
        "panelvan", "panelvan_vehicleterm", "sackasa_bodyterm", "treyler", "tanker", "lowbed", "mega",
        "jumbo", "konteyner", "kamyonet",
    ]
    .into_iter()
    .collect();
    static ref COMMON_WORDS_NOT_LOCATIONS: HashSet<&'static str> = [
        "olur", "var", "yok", "alan", "bey", "ova",
    ]
    .into_iter()
    .collect();
    static ref CARGO_PARSIYEL_RE: Regex = Regex::new(r"parsiyel|parca").unwrap();
    static ref CARGO_KOMPLE_RE: Regex = Regex::new(r"komple|full").unwrap();
    static ref CARGO_PALET_RE: Regex = Regex::new(r"palet").unwrap();
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParsedLocations {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub origin_province: Option<String>,
    pub origin_district: Option<String>,
    pub destination_province: Option<String>,
    pub destination_district: Option<String>,
    pub destinations: Vec<String>,
    pub origin_region: Option<Region>,
    pub destination_region: Option<Region>,
    pub same_province_search: bool,
    pub cargo_type: Option<String>,
    pub international_destination: bool,
    pub istanbul_side: Option<IstanbulSide>,
}

/// One token's resolution: the ascii name it resolved to, which province it
/// belongs to, an optional district name, and the direction flags carried
/// from suffix stripping.
struct Resolution {
    resolved_ascii: String,
    province_ascii: String,
    district_ascii: Option<String>,
    is_origin: bool,
    is_destination: bool,
}

fn try_resolve(stem: &str) -> Option<(String, Option<String>)> {
    if let Some(province) = geo::resolve_province(stem) {
        return Some((province.ascii_name, None));
    }
    let districts = geo::resolve_districts(stem);
    districts
        .into_iter()
        .next()
        .map(|d| (d.parent_province_ascii.clone(), Some(d.ascii_name)))
}

fn resolve_token(token: &str) -> Option<Resolution> {
    let stripped = strip_suffix(token);
    if stripped.stem != token {
        if let Some((province_ascii, district_ascii)) = try_resolve(&stripped.stem) {
            return Some(Resolution {
                resolved_ascii: stripped.stem.clone(),
                province_ascii,
                district_ascii,
                is_origin: stripped.is_origin,
                is_destination: stripped.is_destination,
            });
        }
        // Longest-first stem didn't resolve; retry shortest-first (hataya -> hatay).
        for candidate in strip_suffix_retry_candidates(token) {
            if let Some((province_ascii, district_ascii)) = try_resolve(&candidate.stem) {
                return Some(Resolution {
                    resolved_ascii: candidate.stem.clone(),
                    province_ascii,
                    district_ascii,
                    is_origin: candidate.is_origin,
                    is_destination: candidate.is_destination,
                });
            }
        }
        // Fall through to trying the raw (unstripped) token below.
    }
    // Either no suffix matched, or no stripped candidate resolved: try the
    // unstripped token with no direction (spec.md §4.3 step 5c).
    try_resolve(token).map(|(province_ascii, district_ascii)| Resolution {
        resolved_ascii: token.to_string(),
        province_ascii,
        district_ascii,
        is_origin: false,
        is_destination: false,
    })
}

fn contains_region_sweep(text: &str) -> Option<(Region, bool)> {
    for region in [
        Region::Marmara,
        Region::Ege,
        Region::Akdeniz,
        Region::IcAnadolu,
        Region::Karadeniz,
        Region::DoguAnadolu,
        Region::GuneydoguAnadolu,
    ] {
        for alias in region.aliases() {
            if let Some(pos) = text.find(alias) {
                // "nearest suffix context is origin-like": look at the word
                // immediately trailing the match for an origin suffix.
                let after = &text[pos + alias.len()..];
                let is_origin_like = after.trim_start().starts_with("dan")
                    || after.trim_start().starts_with("den")
                    || crate::normalize::ORIGIN_SUFFIXES
                        .iter()
                        .any(|s| after.trim_start().starts_with(s));
                return Some((region, is_origin_like));
            }
        }
    }
    None
}

fn detect_cargo_type(text: &str) -> Option<String> {
    if CARGO_PARSIYEL_RE.is_match(text) {
        Some("parsiyel".to_string())
    } else if CARGO_KOMPLE_RE.is_match(text) {
        Some("komple".to_string())
    } else if CARGO_PALET_RE.is_match(text) {
        Some("palet".to_string())
    } else {
        None
    }
}

/// Parses one user utterance into a `ParsedLocations` record. Total
/// function: on failure to find anything, returns `ParsedLocations::default()`.
pub fn parse_locations(raw_text: &str) -> ParsedLocations {
    let text = preprocess(raw_text);
    let tokens = tokenize(&text);

    let mut result = ParsedLocations::default();

    // Step 2: international sweep.
    if tokens.iter().any(|t| INTERNATIONAL_TERMS.contains(*t)) {
        result.international_destination = true;
    }

    // Step 3: region sweep.
    if let Some((region, is_origin)) = contains_region_sweep(&text) {
        if is_origin {
            result.origin_region = Some(region);
        } else {
            result.destination_region = Some(region);
        }
        result.destinations = geo::region_provinces(region)
            .iter()
            .map(|s| s.to_string())
            .collect();
    }

    // Step 4: Istanbul-side sweep.
    if text.contains("avrupa") && text.contains("yaka") {
        result.istanbul_side = Some(IstanbulSide::European);
    } else if text.contains("anadolu") && text.contains("yaka") {
        result.istanbul_side = Some(IstanbulSide::Asian);
    }

    // Step 5: per-token resolution.
    let mut origin_resolution: Option<Resolution> = None;
    let mut destination_resolution: Option<Resolution> = None;
    let mut residuals: Vec<Resolution> = Vec::new();

    for token in &tokens {
        let stem_for_skip = strip_suffix(token).stem;
        if VEHICLE_TERMS_NOT_LOCATIONS.contains(stem_for_skip.as_str())
            || VEHICLE_TERMS_NOT_LOCATIONS.contains(*token)
            || COMMON_WORDS_NOT_LOCATIONS.contains(stem_for_skip.as_str())
            || COMMON_WORDS_NOT_LOCATIONS.contains(*token)
        {
            continue;
        }
        let Some(resolution) = resolve_token(token) else {
            continue;
        };
        if resolution.is_origin && origin_resolution.is_none() {
            origin_resolution = Some(resolution);
        } else if resolution.is_destination && destination_resolution.is_none() {
            destination_resolution = Some(resolution);
        } else {
            residuals.push(resolution);
        }
    }

    // Step 7: residual assignment.
    if origin_resolution.is_some() && residuals.len() >= 2 {
        // Explicit origin + >=2 residuals -> all residuals become destinations.
        for r in &residuals {
            if !result.destinations.contains(&r.province_ascii) {
                result.destinations.push(r.province_ascii.clone());
            }
        }
    } else if origin_resolution.is_none() && destination_resolution.is_none() && residuals.len() >= 3
    {
        origin_resolution = Some(residuals.remove(0));
        for r in &residuals {
            if !result.destinations.contains(&r.province_ascii) {
                result.destinations.push(r.province_ascii.clone());
            }
        }
    } else {
        let mut drain = residuals.drain(..);
        if origin_resolution.is_none() {
            origin_resolution = drain.next();
        }
        if destination_resolution.is_none() {
            destination_resolution = drain.next();
        }
    }

    if let Some(origin) = &origin_resolution {
        result.origin = Some(origin.resolved_ascii.clone());
        result.origin_province = Some(origin.province_ascii.clone());
        result.origin_district = origin.district_ascii.clone();
    }
    if let Some(destination) = &destination_resolution {
        result.destination = Some(destination.resolved_ascii.clone());
        result.destination_province = Some(destination.province_ascii.clone());
        result.destination_district = destination.district_ascii.clone();
    }

    // Step 8: same-province detection.
    if let (Some(o), Some(d)) = (&origin_resolution, &destination_resolution) {
        if o.province_ascii == d.province_ascii
            && o.district_ascii.is_some()
            && d.district_ascii.is_some()
            && o.district_ascii != d.district_ascii
        {
            result.same_province_search = true;
        } else if o.province_ascii == d.province_ascii && o.resolved_ascii == d.resolved_ascii {
            result.same_province_search = true;
        }
    }

    // Step 9: cargo type.
    result.cargo_type = detect_cargo_type(&text);

    result
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn suffix_grammar_kayseriden_istanbula() {
        let parsed = parse_locations("Kayseri'den İstanbul'a");
        assert_eq!(parsed.origin_province.as_deref(), Some("kayseri"));
        assert_eq!(parsed.destination_province.as_deref(), Some("istanbul"));
    }

    #[test]
    fn retry_suffix_hataya() {
        let parsed = parse_locations("hataya");
        assert_eq!(parsed.destination_province.as_deref(), Some("hatay"));
    }

    #[test]
    fn vehicle_term_collision_panel_van() {
        let parsed = parse_locations("panel van ariyorum");
        assert_eq!(parsed.origin, None);
        assert_eq!(parsed.destination, None);
    }

    #[test]
    fn multi_destination_samsun_istanbul_ankara_izmir() {
        let parsed = parse_locations("Samsundan istanbul ankara izmir varmi");
        assert_eq!(parsed.origin_province.as_deref(), Some("samsun"));
        assert!(parsed.destinations.contains(&"istanbul".to_string()));
        assert!(parsed.destinations.contains(&"ankara".to_string()));
        assert!(parsed.destinations.contains(&"izmir".to_string()));
    }

    #[test]
    fn empty_on_total_garbage() {
        let parsed = parse_locations("asdkjhaskjdh qweqwe");
        assert_eq!(parsed, ParsedLocations::default());
    }

    #[test]
    fn cargo_type_parsiyel() {
        let parsed = parse_locations("kayseriden istanbula parsiyel yuk var");
        assert_eq!(parsed.cargo_type.as_deref(), Some("parsiyel"));
    }
}

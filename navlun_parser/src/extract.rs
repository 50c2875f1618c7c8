//! Weight, phone, urgency and cargo-domain subextractors (spec.md §4.4).

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WEIGHT_RE: Regex =
        Regex::new(r"(?i)(\d+(?:[.,]\d+)?)\s*(ton|kg)").unwrap();
    static ref PHONE_RE: Regex = Regex::new(r"\+?[\d][\d .\-()]{8,15}\d").unwrap();
    static ref URGENCY_RE: Regex =
        Regex::new(r"(?i)\b(acil|hemen|bugun|ivedi|derhal)\b").unwrap();
    static ref CARGO_DOMAIN_RE: Regex = Regex::new(
        r"(?i)\b(demir|celik|tekstil|kumas|gida|sebze|meyve|mobilya|beyaz\s?esya|insaat|cimento|kereste|kimyasal|makine|otomotiv|ambalaj|kagit)\b"
    )
    .unwrap();
}

/// The unit a weight was actually expressed in, per spec.md §3's
/// `weight {value, unit}` data model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Ton,
    Kg,
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Ton => "ton",
            WeightUnit::Kg => "kg",
        }
    }
}

/// A weight reading: `tons` is the tonnage-normalized value used for
/// filtering/sorting, `unit` is the unit actually present in the message
/// (preserved for display, not inferred from the conversion).
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WeightReading {
    pub tons: f64,
    pub unit: WeightUnit,
}

/// Extracts the first weight mention in `text`. A `kg` reading is only
/// converted to tonnes when no explicit `ton` reading exists in the text
/// (spec.md §4.4 weight extraction); the original unit is preserved on
/// `unit` either way so callers can render `12000 kg` rather than `12 ton`.
pub fn extract_weight(text: &str) -> Option<WeightReading> {
    let mut kg_reading: Option<f64> = None;
    let mut ton_reading: Option<f64> = None;
    for caps in WEIGHT_RE.captures_iter(text) {
        let value: f64 = caps[1].replace(',', ".").parse().ok()?;
        let unit = caps[2].to_ascii_lowercase();
        if unit == "ton" && ton_reading.is_none() {
            ton_reading = Some(value);
        } else if unit == "kg" && kg_reading.is_none() {
            kg_reading = Some(value);
        }
    }
    if let Some(tons) = ton_reading {
        return Some(WeightReading { tons, unit: WeightUnit::Ton });
    }
    kg_reading.map(|kg| WeightReading { tons: kg / 1000.0, unit: WeightUnit::Kg })
}

/// A phone number mention: the digits as found, and a normalized
/// `5XXXXXXXXX` form with the country/trunk prefix stripped.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PhoneReading {
    pub original: String,
    pub normalized: String,
}

/// Extracts the first phone-shaped run in `text` (digits optionally broken
/// up by spaces/dots/dashes/parens, as typed by hand: `0532 111 22 33`) and
/// normalizes leading `+90`/`90`/`0` trunk/country prefixes away, leaving a
/// bare `5XXXXXXXXX`. A candidate whose digit count falls outside 10-13 is
/// not a phone number and is skipped.
pub fn extract_phone(text: &str) -> Option<PhoneReading> {
    for m in PHONE_RE.find_iter(text) {
        let original = m.as_str();
        let digits: String = original.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() < 10 || digits.len() > 13 {
            continue;
        }
        let normalized = if let Some(rest) = digits.strip_prefix("90") {
            if rest.len() == 10 { rest.to_string() } else { digits.clone() }
        } else if let Some(rest) = digits.strip_prefix('0') {
            rest.to_string()
        } else {
            digits.clone()
        };
        return Some(PhoneReading { original: original.to_string(), normalized });
    }
    None
}

/// Whether `text` contains an urgency marker (acil/hemen/bugun/ivedi/derhal).
pub fn extract_urgency(text: &str) -> bool {
    URGENCY_RE.is_match(text)
}

/// The cargo-domain keyword found in `text`, if any (demir/tekstil/gida/...).
pub fn extract_cargo_domain(text: &str) -> Option<String> {
    CARGO_DOMAIN_RE
        .captures(text)
        .map(|c| c[1].to_ascii_lowercase().replace(' ', ""))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn extracts_tons() {
        let w = extract_weight("20 ton yuk var").unwrap();
        assert_eq!(w.tons, 20.0);
        assert_eq!(w.unit, WeightUnit::Ton);
    }

    #[test]
    fn converts_kg_to_tons_when_no_ton_reading_but_keeps_kg_unit() {
        let w = extract_weight("12000 kg esya").unwrap();
        assert_eq!(w.tons, 12.0);
        assert_eq!(w.unit, WeightUnit::Kg);
    }

    #[test]
    fn prefers_explicit_ton_over_kg() {
        let w = extract_weight("500 kg ve 20 ton karisik yuk").unwrap();
        assert_eq!(w.tons, 20.0);
        assert_eq!(w.unit, WeightUnit::Ton);
    }

    #[test]
    fn comma_decimal_weight() {
        let w = extract_weight("2,5 ton").unwrap();
        assert_eq!(w.tons, 2.5);
    }

    #[test]
    fn normalizes_phone_with_country_code() {
        let p = extract_phone("tel: 905321234567").unwrap();
        assert_eq!(p.normalized, "5321234567");
    }

    #[test]
    fn normalizes_phone_with_trunk_zero() {
        let p = extract_phone("0532 123 45 67".replace(' ', "").as_str()).unwrap();
        assert_eq!(p.normalized, "5321234567");
    }

    #[test]
    fn detects_urgency() {
        assert!(extract_urgency("acil arac lazim"));
        assert!(!extract_urgency("arac lazim"));
    }

    #[test]
    fn detects_cargo_domain() {
        assert_eq!(extract_cargo_domain("demir yuku var").as_deref(), Some("demir"));
    }
}

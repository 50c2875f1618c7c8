//! Vehicle/body classifier (spec.md §4.4).

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum VehicleType {
    Tir,
    Kamyon,
    Kamyonet,
    Dorse,
    Treyler,
    Tanker,
    Lowbed,
    Mega,
    Jumbo,
    Konteyner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BodyType {
    Frigo,
    Damperli,
    Tenteli,
    Kapali,
    Acik,
    Lowbed,
    Platform,
    SacKasa,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VehicleMatch {
    pub vehicle_type: Option<VehicleType>,
    pub body_type: Option<BodyType>,
    pub is_refrigerated: bool,
}

lazy_static! {
    static ref VEHICLE_TABLE: HashMap<&'static str, VehicleType> = [
        ("tir", VehicleType::Tir),
        ("kamyon", VehicleType::Kamyon),
        ("kamyonet", VehicleType::Kamyonet),
        ("dorse", VehicleType::Dorse),
        ("treyler", VehicleType::Treyler),
        ("tanker", VehicleType::Tanker),
        ("lowbed", VehicleType::Lowbed),
        ("mega", VehicleType::Mega),
        ("jumbo", VehicleType::Jumbo),
        ("konteyner", VehicleType::Konteyner),
    ]
    .into_iter()
    .collect();
    static ref BODY_TABLE: HashMap<&'static str, (BodyType, bool)> = [
        ("frigo", (BodyType::Frigo, true)),
        ("frigorifik", (BodyType::Frigo, true)),
        ("termokin", (BodyType::Frigo, true)),
        ("sogutuculu", (BodyType::Frigo, true)),
        ("sogutucu", (BodyType::Frigo, true)),
        ("soguk", (BodyType::Frigo, true)),
        ("damperli", (BodyType::Damperli, false)),
        ("tenteli", (BodyType::Tenteli, false)),
        ("kapali", (BodyType::Kapali, false)),
        ("acik", (BodyType::Acik, false)),
        ("lowbed", (BodyType::Lowbed, false)),
        ("platform", (BodyType::Platform, false)),
        ("sackasa_bodyterm", (BodyType::SacKasa, false)),
    ]
    .into_iter()
    .collect();
}

/// Classifies every token in `tokens` against the vehicle/body tables,
/// accumulating the first vehicle and body hit and OR-ing refrigeration.
pub fn classify(tokens: &[&str]) -> VehicleMatch {
    let mut result = VehicleMatch::default();
    for token in tokens {
        if result.vehicle_type.is_none() {
            if let Some(&vt) = VEHICLE_TABLE.get(token) {
                result.vehicle_type = Some(vt);
            }
        }
        if let Some(&(bt, refrigerated)) = BODY_TABLE.get(token) {
            if result.body_type.is_none() {
                result.body_type = Some(bt);
            }
            result.is_refrigerated |= refrigerated;
        }
    }
    result
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn classifies_tir_and_frigo() {
        let m = classify(&["tir", "frigorifik", "ariyorum"]);
        assert_eq!(m.vehicle_type, Some(VehicleType::Tir));
        assert_eq!(m.body_type, Some(BodyType::Frigo));
        assert!(m.is_refrigerated);
    }

    #[test]
    fn no_match_is_default() {
        let m = classify(&["merhaba", "nasilsin"]);
        assert_eq!(m, VehicleMatch::default());
    }

    #[test]
    fn classifies_sac_kasa_after_collision_phrase_collapse() {
        let preprocessed = crate::normalize::preprocess("sac kasa ariyorum");
        let tokens = crate::common::tokenize(&preprocessed);
        let m = classify(&tokens);
        assert_eq!(m.body_type, Some(BodyType::SacKasa));
    }
}

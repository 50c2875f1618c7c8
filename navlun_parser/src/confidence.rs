//! Confidence scorer (spec.md §4.4): a weighted sum of which fields a
//! parse actually populated, bucketed into HIGH/MEDIUM/LOW.

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ConfidenceScore {
    pub level: ConfidenceLevel,
    pub score: f64,
    pub factors: Vec<&'static str>,
}

/// Inputs the scorer reads to decide which weighted factors fired. Each
/// field corresponds to one term of the spec.md §4.4 weight table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreInputs {
    pub has_origin: bool,
    pub has_destination: bool,
    pub has_vehicle_or_body: bool,
    pub has_phone: bool,
    pub has_weight: bool,
    pub has_cargo: bool,
}

/// Weights: origin 0.25, destination 0.25, vehicle-or-body 0.15, phone 0.15,
/// weight 0.10, cargo 0.10. HIGH >= 0.55, MEDIUM >= 0.30, else LOW.
pub fn score(inputs: ScoreInputs) -> ConfidenceScore {
    let mut total = 0.0;
    let mut factors = Vec::new();

    if inputs.has_origin {
        total += 0.25;
        factors.push("origin");
    }
    if inputs.has_destination {
        total += 0.25;
        factors.push("destination");
    }
    if inputs.has_vehicle_or_body {
        total += 0.15;
        factors.push("vehicle_or_body");
    }
    if inputs.has_phone {
        total += 0.15;
        factors.push("phone");
    }
    if inputs.has_weight {
        total += 0.10;
        factors.push("weight");
    }
    if inputs.has_cargo {
        total += 0.10;
        factors.push("cargo");
    }

    let level = if total >= 0.55 {
        ConfidenceLevel::High
    } else if total >= 0.30 {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    };

    ConfidenceScore { level, score: total, factors }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn full_match_is_high() {
        let s = score(ScoreInputs {
            has_origin: true,
            has_destination: true,
            has_vehicle_or_body: true,
            has_phone: true,
            has_weight: true,
            has_cargo: true,
        });
        assert_eq!(s.level, ConfidenceLevel::High);
        assert!((s.score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn origin_and_destination_only_is_medium() {
        let s = score(ScoreInputs { has_origin: true, has_destination: true, ..Default::default() });
        assert_eq!(s.level, ConfidenceLevel::Medium);
    }

    #[test]
    fn nothing_is_low() {
        let s = score(ScoreInputs::default());
        assert_eq!(s.level, ConfidenceLevel::Low);
        assert_eq!(s.score, 0.0);
    }

    #[test]
    fn origin_vehicle_phone_crosses_high_threshold() {
        let s = score(ScoreInputs {
            has_origin: true,
            has_destination: true,
            has_vehicle_or_body: true,
            has_phone: true,
            ..Default::default()
        });
        assert_eq!(s.level, ConfidenceLevel::High);
    }
}

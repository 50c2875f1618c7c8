//! Deterministic reply rendering (spec.md §6.3). Built entirely in code so
//! the LLM never sees (and can never hallucinate into) the results text.

use navlun::Job;
use navlun_common::resolve_province;
use navlun_parser::vehicle::{BodyType, VehicleType};

/// Renders `tons` back in whichever unit the posting actually used
/// (`weight_unit`), rather than always assuming tonnes.
fn format_weight(tons: f64, unit: &str) -> String {
    let (value, label) = if unit == "kg" { (tons * 1000.0, "kg") } else { (tons, "ton") };
    if (value.fract()).abs() < 1e-9 {
        format!("{value:.0} {label}")
    } else {
        let s = format!("{value:.2}");
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        format!("{trimmed} {label}")
    }
}

pub(crate) fn vehicle_label(v: VehicleType) -> &'static str {
    match v {
        VehicleType::Tir => "tir",
        VehicleType::Kamyon => "kamyon",
        VehicleType::Kamyonet => "kamyonet",
        VehicleType::Dorse => "dorse",
        VehicleType::Treyler => "treyler",
        VehicleType::Tanker => "tanker",
        VehicleType::Lowbed => "lowbed",
        VehicleType::Mega => "mega",
        VehicleType::Jumbo => "jumbo",
        VehicleType::Konteyner => "konteyner",
    }
}

fn body_label(b: BodyType) -> &'static str {
    match b {
        BodyType::Frigo => "frigo",
        BodyType::Damperli => "damperli",
        BodyType::Tenteli => "tenteli",
        BodyType::Kapali => "kapali",
        BodyType::Acik => "acik",
        BodyType::Lowbed => "lowbed",
        BodyType::Platform => "platform",
        BodyType::SacKasa => "sac kasa",
    }
}

fn place_label(province_ascii: Option<&str>, district_ascii: Option<&str>) -> String {
    let province = province_ascii
        .and_then(resolve_province)
        .map(|p| p.ascii_name)
        .or_else(|| province_ascii.map(str::to_string))
        .unwrap_or_else(|| "?".to_string());
    match district_ascii {
        Some(d) => format!("{province}/{d}"),
        None => province,
    }
}

/// One line per posting: `<origin[/district]> - <destination[/district]>,
/// <w> <unit>, <cargo>, <vehicle>, <body>, frigorifik?, acil?, tel: <phone>`.
pub fn render_job(job: &Job) -> String {
    let origin = place_label(job.origin_province.as_deref(), job.origin_district.as_deref());
    let destination = place_label(job.destination_province.as_deref(), job.destination_district.as_deref());

    let mut fields = vec![format!("{origin} - {destination}")];

    if let Some(tons) = job.weight {
        let unit = job.weight_unit.as_deref().unwrap_or("ton");
        fields.push(format_weight(tons, unit));
    }
    if let Some(cargo) = &job.cargo_type {
        fields.push(cargo.clone());
    }
    if let Some(vehicle) = job.vehicle_type {
        fields.push(vehicle_label(vehicle).to_string());
    }
    if let Some(body) = job.body_type {
        fields.push(body_label(body).to_string());
    }
    if job.is_refrigerated {
        fields.push("frigorifik".to_string());
    }
    if job.is_urgent {
        fields.push("acil".to_string());
    }
    fields.push(format!("tel: {}", job.contact_phone_normalized));

    fields.join(", ").to_lowercase()
}

/// Renders a page of results plus the "more available" hint trailer when
/// `total_count` exceeds what was shown.
pub fn render_results(jobs: &[Job], total_count: u64, offset: u32) -> String {
    if jobs.is_empty() {
        return String::new();
    }
    let mut lines: Vec<String> = jobs.iter().map(render_job).collect();
    let shown_end = offset as u64 + jobs.len() as u64;
    if shown_end < total_count {
        lines.push(format!(
            "hint: toplamda {total_count} ilan var, {shown_end} tane gosteriyorum. \"devam\" yaz daha fazla gosteririm."
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod test {
    use super::*;
    use navlun_parser::confidence::ConfidenceLevel;
    use navlun_parser::message_type::MessageType;
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_job() -> Job {
        Job {
            id: Uuid::nil(),
            message_id: "MSG1".to_string(),
            source_group_id: "grp".to_string(),
            raw_text: "".to_string(),
            message_type: MessageType::VehicleWanted,
            origin_mentioned: Some("antalya".to_string()),
            origin_province: Some("antalya".to_string()),
            origin_province_code: Some(7),
            origin_district: None,
            destination_mentioned: Some("istanbul".to_string()),
            destination_province: Some("istanbul".to_string()),
            destination_province_code: Some(34),
            destination_district: None,
            vehicle_type: Some(VehicleType::Tir),
            body_type: None,
            is_refrigerated: false,
            contact_phone: "05321112233".to_string(),
            contact_phone_normalized: "5321112233".to_string(),
            contact_name: None,
            sender_jid: None,
            sender_phone: None,
            weight: Some(8.5),
            weight_unit: Some("ton".to_string()),
            cargo_type: Some("demir".to_string()),
            load_type: None,
            is_urgent: true,
            confidence_score: 1.0,
            confidence_level: ConfidenceLevel::High,
            route_index: None,
            total_routes: None,
            posted_at: Utc::now(),
            created_at: Utc::now(),
            is_active: true,
        }
    }

    #[test]
    fn formats_weight_without_trailing_zeros() {
        assert_eq!(format_weight(8.5, "ton"), "8.5 ton");
        assert_eq!(format_weight(8.0, "ton"), "8 ton");
        assert_eq!(format_weight(20.0, "ton"), "20 ton");
    }

    #[test]
    fn formats_weight_back_into_kg_when_that_was_the_original_unit() {
        assert_eq!(format_weight(0.5, "kg"), "500 kg");
    }

    #[test]
    fn renders_one_job_line() {
        let line = render_job(&sample_job());
        assert_eq!(line, "antalya - istanbul, 8.5 ton, demir, tir, acil, tel: 5321112233");
    }

    #[test]
    fn appends_hint_line_when_more_remain() {
        let jobs = vec![sample_job()];
        let rendered = render_results(&jobs, 17, 0);
        assert!(rendered.contains("hint: toplamda 17 ilan var, 1 tane gosteriyorum"));
    }

    #[test]
    fn omits_hint_line_when_fully_shown() {
        let jobs = vec![sample_job()];
        let rendered = render_results(&jobs, 1, 0);
        assert!(!rendered.contains("hint:"));
    }
}

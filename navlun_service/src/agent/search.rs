//! The normal-search path (spec.md §4.7 step 15) plus the region/intra-city/
//! multi-destination/pagination handlers (steps 7, 10–14) that all share the
//! same "build params, query, apply post-query behaviors, render" shape.

use navlun::store::JobSearchParams;
use navlun::types::{ConversationContext, ConversationContextPatch};
use navlun::Job;
use navlun_common::IstanbulSide;
use navlun_parser::location::ParsedLocations;
use navlun_parser::vehicle::{BodyType, VehicleType};

use crate::agent::render::render_results;
use crate::state::AppState;

/// spec.md §9 Open Question 1: kept as documented behavior, exposed as a
/// tunable rather than a hardcoded literal.
pub const KAMYONET_MAX_WEIGHT_TON: f64 = 3.5;

/// spec.md §9 Open Question 3: the neighbor-suggestion count, parameterized.
pub const NEARBY_SUGGESTION_LIMIT: usize = 3;

pub const PAGE_SIZE: u32 = 10;

pub struct SearchOutcome {
    pub reply: String,
    pub context_patch: ConversationContextPatch,
}

fn apply_kamyonet_cap(mut params: JobSearchParams) -> JobSearchParams {
    if params.vehicle_type == Some(VehicleType::Kamyonet) && params.max_weight_tons.is_none() {
        params.max_weight_tons = Some(KAMYONET_MAX_WEIGHT_TON);
    }
    params
}

/// spec.md §4.7 post-query: filters jobs by Istanbul-side membership for
/// whichever endpoint of *that job* is Istanbul. Open Question 2: when
/// neither endpoint of the search is Istanbul at all, the filter is a no-op
/// (kept as-is, flagged for review in DESIGN.md).
fn apply_istanbul_side_filter(jobs: Vec<Job>, side: IstanbulSide, origin_is_istanbul: bool, destination_is_istanbul: bool) -> Vec<Job> {
    if !origin_is_istanbul && !destination_is_istanbul {
        return jobs;
    }
    jobs.into_iter()
        .filter(|job| {
            if job.origin_province.as_deref() == Some("istanbul") {
                job.origin_district.as_deref().and_then(navlun_common::istanbul_side_of) == Some(side)
            } else if job.destination_province.as_deref() == Some("istanbul") {
                job.destination_district.as_deref().and_then(navlun_common::istanbul_side_of) == Some(side)
            } else {
                true
            }
        })
        .collect()
}

/// Runs one search against `params`, applying the Istanbul-side filter and
/// the parsiyel fallback (spec.md §4.7 post-query behaviors). Returns the
/// jobs actually to render, the total count they're drawn from, and an
/// optional disclaimer line to prepend.
async fn execute_search(
    state: &AppState,
    params: JobSearchParams,
    istanbul_side: Option<IstanbulSide>,
) -> Result<(Vec<Job>, u64, Option<String>), navlun::error::JobStoreError> {
    let params = apply_kamyonet_cap(params);
    let origin_is_istanbul = params.origin_province.as_deref() == Some("istanbul");
    let destination_is_istanbul = params.destination_province.as_deref() == Some("istanbul");

    let result = state.jobs.search(&params).await?;
    let mut jobs = result.jobs;
    let mut total = result.total_count;
    if let Some(side) = istanbul_side {
        jobs = apply_istanbul_side_filter(jobs, side, origin_is_istanbul, destination_is_istanbul);
    }

    let mut disclaimer = None;
    if jobs.is_empty() && params.cargo_type.as_deref() == Some("parsiyel") {
        let mut retry_params = params.clone();
        retry_params.cargo_type = None;
        let retry = state.jobs.search(&retry_params).await?;
        if !retry.jobs.is_empty() {
            jobs = retry.jobs;
            total = retry.total_count;
            disclaimer = Some(
                "not: parsiyel ilan bulamadim, ama su yuklerden birinde parsiyel olup olmadigini telefonla teyit etmen gerekebilir.".to_string(),
            );
        }
    }

    Ok((jobs, total, disclaimer))
}

fn zero_results_message(origin: Option<&str>, destination: Option<&str>) -> String {
    match (origin, destination) {
        (Some(o), Some(d)) => format!("{o} - {d} rotasinda uygun ilan bulamadim."),
        (Some(o), None) => format!("{o} icin uygun ilan bulamadim."),
        _ => "uygun ilan bulamadim.".to_string(),
    }
}

fn nearby_suggestion_offer(origin: Option<&str>) -> Option<(String, String)> {
    let origin = origin?;
    let neighbors = navlun_common::neighbors(origin);
    if neighbors.is_empty() {
        return None;
    }
    let sample: Vec<&str> = neighbors.iter().take(NEARBY_SUGGESTION_LIMIT).copied().collect();
    let text = format!(
        "yakin illere de bakmami ister misin? {} icin de arayabilirim, \"evet\" yaz.",
        sample.join(", ")
    );
    Some((text, sample.first().copied().unwrap_or(origin).to_string()))
}

fn vehicle_suggestion_offer(context: &ConversationContext, params: &JobSearchParams, result_count: usize) -> Option<String> {
    if params.vehicle_type.is_some() || result_count < 5 {
        return None;
    }
    let preferred = context.preferred_vehicle?;
    let label = crate::agent::render::vehicle_label(preferred);
    Some(format!("tercih ettigin arac tipiyle ({label}) de aramami ister misin? \"evet\" yaz."))
}

/// Builds and runs one query, then updates context exactly as spec.md §4.7
/// post-query describes: total count, offset reset, shown count, last
/// locations/filters (or the empty-string sentinel when cleared).
async fn run_and_render(
    state: &AppState,
    context: &ConversationContext,
    mut params: JobSearchParams,
    istanbul_side: Option<IstanbulSide>,
    clear_filters: bool,
) -> SearchOutcome {
    params.limit = PAGE_SIZE;
    let (jobs, total, disclaimer) = match execute_search(state, params.clone(), istanbul_side).await {
        Ok(r) => r,
        Err(_) => {
            return SearchOutcome {
                reply: "su anda aramayi yapamadim, birazdan tekrar dener misin?".to_string(),
                context_patch: ConversationContextPatch::default(),
            };
        }
    };

    let mut patch = ConversationContextPatch {
        last_origin: params.origin_province.clone().or(Some(String::new())),
        last_destination: Some(params.destination_province.clone().unwrap_or_default()),
        last_offset: Some(params.offset),
        last_shown_count: Some(jobs.len() as u32),
        last_total_count: Some(total as u32),
        last_job_ids: Some(jobs.iter().map(|j| j.id).collect()),
        ..Default::default()
    };
    if clear_filters {
        patch.last_vehicle_type = Some(None);
        patch.last_body_type = Some(None);
        patch.last_cargo_type = Some(None);
    } else {
        patch.last_vehicle_type = Some(params.vehicle_type);
        patch.last_body_type = Some(params.body_type);
        patch.last_cargo_type = Some(params.cargo_type.clone());
    }

    if jobs.is_empty() {
        let mut reply = zero_results_message(params.origin_province.as_deref(), params.destination_province.as_deref());
        if let Some((offer, neighbor)) = nearby_suggestion_offer(params.origin_province.as_deref()) {
            reply.push(' ');
            reply.push_str(&offer);
            patch.pending_nearby_suggestion = Some(Some(neighbor));
        }
        return SearchOutcome { reply, context_patch: patch };
    }

    let mut reply = render_results(&jobs, total, params.offset);
    if let Some(d) = disclaimer {
        reply = format!("{d}\n{reply}");
    }
    if let Some(offer) = vehicle_suggestion_offer(context, &params, jobs.len()) {
        reply.push('\n');
        reply.push_str(&offer);
        patch.pending_vehicle_suggestion = Some(true);
    }

    SearchOutcome { reply, context_patch: patch }
}

/// spec.md §4.7 step 7 pagination: carries only origin/destination from
/// context forward; filters are deliberately dropped.
pub async fn run_pagination(state: &AppState, context: &ConversationContext) -> SearchOutcome {
    let next_offset = context.last_offset + context.last_shown_count;
    if next_offset >= context.last_total_count {
        return SearchOutcome {
            reply: "tum ilanlari zaten gosterdim.".to_string(),
            context_patch: ConversationContextPatch::default(),
        };
    }
    let params = JobSearchParams {
        origin_province: context.last_origin.clone().filter(|s| !s.is_empty()),
        destination_province: context.last_destination.clone().filter(|s| !s.is_empty()),
        offset: next_offset,
        limit: PAGE_SIZE,
        ..Default::default()
    };
    run_and_render(state, context, params, None, false).await
}

/// spec.md §4.7 step 8: "her yere" / "tum iller" / "turkiye geneli".
pub async fn run_her_yere(state: &AppState, context: &ConversationContext, origin: Option<String>) -> SearchOutcome {
    let params = JobSearchParams { origin_province: origin, offset: 0, limit: PAGE_SIZE, ..Default::default() };
    run_and_render(state, context, params, None, true).await
}

/// spec.md §4.7 steps 10/11: intra-city and same-province search, identical
/// retry ladder (origin=destination -> origin only -> "none").
pub async fn run_intra_city(state: &AppState, context: &ConversationContext, province: &str) -> SearchOutcome {
    let params = JobSearchParams {
        origin_province: Some(province.to_string()),
        destination_province: Some(province.to_string()),
        offset: 0,
        limit: PAGE_SIZE,
        ..Default::default()
    };
    let (jobs, total, _) = match execute_search(state, params.clone(), None).await {
        Ok(r) => r,
        Err(_) => return SearchOutcome {
            reply: "su anda aramayi yapamadim, birazdan tekrar dener misin?".to_string(),
            context_patch: ConversationContextPatch::default(),
        },
    };
    if !jobs.is_empty() {
        let mut reply = render_results(&jobs, total, 0);
        reply.push_str("\n(not: sehir ici tasima islerinde ilan sayisi genelde az olur.)");
        return SearchOutcome {
            reply,
            context_patch: ConversationContextPatch {
                last_origin: Some(province.to_string()),
                last_destination: Some(province.to_string()),
                last_offset: Some(0),
                last_shown_count: Some(jobs.len() as u32),
                last_total_count: Some(total as u32),
                ..Default::default()
            },
        };
    }

    let origin_only_params = JobSearchParams { origin_province: Some(province.to_string()), offset: 0, limit: PAGE_SIZE, ..Default::default() };
    let (jobs, total, _) = execute_search(state, origin_only_params, None).await.unwrap_or_default();
    if jobs.is_empty() {
        return SearchOutcome {
            reply: format!("{province} icin hic ilan bulamadim."),
            context_patch: ConversationContextPatch::default(),
        };
    }
    let mut reply = render_results(&jobs, total, 0);
    reply.push_str("\n(not: sehir ici tasima islerinde ilan sayisi genelde az olur.)");
    SearchOutcome {
        reply,
        context_patch: ConversationContextPatch {
            last_origin: Some(province.to_string()),
            last_destination: Some(String::new()),
            last_offset: Some(0),
            last_shown_count: Some(jobs.len() as u32),
            last_total_count: Some(total as u32),
            ..Default::default()
        },
    }
}

/// spec.md §4.7 steps 12/13: region-grouped search over the first five
/// provinces in the region's list.
pub async fn run_region_search(state: &AppState, origin: Option<&str>, destinations: &[String]) -> SearchOutcome {
    let mut sections = Vec::new();
    let mut empty_destinations = Vec::new();
    for destination in destinations.iter().take(5) {
        let params = JobSearchParams {
            origin_province: origin.map(str::to_string),
            destination_province: Some(destination.clone()),
            offset: 0,
            limit: 3,
            ..Default::default()
        };
        let (jobs, total, _) = execute_search(state, params, None).await.unwrap_or_default();
        if jobs.is_empty() {
            empty_destinations.push(destination.clone());
        } else {
            sections.push(format!("== {destination} ==\n{}", render_results(&jobs, total, 0)));
        }
    }
    let mut reply = sections.join("\n\n");
    if !empty_destinations.is_empty() {
        if !reply.is_empty() {
            reply.push_str("\n\n");
        }
        reply.push_str(&format!("ilan bulunamayan iller: {}", empty_destinations.join(", ")));
    }
    if reply.is_empty() {
        reply = "bu bolgede hic ilan bulamadim.".to_string();
    }
    SearchOutcome { reply, context_patch: ConversationContextPatch::default() }
}

/// spec.md §4.7 step 14: multi-destination ("samsundan istanbul ankara
/// izmir varmi"), same grouped-section shape as the region handlers.
pub async fn run_multi_destination_search(state: &AppState, origin: &str, destinations: &[String]) -> SearchOutcome {
    run_region_search(state, Some(origin), destinations).await
}

/// spec.md §4.7 step 15: the normal search path.
pub async fn run_normal_search(
    state: &AppState,
    context: &ConversationContext,
    locations: &ParsedLocations,
    vehicle_type: Option<VehicleType>,
    body_type: Option<BodyType>,
    cargo_type: Option<String>,
    is_new_search: bool,
) -> SearchOutcome {
    let origin = locations.origin_province.clone().or_else(|| context.last_origin.clone().filter(|s| !s.is_empty()));
    let destination = locations.destination_province.clone().or_else(|| context.last_destination.clone().filter(|s| !s.is_empty()));

    if origin.is_none() && destination.is_none() {
        return SearchOutcome {
            reply: "nerden nereye arac/yuk ariyorsun?".to_string(),
            context_patch: ConversationContextPatch::default(),
        };
    }

    let (vehicle_type, body_type, cargo_type) = if is_new_search {
        (vehicle_type, body_type, cargo_type)
    } else {
        (
            vehicle_type.or(context.last_vehicle_type),
            body_type.or(context.last_body_type),
            cargo_type.or_else(|| context.last_cargo_type.clone()),
        )
    };

    let params = JobSearchParams {
        origin_province: origin,
        destination_province: destination,
        vehicle_type,
        body_type,
        cargo_type,
        offset: 0,
        limit: PAGE_SIZE,
        ..Default::default()
    };
    run_and_render(state, context, params, locations.istanbul_side, is_new_search).await
}

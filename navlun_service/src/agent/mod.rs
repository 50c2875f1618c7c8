//! Conversational agent controller (spec.md §4.7, C7). `handle_turn` is the
//! single entry point: it runs the fixed 15-step handler order where the
//! first match short-circuits, never involving the LLM unless the
//! deterministic path falls all the way through to the normal search.

pub mod faq;
pub mod llm;
pub mod render;
pub mod search;

use std::collections::HashSet;
use std::sync::Arc;

use lazy_static::lazy_static;

use navlun::types::{ConversationContextPatch, Role};
use navlun::ConversationMessage;
use navlun_parser::common::tokenize;
use navlun_parser::location::parse_locations;
use navlun_parser::normalize::{normalize_to_ascii, preprocess};
use navlun_parser::vehicle::classify as classify_vehicle;

use crate::state::AppState;

lazy_static! {
    static ref GREETING_TOKENS: HashSet<&'static str> = [
        "merhaba", "selam", "naber", "nasilsin", "iyi gunler", "iyi aksamlar", "hey", "hi", "hello",
    ]
    .into_iter()
    .collect();
    static ref FAREWELL_TOKENS: HashSet<&'static str> = [
        "tesekkurler", "tesekkur ederim", "sagol", "gorusuruz", "hoscakal", "bb", "iyi calismalar",
    ]
    .into_iter()
    .collect();
    static ref PROFANITY_TOKENS: HashSet<&'static str> = ["salak", "aptal", "gerizekali", "ahmak"].into_iter().collect();
    static ref AMBIGUOUS_CONTINUATION_TOKENS: HashSet<&'static str> =
        ["tum isler", "peki", "takip et"].into_iter().collect();
    static ref CONFIRMATION_TOKENS: HashSet<&'static str> = ["evet", "olur", "tamam", "ok"].into_iter().collect();
    static ref PAGINATION_TOKENS: HashSet<&'static str> =
        ["devam", "daha", "sonraki", "goster", "kalanlar"].into_iter().collect();
    static ref HER_YERE_TOKENS: HashSet<&'static str> =
        ["her yere", "tum iller", "turkiye geneli"].into_iter().collect();
}

const INTRA_CITY_SUFFIXES: &[&str] = &["ici", "icinde", "icinden"];

fn contains_any(normalized: &str, tokens: &HashSet<&'static str>) -> bool {
    tokens.iter().any(|t| normalized.contains(t))
}

/// One turn: normalizes `text`, runs the fixed handler order, persists the
/// turn (user message, assistant reply, context patch) and returns the
/// reply text. Never panics, never returns without a reply (spec.md §7:
/// "the agent side ... always produces a user-visible reply").
pub async fn handle_turn(state: &Arc<AppState>, user_id: &str, text: &str) -> String {
    let conversation = match state.conversations.get_conversation(user_id).await {
        Ok(c) => c,
        Err(_) => {
            return "su anda gecmis konusmani getiremedim, tekrar yazar misin?".to_string();
        }
    };
    let is_first_contact = conversation.messages.is_empty();
    let context = conversation.context.clone();
    let normalized = normalize_to_ascii(text);

    let (reply, patch) = dispatch(state, user_id, text, &normalized, &context, is_first_contact).await;

    let _ = state
        .conversations
        .add_message(user_id, ConversationMessage { role: Role::User, content: text.to_string(), ts: now() }, None)
        .await;
    let _ = state
        .conversations
        .add_message(
            user_id,
            ConversationMessage { role: Role::Assistant, content: reply.clone(), ts: now() },
            Some(patch),
        )
        .await;

    reply
}

fn now() -> chrono::DateTime<chrono::Utc> {
    chrono::Utc::now()
}

async fn dispatch(
    state: &Arc<AppState>,
    _user_id: &str,
    text: &str,
    normalized: &str,
    context: &navlun::types::ConversationContext,
    is_first_contact: bool,
) -> (String, ConversationContextPatch) {
    // Step 1: greeting.
    let greeting_token = normalized.trim() == "sa" || contains_any(normalized, &GREETING_TOKENS);
    if greeting_token {
        let reply = if normalized.trim() == "sa" {
            "as".to_string()
        } else if is_first_contact {
            "merhaba! nerden nereye arac ya da yuk ariyorsan bana yazabilirsin, orn: \"antalya istanbul tir ariyorum\".".to_string()
        } else {
            "merhaba, nasil yardimci olabilirim?".to_string()
        };
        return (reply, ConversationContextPatch::default());
    }

    // Step 2: profanity.
    if contains_any(normalized, &PROFANITY_TOKENS) {
        return ("boyle konusmaya gerek yok, nazik olalim lutfen.".to_string(), ConversationContextPatch::default());
    }

    // Step 3: farewell / thanks.
    if contains_any(normalized, &FAREWELL_TOKENS) {
        return ("rica ederim, iyi yolculuklar!".to_string(), ConversationContextPatch::default());
    }

    // Step 4: ambiguous continuation.
    if contains_any(normalized, &AMBIGUOUS_CONTINUATION_TOKENS) {
        if context.last_total_count > context.last_offset + context.last_shown_count {
            let outcome = search::run_pagination(state, context).await;
            return (outcome.reply, outcome.context_patch);
        } else if context.last_origin.as_deref().is_some_and(|s| !s.is_empty()) {
            return ("baska gosterebilecegim ilan kalmadi.".to_string(), ConversationContextPatch::default());
        }
        return ("hangi rota icin bakiyorduk? nerden nereye?".to_string(), ConversationContextPatch::default());
    }

    // Step 5: pending-confirmation handlers. Consuming a pending suggestion
    // always clears its flag unless the fresh search immediately raised a
    // new one of the same kind.
    if contains_any(normalized, &CONFIRMATION_TOKENS) {
        if let Some(neighbor) = context.pending_nearby_suggestion.clone() {
            let mut outcome = search::run_her_yere(state, context, Some(neighbor)).await;
            if outcome.context_patch.pending_nearby_suggestion.is_none() {
                outcome.context_patch.pending_nearby_suggestion = Some(None);
            }
            return (outcome.reply, outcome.context_patch);
        }
        if context.pending_vehicle_suggestion {
            if let Some(vehicle) = context.preferred_vehicle {
                let locations = parse_locations("");
                let mut outcome = search::run_normal_search(
                    state,
                    context,
                    &locations,
                    Some(vehicle),
                    None,
                    None,
                    false,
                )
                .await;
                if outcome.context_patch.pending_vehicle_suggestion.is_none() {
                    outcome.context_patch.pending_vehicle_suggestion = Some(false);
                }
                return (outcome.reply, outcome.context_patch);
            }
        }
    }

    // Step 6: FAQ.
    if let Some(reply) = faq::match_faq(normalized) {
        return (reply.to_string(), ConversationContextPatch::default());
    }

    // Step 7: pagination.
    if contains_any(normalized, &PAGINATION_TOKENS) && context.last_total_count > 0 {
        let outcome = search::run_pagination(state, context).await;
        return (outcome.reply, outcome.context_patch);
    }

    // Step 8: "her yere" / "tum iller" / "turkiye geneli".
    if contains_any(normalized, &HER_YERE_TOKENS) {
        let locations = parse_locations(text);
        let origin = locations.origin_province.or_else(|| context.last_origin.clone().filter(|s| !s.is_empty()));
        let outcome = search::run_her_yere(state, context, origin).await;
        return (outcome.reply, outcome.context_patch);
    }

    // Step 9: parse locations.
    let locations = parse_locations(text);
    if locations.international_destination {
        return (
            "su an sadece turkiye icindeki tasimalari listeleyebiliyorum.".to_string(),
            ConversationContextPatch::default(),
        );
    }

    // Step 10: intra-city ("ici/icinde/icinden").
    if INTRA_CITY_SUFFIXES.iter().any(|s| normalized.contains(s)) {
        if let Some(province) = locations.origin_province.clone().or(locations.destination_province.clone()) {
            let outcome = search::run_intra_city(state, context, &province).await;
            return (outcome.reply, outcome.context_patch);
        }
    }

    // Step 11: same-province.
    if locations.same_province_search {
        if let Some(province) = locations.origin_province.clone() {
            let outcome = search::run_intra_city(state, context, &province).await;
            return (outcome.reply, outcome.context_patch);
        }
    }

    // Step 12: destination region.
    if locations.destination_region.is_some() && !locations.destinations.is_empty() {
        let outcome = search::run_region_search(state, locations.origin_province.as_deref(), &locations.destinations).await;
        return (outcome.reply, outcome.context_patch);
    }

    // Step 13: origin region.
    if locations.origin_region.is_some() && !locations.destinations.is_empty() {
        let outcome = search::run_region_search(state, None, &locations.destinations).await;
        return (outcome.reply, outcome.context_patch);
    }

    // Step 14: multi-destination.
    if let Some(origin) = &locations.origin_province {
        if locations.destinations.len() >= 2 {
            let outcome = search::run_multi_destination_search(state, origin, &locations.destinations).await;
            return (outcome.reply, outcome.context_patch);
        }
    }

    // Step 15: normal search. Parsed locations win over any LLM hint; the
    // LLM is consulted only when the parser found nothing at all for a
    // location and the context has nothing either.
    let mut origin = locations.origin_province.clone();
    let mut destination = locations.destination_province.clone();
    if origin.is_none() && destination.is_none() {
        if let Some(endpoint) = &state.llm_endpoint {
            if let Some(hint) = llm::fetch_intent_hint(&state.http_client, endpoint, text).await {
                origin = hint.origin.as_deref().and_then(navlun_common::resolve_province).map(|p| p.ascii_name);
                destination = hint.destination.as_deref().and_then(navlun_common::resolve_province).map(|p| p.ascii_name);
            }
        }
    }

    let preprocessed = preprocess(text);
    let vehicle_match = classify_vehicle(&tokenize(&preprocessed));
    let locations_differ = origin.as_deref() != context.last_origin.as_deref().filter(|s| !s.is_empty())
        || destination.as_deref() != context.last_destination.as_deref().filter(|s| !s.is_empty());
    // Same route restated with no vehicle/body/cargo signal also counts as a
    // new search, since it resets any filters inherited from context.
    let no_filters_this_turn = vehicle_match.vehicle_type.is_none()
        && vehicle_match.body_type.is_none()
        && !vehicle_match.is_refrigerated
        && locations.cargo_type.is_none();
    let is_new_search = locations_differ || no_filters_this_turn;

    let mut patched_locations = locations;
    patched_locations.origin_province = origin;
    patched_locations.destination_province = destination;

    let outcome = search::run_normal_search(
        state,
        context,
        &patched_locations,
        vehicle_match.vehicle_type,
        vehicle_match.body_type,
        patched_locations.cargo_type.clone(),
        is_new_search,
    )
    .await;
    (outcome.reply, outcome.context_patch)
}

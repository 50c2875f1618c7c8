//! Optional external intent classifier (spec.md §4.7 "LLM role"). Treated
//! as an untrusted advisor: only its structured fields are consumed, never
//! its free text, and location fields are discarded unless they actually
//! appear in the user's utterance (anti-hallucination guard).

use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};

use navlun_parser::normalize::normalize_to_ascii;

const LLM_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Serialize)]
struct IntentRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntentHint {
    pub intent: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub vehicle_type: Option<String>,
    pub cargo_type: Option<String>,
}

/// Calls `endpoint` with `text`, applying a soft 3s timeout (spec.md §5):
/// any failure, timeout, or malformed response degrades to `None` so the
/// rule-based handlers always have a fallback path (spec.md §7 AgentLLMTimeout).
pub async fn fetch_intent_hint(client: &reqwest::Client, endpoint: &str, text: &str) -> Option<IntentHint> {
    let result = tokio::time::timeout(
        LLM_TIMEOUT,
        client.post(endpoint).json(&IntentRequest { text }).send(),
    )
    .await;

    match result {
        Ok(Ok(response)) => match response.json::<IntentHint>().await {
            Ok(hint) => Some(sanitize(hint, text)),
            Err(e) => {
                warn!("LLM response decode failed: {e}");
                None
            }
        },
        Ok(Err(e)) => {
            warn!("LLM call failed: {e}");
            None
        }
        Err(_) => {
            warn!("LLM call timed out after {LLM_TIMEOUT:?}");
            None
        }
    }
}

/// Drops any location field whose first four ascii-normalized characters
/// do not appear in the user's normalized utterance (spec.md §4.7).
fn sanitize(mut hint: IntentHint, text: &str) -> IntentHint {
    let normalized_text = normalize_to_ascii(text);
    let passes = |v: &str| {
        let v_norm = normalize_to_ascii(v);
        let prefix_len = v_norm.chars().count().min(4);
        let prefix: String = v_norm.chars().take(prefix_len).collect();
        !prefix.is_empty() && normalized_text.contains(&prefix)
    };

    if hint.origin.as_deref().is_some_and(|v| !passes(v)) {
        hint.origin = None;
    }
    if hint.destination.as_deref().is_some_and(|v| !passes(v)) {
        hint.destination = None;
    }
    hint
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sanitize_drops_hallucinated_location() {
        let hint = IntentHint {
            intent: Some("search".to_string()),
            origin: Some("izmir".to_string()),
            destination: None,
            vehicle_type: None,
            cargo_type: None,
        };
        let sanitized = sanitize(hint, "antalya istanbul tir ariyorum");
        assert_eq!(sanitized.origin, None);
    }

    #[test]
    fn sanitize_keeps_location_present_in_text() {
        let hint = IntentHint {
            intent: Some("search".to_string()),
            origin: Some("antalya".to_string()),
            destination: None,
            vehicle_type: None,
            cargo_type: None,
        };
        let sanitized = sanitize(hint, "antalyadan istanbula tir ariyorum");
        assert_eq!(sanitized.origin.as_deref(), Some("antalya"));
    }
}

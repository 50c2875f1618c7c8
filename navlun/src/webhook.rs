//! Webhook payload shape (spec.md §6.1) and the pure ADMIT filters. HTTP
//! concerns (auth header, status codes) live in `navlun_service`; this
//! module only decides whether a decoded payload should be admitted.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AdmissionError;
use crate::types::RawMessage;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub event: String,
    pub instance: String,
    pub data: WebhookData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookData {
    pub key: WebhookKey,
    #[serde(rename = "pushName")]
    pub push_name: Option<String>,
    pub message: WebhookMessage,
    #[serde(rename = "messageTimestamp")]
    pub message_timestamp: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookKey {
    pub id: String,
    #[serde(rename = "remoteJid")]
    pub remote_jid: String,
    #[serde(rename = "fromMe")]
    pub from_me: bool,
    pub participant: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookMessage {
    pub conversation: Option<String>,
    #[serde(rename = "extendedTextMessage")]
    pub extended_text_message: Option<ExtendedTextMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtendedTextMessage {
    pub text: String,
}

impl WebhookMessage {
    fn text(&self) -> Option<&str> {
        self.conversation
            .as_deref()
            .or(self.extended_text_message.as_ref().map(|m| m.text.as_str()))
    }
}

/// An admitted message, ready to be archived and enqueued.
#[derive(Debug, Clone)]
pub struct AdmittedMessage {
    pub message_id: String,
    pub group_id: String,
    pub sender_id: Option<String>,
    pub push_name: Option<String>,
    pub text: String,
    pub source_timestamp: Option<DateTime<Utc>>,
}

/// Runs the ADMIT filters from spec.md §4.5/§6.1: must be a
/// `messages.upsert`-shaped payload, must be a group message (`remoteJid`
/// ends in `@g.us`), must not be self-authored, and must carry non-empty
/// trimmed text. Anything else is dropped, not erred — admission always
/// responds 200 to filtered payloads (adversarial safety).
pub fn admit(payload: &WebhookPayload) -> Result<AdmittedMessage, AdmissionError> {
    if payload.event != "messages.upsert" {
        return Err(AdmissionError::Filtered("not a messages.upsert event"));
    }
    if !payload.data.key.remote_jid.ends_with("@g.us") {
        return Err(AdmissionError::Filtered("not a group message"));
    }
    if payload.data.key.from_me {
        return Err(AdmissionError::Filtered("self-authored message"));
    }
    let text = payload.data.message.text().unwrap_or("").trim();
    if text.is_empty() {
        return Err(AdmissionError::Filtered("empty text"));
    }

    let source_timestamp = payload
        .data
        .message_timestamp
        .and_then(|ts| Utc.timestamp_opt(ts, 0).single());

    Ok(AdmittedMessage {
        message_id: payload.data.key.id.clone(),
        group_id: payload.data.key.remote_jid.clone(),
        sender_id: payload.data.key.participant.clone(),
        push_name: payload.data.push_name.clone(),
        text: text.to_string(),
        source_timestamp,
    })
}

/// Builds the archive object key for `message_id` under `instance`, per
/// spec.md §6.1: `messages/<YYYY>/<MM>/<DD>/<instance>/<messageId>.json`.
pub fn archive_key(received_at: DateTime<Utc>, instance: &str, message_id: &str) -> String {
    format!(
        "messages/{:04}/{:02}/{:02}/{}/{}.json",
        received_at.format("%Y"),
        received_at.format("%m"),
        received_at.format("%d"),
        instance,
        message_id
    )
}

impl AdmittedMessage {
    pub fn into_raw_message(self, archive_ref: String, received_at: DateTime<Utc>) -> RawMessage {
        RawMessage {
            message_id: self.message_id,
            group_id: self.group_id,
            sender_id: self.sender_id,
            sender_phone: None,
            text: self.text,
            archive_ref,
            received_at,
            source_timestamp: self.source_timestamp,
            processed: false,
            processed_at: None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn base_payload(remote_jid: &str, from_me: bool, text: &str) -> WebhookPayload {
        WebhookPayload {
            event: "messages.upsert".to_string(),
            instance: "inst-1".to_string(),
            data: WebhookData {
                key: WebhookKey {
                    id: "MSG1".to_string(),
                    remote_jid: remote_jid.to_string(),
                    from_me,
                    participant: Some("905551234567@s.whatsapp.net".to_string()),
                },
                push_name: Some("Driver".to_string()),
                message: WebhookMessage {
                    conversation: Some(text.to_string()),
                    extended_text_message: None,
                },
                message_timestamp: Some(1_700_000_000),
            },
        }
    }

    #[test]
    fn drops_non_group_message() {
        let payload = base_payload("905551234567@s.whatsapp.net", false, "Antalya Istanbul tir ariyorum");
        assert!(matches!(admit(&payload), Err(AdmissionError::Filtered(_))));
    }

    #[test]
    fn drops_non_upsert_event() {
        let mut payload = base_payload("1234567890@g.us", false, "Antalya Istanbul tir ariyorum");
        payload.event = "messages.update".to_string();
        assert!(matches!(admit(&payload), Err(AdmissionError::Filtered(_))));
    }

    #[test]
    fn drops_self_authored_message() {
        let payload = base_payload("1234567890@g.us", true, "Antalya Istanbul tir ariyorum");
        assert!(matches!(admit(&payload), Err(AdmissionError::Filtered(_))));
    }

    #[test]
    fn drops_empty_text() {
        let payload = base_payload("1234567890@g.us", false, "   ");
        assert!(matches!(admit(&payload), Err(AdmissionError::Filtered(_))));
    }

    #[test]
    fn admits_valid_group_message() {
        let payload = base_payload("1234567890@g.us", false, "Antalya Istanbul tir ariyorum");
        let admitted = admit(&payload).expect("should admit");
        assert_eq!(admitted.message_id, "MSG1");
        assert_eq!(admitted.group_id, "1234567890@g.us");
    }

    #[test]
    fn archive_key_matches_expected_layout() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 5, 12, 0, 0).unwrap();
        assert_eq!(archive_key(ts, "inst-1", "MSG1"), "messages/2026/03/05/inst-1/MSG1.json");
    }
}

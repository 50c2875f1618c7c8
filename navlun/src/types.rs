//! Persisted and ephemeral data model (spec.md §3).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use navlun_parser::confidence::ConfidenceLevel;
use navlun_parser::message_type::MessageType;
use navlun_parser::vehicle::{BodyType, VehicleType};

/// A single inbound chat message, as admitted by the webhook. `processed`
/// flips from false to true exactly once (spec.md §3 `RawMessage`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMessage {
    pub message_id: String,
    pub group_id: String,
    pub sender_id: Option<String>,
    pub sender_phone: Option<String>,
    pub text: String,
    pub archive_ref: String,
    pub received_at: DateTime<Utc>,
    pub source_timestamp: Option<DateTime<Utc>>,
    pub processed: bool,
    pub processed_at: Option<DateTime<Utc>>,
}

/// One extracted origin/destination leg of a posting, with its resolved
/// province identity (spec.md §3 `ParsedMessage` route entries).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRecord {
    pub origin_ascii: String,
    pub origin_code: u8,
    pub destination_ascii: String,
    pub destination_code: u8,
    pub vehicle_type: Option<VehicleType>,
    pub body_type: Option<BodyType>,
}

/// A relational projection of one parsed freight posting, possibly one of
/// several rows sharing a `message_id` base when the posting was
/// multi-route (spec.md §3 `Job`, §6.4 columns).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub message_id: String,
    pub source_group_id: String,
    pub raw_text: String,
    pub message_type: MessageType,
    pub origin_mentioned: Option<String>,
    pub origin_province: Option<String>,
    pub origin_province_code: Option<u8>,
    pub origin_district: Option<String>,
    pub destination_mentioned: Option<String>,
    pub destination_province: Option<String>,
    pub destination_province_code: Option<u8>,
    pub destination_district: Option<String>,
    pub vehicle_type: Option<VehicleType>,
    pub body_type: Option<BodyType>,
    pub is_refrigerated: bool,
    pub contact_phone: String,
    pub contact_phone_normalized: String,
    pub contact_name: Option<String>,
    pub sender_jid: Option<String>,
    pub sender_phone: Option<String>,
    pub weight: Option<f64>,
    pub weight_unit: Option<String>,
    pub cargo_type: Option<String>,
    pub load_type: Option<String>,
    pub is_urgent: bool,
    pub confidence_score: f64,
    pub confidence_level: ConfidenceLevel,
    pub route_index: Option<u32>,
    pub total_routes: Option<u32>,
    pub posted_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// One turn in a conversation (spec.md §3 `Conversation.messages[]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    User,
    Assistant,
    System,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub role: Role,
    pub content: String,
    pub ts: DateTime<Utc>,
}

/// Sticky per-conversation state used by the agent controller to decide
/// pagination, filter inheritance, and pending-suggestion follow-ups
/// (spec.md §3 `Conversation.context`). An empty string in any of the
/// `Option<String>` location/filter fields is the "explicitly cleared"
/// sentinel distinguished from `None` ("never set") — see
/// [`ConversationContext::clear_sentinel`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationContext {
    pub last_origin: Option<String>,
    pub last_destination: Option<String>,
    pub last_vehicle_type: Option<VehicleType>,
    pub last_body_type: Option<BodyType>,
    pub last_cargo_type: Option<String>,
    pub last_is_refrigerated: bool,
    pub last_offset: u32,
    pub last_shown_count: u32,
    pub last_total_count: u32,
    pub last_job_ids: Vec<Uuid>,
    pub preferred_vehicle: Option<VehicleType>,
    pub pending_vehicle_suggestion: bool,
    pub pending_nearby_suggestion: Option<String>,
}

impl ConversationContext {
    /// The sentinel value meaning "this field was explicitly cleared by the
    /// user" for the string-valued location fields (spec.md §9).
    pub const CLEAR_SENTINEL: &'static str = "";

    /// Shallow-merges `patch` into `self`: a field present in `patch` always
    /// overwrites the existing value, including the empty-string sentinel.
    pub fn merge(&mut self, patch: ConversationContextPatch) {
        if let Some(v) = patch.last_origin {
            self.last_origin = Some(v);
        }
        if let Some(v) = patch.last_destination {
            self.last_destination = Some(v);
        }
        if let Some(v) = patch.last_vehicle_type {
            self.last_vehicle_type = v;
        }
        if let Some(v) = patch.last_body_type {
            self.last_body_type = v;
        }
        if let Some(v) = patch.last_cargo_type {
            self.last_cargo_type = v;
        }
        if let Some(v) = patch.last_is_refrigerated {
            self.last_is_refrigerated = v;
        }
        if let Some(v) = patch.last_offset {
            self.last_offset = v;
        }
        if let Some(v) = patch.last_shown_count {
            self.last_shown_count = v;
        }
        if let Some(v) = patch.last_total_count {
            self.last_total_count = v;
        }
        if let Some(v) = patch.last_job_ids {
            self.last_job_ids = v;
        }
        if let Some(v) = patch.preferred_vehicle {
            self.preferred_vehicle = v;
        }
        if let Some(v) = patch.pending_vehicle_suggestion {
            self.pending_vehicle_suggestion = v;
        }
        if let Some(v) = patch.pending_nearby_suggestion {
            self.pending_nearby_suggestion = v;
        }
    }
}

/// A partial update to [`ConversationContext`]; `Some(None)` on the
/// `Option<T>`-valued outer fields is not expressible here by design — the
/// inner `Option` fields that themselves hold `Option<VehicleType>` etc.
/// use `Some(None)` to mean "clear this specific field" while `None` means
/// "leave untouched".
#[derive(Debug, Clone, Default)]
pub struct ConversationContextPatch {
    pub last_origin: Option<String>,
    pub last_destination: Option<String>,
    pub last_vehicle_type: Option<Option<VehicleType>>,
    pub last_body_type: Option<Option<BodyType>>,
    pub last_cargo_type: Option<Option<String>>,
    pub last_is_refrigerated: Option<bool>,
    pub last_offset: Option<u32>,
    pub last_shown_count: Option<u32>,
    pub last_total_count: Option<u32>,
    pub last_job_ids: Option<Vec<Uuid>>,
    pub preferred_vehicle: Option<Option<VehicleType>>,
    pub pending_vehicle_suggestion: Option<bool>,
    pub pending_nearby_suggestion: Option<Option<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub user_id: String,
    pub messages: Vec<ConversationMessage>,
    pub context: ConversationContext,
}

/// A standing request to notify `user_id` once a job matching
/// `(origin_ascii, destination_ascii?)` and the given filters materializes
/// (spec.md §3 `PendingNotification`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingNotification {
    pub user_id: String,
    pub origin_ascii: String,
    pub destination_ascii: Option<String>,
    pub vehicle_type: Option<VehicleType>,
    pub body_type: Option<BodyType>,
    pub cargo_type: Option<String>,
    pub created_at: DateTime<Utc>,
    pub ttl_expires_at: DateTime<Utc>,
}

/// A message that exhausted its retry budget in the ingestion pipeline
/// (supplemented feature, SPEC_FULL.md §5): kept so an operator can inspect
/// and manually replay rather than silently losing the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeadLetter {
    pub message_id: String,
    pub group_id: String,
    pub last_error: String,
    pub attempts: u32,
    pub first_failed_at: DateTime<Utc>,
    pub payload: serde_json::Value,
}

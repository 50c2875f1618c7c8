//! Ingestion pipeline state machine (spec.md §4.5):
//! `ADMIT → ARCHIVED → QUEUED → PARSING → MATERIALIZED → DONE`, plus
//! notification fan-out and the retention sweep (supplemented feature).

use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use navlun_parser::confidence::ConfidenceLevel;
use navlun_parser::posting::{is_likely_logistics_message, parse_message};

use crate::error::{ArchiveError, PipelineError};
use crate::store::{Archive, ConversationStore, JobStore, OutboundDelivery, Queue, QueueMessage, RawMessageStore};
use crate::types::{Job, RawMessage};
use crate::webhook::{archive_key, AdmittedMessage};

/// The queue message body produced by the ADMIT/ARCHIVED/QUEUED steps and
/// consumed by [`consume`] (spec.md §6.1 queue message body shape).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueMessageBody {
    pub instance_name: String,
    pub remote_jid: String,
    pub message_id: String,
    pub push_name: Option<String>,
    pub sender_jid: Option<String>,
    pub text: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub received_at: DateTime<Utc>,
    pub archive_bucket: String,
    pub archive_key: String,
}

/// ARCHIVED + QUEUED: writes the raw payload to the archive, then enqueues
/// a `QueueMessageBody` with the group-partitioned FIFO keys. Archive
/// failure is fatal and we never enqueue without a successful archive
/// write (spec.md §4.5/§7).
pub async fn archive_and_enqueue(
    admitted: AdmittedMessage,
    raw_payload_json: &str,
    instance: &str,
    archive_bucket: &str,
    received_at: DateTime<Utc>,
    archive: &dyn Archive,
    queue: &dyn Queue,
) -> Result<(), PipelineError> {
    let key = archive_key(received_at, instance, &admitted.message_id);

    let archive_object = serde_json::json!({
        "payload": serde_json::from_str::<serde_json::Value>(raw_payload_json)
            .unwrap_or(serde_json::Value::Null),
        "receivedAt": received_at,
    });
    archive
        .write(&key, archive_object.to_string().as_bytes())
        .await
        .map_err(|e| {
            warn!("archive write failed for {}: {e}", admitted.message_id);
            PipelineError::from(e)
        })?;

    let body = QueueMessageBody {
        instance_name: instance.to_string(),
        remote_jid: admitted.group_id.clone(),
        message_id: admitted.message_id.clone(),
        push_name: admitted.push_name.clone(),
        sender_jid: admitted.sender_id.clone(),
        text: admitted.text.clone(),
        timestamp: admitted.source_timestamp,
        received_at,
        archive_bucket: archive_bucket.to_string(),
        archive_key: key,
    };

    let body_json = serde_json::to_vec(&body).map_err(|e| {
        PipelineError::ArchiveFail(ArchiveError::WriteFailed(format!("failed to encode queue body: {e}")))
    })?;

    queue
        .send(QueueMessage {
            body: body_json,
            message_group_id: admitted.group_id.clone(),
            deduplication_id: admitted.message_id.clone(),
            attempts: 0,
        })
        .await
        .map_err(PipelineError::from)?;

    info!("archived and enqueued {}", admitted.message_id);
    Ok(())
}

/// Dependencies the PARSING/Gate/MATERIALIZED/fanout/DONE steps need.
/// Grouped into one struct so [`consume`] doesn't take five reference
/// parameters (grounded on the teacher's `AppState`-style bundling).
pub struct ConsumeDeps<'a> {
    pub raw_messages: &'a dyn RawMessageStore,
    pub jobs: &'a dyn JobStore,
    pub conversations: &'a dyn ConversationStore,
    pub outbound: &'a dyn OutboundDelivery,
}

#[derive(Debug, Clone, Default)]
pub struct ConsumeOutcome {
    pub materialized_job_count: u32,
    pub notifications_sent: u32,
    pub gate_skipped: bool,
    pub already_processed: bool,
}

/// PARSING → Gate → MATERIALIZED → fanout → DONE.
pub async fn consume(body: &QueueMessageBody, deps: &ConsumeDeps<'_>) -> Result<ConsumeOutcome, PipelineError> {
    if !is_likely_logistics_message(&body.text) {
        return Ok(ConsumeOutcome::default());
    }

    let raw_message = RawMessage {
        message_id: body.message_id.clone(),
        group_id: body.remote_jid.clone(),
        sender_id: body.sender_jid.clone(),
        sender_phone: body.sender_jid.as_ref().and_then(|jid| jid.split('@').next()).map(str::to_string),
        text: body.text.clone(),
        archive_ref: body.archive_key.clone(),
        received_at: body.received_at,
        source_timestamp: body.timestamp,
        processed: false,
        processed_at: None,
    };
    let stored = deps.raw_messages.upsert_if_absent(&raw_message).await?;
    if stored.processed {
        return Ok(ConsumeOutcome { already_processed: true, ..Default::default() });
    }

    let parsed = parse_message(&body.text);

    let contact_phone_pair = parsed
        .phone
        .as_ref()
        .map(|p| (p.original.clone(), p.normalized.clone()))
        .or_else(|| raw_message.sender_phone.clone().map(|p| (p.clone(), p)));

    // Gate: only HIGH/MEDIUM confidence with a determinable contact phone
    // becomes a Job (spec.md §4.5 Gate, §8 invariant).
    let Some((contact_phone, contact_phone_normalized)) = contact_phone_pair.filter(|_| {
        matches!(parsed.confidence.level, ConfidenceLevel::High | ConfidenceLevel::Medium)
    }) else {
        deps.raw_messages.mark_processed(&body.message_id).await?;
        return Ok(ConsumeOutcome { gate_skipped: true, ..Default::default() });
    };

    let now = body.received_at;
    let posted_at = body.timestamp.unwrap_or(now);

    let mut materialized = Vec::new();
    if parsed.routes.len() >= 2 {
        for (i, route) in parsed.routes.iter().enumerate() {
            materialized.push(build_job(
                &body.message_id,
                Some((i as u32 + 1, parsed.routes.len() as u32)),
                &body.remote_jid,
                &body.text,
                &parsed,
                Some(route.origin_province.clone()),
                Some(route.destination_province.clone()),
                &contact_phone,
                &contact_phone_normalized,
                &raw_message,
                posted_at,
                now,
            ));
        }
    } else {
        materialized.push(build_job(
            &body.message_id,
            None,
            &body.remote_jid,
            &body.text,
            &parsed,
            parsed.locations.origin_province.clone(),
            parsed.locations.destination_province.clone(),
            &contact_phone,
            &contact_phone_normalized,
            &raw_message,
            posted_at,
            now,
        ));
    }

    let mut materialized_count = 0u32;
    for job in &materialized {
        if deps.jobs.insert_job_if_absent(job).await? {
            materialized_count += 1;
        }
    }

    let mut notifications_sent = 0u32;
    for job in &materialized {
        let Some(origin) = &job.origin_province else { continue };
        let pending = deps
            .conversations
            .get_pending_notifications_by_route(origin, job.destination_province.as_deref())
            .await
            .map_err(crate::error::NotificationError::from);
        let Ok(pending) = pending else { continue };
        for record in pending {
            let text = format!(
                "{} - {} rotasinda yeni ilan var, tel: {}",
                job.origin_province.as_deref().unwrap_or(""),
                job.destination_province.as_deref().unwrap_or(""),
                job.contact_phone_normalized
            );
            if deps.outbound.deliver(&record.user_id, &text).await.is_ok() {
                let _ = deps
                    .conversations
                    .delete_pending_notification(&record.user_id, &record.origin_ascii, record.destination_ascii.as_deref())
                    .await;
                notifications_sent += 1;
            } else {
                warn!("notification delivery failed for user {}", record.user_id);
            }
        }
    }

    deps.raw_messages.mark_processed(&body.message_id).await?;

    Ok(ConsumeOutcome {
        materialized_job_count: materialized_count,
        notifications_sent,
        gate_skipped: false,
        already_processed: false,
    })
}

#[allow(clippy::too_many_arguments)]
fn build_job(
    base_message_id: &str,
    route_slot: Option<(u32, u32)>,
    group_id: &str,
    raw_text: &str,
    parsed: &navlun_parser::posting::ParsedMessage,
    origin_province: Option<String>,
    destination_province: Option<String>,
    contact_phone: &str,
    contact_phone_normalized: &str,
    raw_message: &RawMessage,
    posted_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
) -> Job {
    let message_id = match route_slot {
        Some((index, _)) => format!("{base_message_id}#route{index}"),
        None => base_message_id.to_string(),
    };

    Job {
        id: Uuid::new_v4(),
        message_id,
        source_group_id: group_id.to_string(),
        raw_text: raw_text.to_string(),
        message_type: parsed.message_type,
        origin_mentioned: parsed.locations.origin.clone(),
        origin_province: origin_province.clone(),
        origin_province_code: origin_province
            .as_deref()
            .and_then(navlun_common::resolve_province)
            .map(|p| p.code),
        origin_district: parsed.locations.origin_district.clone(),
        destination_mentioned: parsed.locations.destination.clone(),
        destination_province: destination_province.clone(),
        destination_province_code: destination_province
            .as_deref()
            .and_then(navlun_common::resolve_province)
            .map(|p| p.code),
        destination_district: parsed.locations.destination_district.clone(),
        vehicle_type: parsed.vehicle.vehicle_type,
        body_type: parsed.vehicle.body_type,
        is_refrigerated: parsed.vehicle.is_refrigerated,
        contact_phone: contact_phone.to_string(),
        contact_phone_normalized: contact_phone_normalized.to_string(),
        contact_name: None,
        sender_jid: raw_message.sender_id.clone(),
        sender_phone: raw_message.sender_phone.clone(),
        weight: parsed.weight.map(|w| w.tons),
        weight_unit: parsed.weight.map(|w| w.unit.as_str().to_string()),
        cargo_type: parsed.cargo_domain.clone(),
        load_type: None,
        is_urgent: parsed.is_urgent,
        confidence_score: parsed.confidence.score,
        confidence_level: parsed.confidence.level,
        route_index: route_slot.map(|(index, _)| index),
        total_routes: route_slot.map(|(_, total)| total),
        posted_at,
        created_at,
        is_active: true,
    }
}

/// Retention sweep (supplemented feature, SPEC_FULL.md §5): deactivates
/// jobs posted before `now - retention`. Intended to run on a periodic
/// schedule outside the request path.
pub async fn sweep_retention(
    jobs: &dyn JobStore,
    now: DateTime<Utc>,
    retention: chrono::Duration,
) -> Result<u64, PipelineError> {
    let cutoff = now - retention;
    let affected = jobs.deactivate_stale(cutoff).await?;
    info!("retention sweep deactivated {affected} jobs older than {cutoff}");
    Ok(affected)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::error::{ConversationStoreError, JobStoreError, NotificationError};
    use crate::store::{JobSearchParams, JobSearchResult};
    use crate::types::{Conversation, ConversationContextPatch, ConversationMessage, PendingNotification};

    #[derive(Default)]
    struct MemRawMessages(Mutex<Vec<RawMessage>>);

    #[async_trait]
    impl RawMessageStore for MemRawMessages {
        async fn upsert_if_absent(&self, message: &RawMessage) -> Result<RawMessage, JobStoreError> {
            let mut guard = self.0.lock().unwrap();
            if let Some(existing) = guard.iter().find(|m| m.message_id == message.message_id) {
                return Ok(existing.clone());
            }
            guard.push(message.clone());
            Ok(message.clone())
        }

        async fn mark_processed(&self, message_id: &str) -> Result<(), JobStoreError> {
            let mut guard = self.0.lock().unwrap();
            if let Some(m) = guard.iter_mut().find(|m| m.message_id == message_id) {
                m.processed = true;
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemJobs(Mutex<Vec<Job>>);

    #[async_trait]
    impl JobStore for MemJobs {
        async fn insert_job_if_absent(&self, job: &Job) -> Result<bool, JobStoreError> {
            let mut guard = self.0.lock().unwrap();
            if guard.iter().any(|j| j.message_id == job.message_id) {
                return Ok(false);
            }
            guard.push(job.clone());
            Ok(true)
        }

        async fn find_by_message_id(&self, message_id: &str) -> Result<Vec<Job>, JobStoreError> {
            Ok(self.0.lock().unwrap().iter().filter(|j| j.message_id.starts_with(message_id)).cloned().collect())
        }

        async fn search(&self, _params: &JobSearchParams) -> Result<JobSearchResult, JobStoreError> {
            Ok(JobSearchResult { jobs: vec![], total_count: 0 })
        }

        async fn deactivate_stale(&self, _retention_cutoff: DateTime<Utc>) -> Result<u64, JobStoreError> {
            Ok(0)
        }
    }

    #[derive(Default)]
    struct EmptyConversations;

    #[async_trait]
    impl ConversationStore for EmptyConversations {
        async fn get_conversation(&self, user_id: &str) -> Result<Conversation, ConversationStoreError> {
            Ok(Conversation { user_id: user_id.to_string(), messages: vec![], context: Default::default() })
        }
        async fn add_message(&self, _: &str, _: ConversationMessage, _: Option<ConversationContextPatch>) -> Result<(), ConversationStoreError> {
            Ok(())
        }
        async fn get_pending_notifications_by_route(&self, _: &str, _: Option<&str>) -> Result<Vec<PendingNotification>, ConversationStoreError> {
            Ok(vec![])
        }
        async fn upsert_pending_notification(&self, _: PendingNotification) -> Result<(), ConversationStoreError> {
            Ok(())
        }
        async fn delete_pending_notification(&self, _: &str, _: &str, _: Option<&str>) -> Result<(), ConversationStoreError> {
            Ok(())
        }
    }

    struct NoopOutbound;

    #[async_trait]
    impl OutboundDelivery for NoopOutbound {
        async fn deliver(&self, _group_id: &str, _text: &str) -> Result<(), NotificationError> {
            Ok(())
        }
    }

    fn body(text: &str) -> QueueMessageBody {
        QueueMessageBody {
            instance_name: "inst-1".to_string(),
            remote_jid: "1234567890@g.us".to_string(),
            message_id: "MSG1".to_string(),
            push_name: None,
            sender_jid: Some("905551234567@s.whatsapp.net".to_string()),
            text: text.to_string(),
            timestamp: None,
            received_at: Utc::now(),
            archive_bucket: "bucket".to_string(),
            archive_key: "messages/2026/01/01/inst-1/MSG1.json".to_string(),
        }
    }

    #[tokio::test]
    async fn high_confidence_message_materializes_one_job() {
        let raw_messages = MemRawMessages::default();
        let jobs = MemJobs::default();
        let conversations = EmptyConversations;
        let outbound = NoopOutbound;
        let deps = ConsumeDeps { raw_messages: &raw_messages, jobs: &jobs, conversations: &conversations, outbound: &outbound };

        let outcome = consume(
            &body("Antalya'dan Istanbul'a 20 ton tir ariyorum 05321234567 acil"),
            &deps,
        )
        .await
        .unwrap();

        assert_eq!(outcome.materialized_job_count, 1);
        assert!(!outcome.gate_skipped);
        assert_eq!(jobs.0.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn low_confidence_message_skips_gate_but_marks_processed() {
        let raw_messages = MemRawMessages::default();
        let jobs = MemJobs::default();
        let conversations = EmptyConversations;
        let outbound = NoopOutbound;
        let deps = ConsumeDeps { raw_messages: &raw_messages, jobs: &jobs, conversations: &conversations, outbound: &outbound };

        let outcome = consume(&body("acil tir"), &deps).await.unwrap();

        assert!(outcome.gate_skipped);
        assert_eq!(jobs.0.lock().unwrap().len(), 0);
        assert!(raw_messages.0.lock().unwrap()[0].processed);
    }

    #[tokio::test]
    async fn retry_is_idempotent_under_duplicate_delivery() {
        let raw_messages = MemRawMessages::default();
        let jobs = MemJobs::default();
        let conversations = EmptyConversations;
        let outbound = NoopOutbound;
        let deps = ConsumeDeps { raw_messages: &raw_messages, jobs: &jobs, conversations: &conversations, outbound: &outbound };

        let text = "Antalya'dan Istanbul'a 20 ton tir ariyorum 05321234567 acil";
        consume(&body(text), &deps).await.unwrap();
        let second = consume(&body(text), &deps).await.unwrap();

        assert!(second.already_processed);
        assert_eq!(jobs.0.lock().unwrap().len(), 1);
    }
}

//! Integration tests for the ingestion pipeline's observable invariants
//! (spec.md §8): multi-route job-count, and pure admission/webhook shaping.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use navlun::error::{ConversationStoreError, JobStoreError, NotificationError};
use navlun::store::{Archive, ConversationStore, JobSearchParams, JobSearchResult, JobStore, OutboundDelivery, Queue, QueueMessage, RawMessageStore};
use navlun::types::{Conversation, ConversationContextPatch, ConversationMessage, Job, PendingNotification, RawMessage};
use navlun::{consume, ConsumeDeps, QueueMessageBody};

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

#[derive(Default)]
struct MemConversations {
    pending: Mutex<Vec<PendingNotification>>,
}

#[async_trait]
impl ConversationStore for MemConversations {
    async fn get_conversation(&self, user_id: &str) -> Result<Conversation, ConversationStoreError> {
        Ok(Conversation { user_id: user_id.to_string(), messages: vec![], context: Default::default() })
    }
    async fn add_message(&self, _: &str, _: ConversationMessage, _: Option<ConversationContextPatch>) -> Result<(), ConversationStoreError> {
        Ok(())
    }
    async fn get_pending_notifications_by_route(&self, origin: &str, destination: Option<&str>) -> Result<Vec<PendingNotification>, ConversationStoreError> {
        Ok(self
            .pending
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.origin_ascii == origin && p.destination_ascii.as_deref() == destination)
            .cloned()
            .collect())
    }
    async fn upsert_pending_notification(&self, record: PendingNotification) -> Result<(), ConversationStoreError> {
        self.pending.lock().unwrap().push(record);
        Ok(())
    }
    async fn delete_pending_notification(&self, user_id: &str, origin: &str, destination: Option<&str>) -> Result<(), ConversationStoreError> {
        self.pending
            .lock()
            .unwrap()
            .retain(|p| !(p.user_id == user_id && p.origin_ascii == origin && p.destination_ascii.as_deref() == destination));
        Ok(())
    }
}

#[derive(Default)]
struct RecordingOutbound(Mutex<Vec<(String, String)>>);

#[async_trait]
impl OutboundDelivery for RecordingOutbound {
    async fn deliver(&self, group_id: &str, text: &str) -> Result<(), NotificationError> {
        self.0.lock().unwrap().push((group_id.to_string(), text.to_string()));
        Ok(())
    }
}

struct NoopArchive;

#[async_trait]
impl Archive for NoopArchive {
    async fn write(&self, _key: &str, _payload: &[u8]) -> Result<(), navlun::error::ArchiveError> {
        Ok(())
    }
}

#[derive(Default)]
struct MemQueue(Mutex<Vec<QueueMessage>>);

#[async_trait]
impl Queue for MemQueue {
    async fn send(&self, message: QueueMessage) -> Result<(), navlun::error::QueueError> {
        self.0.lock().unwrap().push(message);
        Ok(())
    }
}

fn body(text: &str) -> QueueMessageBody {
    QueueMessageBody {
        instance_name: "inst-1".to_string(),
        remote_jid: "1234567890@g.us".to_string(),
        message_id: "MULTI1".to_string(),
        push_name: None,
        sender_jid: Some("905551234567@s.whatsapp.net".to_string()),
        text: text.to_string(),
        timestamp: None,
        received_at: Utc::now(),
        archive_bucket: "bucket".to_string(),
        archive_key: "messages/2026/01/01/inst-1/MULTI1.json".to_string(),
    }
}

#[tokio::test]
async fn multi_route_posting_materializes_one_job_per_route() {
    let raw_messages = MemRawMessages::default();
    let jobs = MemJobs::default();
    let conversations = EmptyConversations;
    let outbound = NoopOutbound;
    let deps = ConsumeDeps { raw_messages: &raw_messages, jobs: &jobs, conversations: &conversations, outbound: &outbound };

    let text = "Antalya - Istanbul tir, Izmir - Ankara kamyon 0532 111 22 33";
    let outcome = consume(&body(text), &deps).await.unwrap();

    assert_eq!(outcome.materialized_job_count, 2);
    let stored = jobs.0.lock().unwrap();
    assert!(stored.iter().any(|j| j.message_id == "MULTI1#route1"));
    assert!(stored.iter().any(|j| j.message_id == "MULTI1#route2"));
}

#[tokio::test]
async fn archive_and_enqueue_round_trip_through_noop_backends() {
    let admitted = navlun::webhook::admit(&navlun::webhook::WebhookPayload {
        event: "messages.upsert".to_string(),
        instance: "inst-1".to_string(),
        data: navlun::webhook::WebhookData {
            key: navlun::webhook::WebhookKey {
                id: "MSGX".to_string(),
                remote_jid: "1234567890@g.us".to_string(),
                from_me: false,
                participant: Some("905551234567@s.whatsapp.net".to_string()),
            },
            push_name: Some("Driver".to_string()),
            message: navlun::webhook::WebhookMessage {
                conversation: Some("Antalya Istanbul tir ariyorum".to_string()),
                extended_text_message: None,
            },
            message_timestamp: Some(1_700_000_000),
        },
    })
    .unwrap();

    let archive = NoopArchive;
    let queue = MemQueue::default();

    navlun::pipeline::archive_and_enqueue(
        admitted,
        r#"{"event":"messages.upsert"}"#,
        "inst-1",
        "bucket",
        Utc::now(),
        &archive,
        &queue,
    )
    .await
    .unwrap();

    assert_eq!(queue.0.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn pending_notification_matches_newly_materialized_job() {
    let raw_messages = MemRawMessages::default();
    let jobs = MemJobs::default();
    let conversations = MemConversations::default();
    let outbound = RecordingOutbound::default();

    let now = Utc::now();
    conversations.pending.lock().unwrap().push(PendingNotification {
        user_id: "user-9".to_string(),
        origin_ascii: "kayseri".to_string(),
        destination_ascii: Some("ankara".to_string()),
        vehicle_type: None,
        body_type: None,
        cargo_type: None,
        created_at: now,
        ttl_expires_at: now + chrono::Duration::days(1),
    });

    let deps = ConsumeDeps { raw_messages: &raw_messages, jobs: &jobs, conversations: &conversations, outbound: &outbound };
    let mut later_body = body("Kayseri'den Ankara'ya tir ariyorum 0532 111 22 33");
    later_body.message_id = "MATCH1".to_string();

    let outcome = consume(&later_body, &deps).await.unwrap();

    assert_eq!(outcome.notifications_sent, 1);
    assert!(conversations.pending.lock().unwrap().is_empty());
    let delivered = outbound.0.lock().unwrap();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].0, "user-9");
    assert!(delivered[0].1.contains("kayseri - ankara"));
}

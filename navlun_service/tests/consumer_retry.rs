//! Covers spec.md §4.5's retry policy: a failed `consume()` is requeued
//! with an incremented attempt count, and after 3 attempts is dead-lettered
//! instead of retried again.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use navlun::error::{ArchiveError, JobStoreError, NotificationError, QueueError};
use navlun::store::{Archive, JobSearchParams, JobSearchResult, JobStore, OutboundDelivery, Queue, QueueMessage, RawMessageStore};
use navlun::types::{DeadLetter, Job, RawMessage};
use navlun::InMemoryConversationStore;
use navlun_service::adapters::run_consumer_loop;
use navlun_service::state::AppState;

struct FailingRawMessages;

#[async_trait]
impl RawMessageStore for FailingRawMessages {
    async fn upsert_if_absent(&self, _message: &RawMessage) -> Result<RawMessage, JobStoreError> {
        Err(JobStoreError::Database(sqlx::Error::RowNotFound))
    }
    async fn mark_processed(&self, _message_id: &str) -> Result<(), JobStoreError> {
        Ok(())
    }
}

struct NoopJobs;

#[async_trait]
impl JobStore for NoopJobs {
    async fn insert_job_if_absent(&self, _job: &Job) -> Result<bool, JobStoreError> {
        Ok(true)
    }
    async fn find_by_message_id(&self, _message_id: &str) -> Result<Vec<Job>, JobStoreError> {
        Ok(vec![])
    }
    async fn search(&self, _params: &JobSearchParams) -> Result<JobSearchResult, JobStoreError> {
        Ok(JobSearchResult { jobs: vec![], total_count: 0 })
    }
    async fn deactivate_stale(&self, _retention_cutoff: DateTime<Utc>) -> Result<u64, JobStoreError> {
        Ok(0)
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
struct RecordingArchive {
    writes: Mutex<Vec<(String, Vec<u8>)>>,
}

#[async_trait]
impl Archive for RecordingArchive {
    async fn write(&self, key: &str, payload: &[u8]) -> Result<(), ArchiveError> {
        self.writes.lock().unwrap().push((key.to_string(), payload.to_vec()));
        Ok(())
    }
}

/// Requeues onto the same in-process channel it's drained from, so the
/// consumer loop sees every retry without an external queue backend.
struct LoopbackQueue {
    sender: tokio::sync::mpsc::UnboundedSender<QueueMessage>,
}

#[async_trait]
impl Queue for LoopbackQueue {
    async fn send(&self, message: QueueMessage) -> Result<(), QueueError> {
        self.sender.send(message).map_err(|e| QueueError::SendFailed(e.to_string()))
    }
}

#[tokio::test]
async fn failed_consume_is_dead_lettered_after_three_attempts() {
    let (sender, receiver) = tokio::sync::mpsc::unbounded_channel();
    let archive = Arc::new(RecordingArchive::default());

    let state = Arc::new(AppState {
        webhook_secret: "secret".to_string(),
        archive_bucket: "test-bucket".to_string(),
        archive: archive.clone(),
        queue: Arc::new(LoopbackQueue { sender: sender.clone() }),
        jobs: Arc::new(NoopJobs),
        raw_messages: Arc::new(FailingRawMessages),
        conversations: Arc::new(InMemoryConversationStore::new()),
        outbound: Arc::new(NoopOutbound),
        llm_endpoint: None,
        http_client: reqwest::Client::new(),
    });

    let body = navlun::QueueMessageBody {
        instance_name: "inst-1".to_string(),
        remote_jid: "1234567890@g.us".to_string(),
        message_id: "MSG-RETRY".to_string(),
        push_name: None,
        sender_jid: Some("905551234567@s.whatsapp.net".to_string()),
        text: "Antalya Istanbul 20 ton tir ariyorum 05321234567".to_string(),
        timestamp: None,
        received_at: Utc::now(),
        archive_bucket: "test-bucket".to_string(),
        archive_key: "messages/2026/07/27/inst-1/MSG-RETRY.json".to_string(),
    };
    sender
        .send(QueueMessage {
            body: serde_json::to_vec(&body).unwrap(),
            message_group_id: body.remote_jid.clone(),
            deduplication_id: body.message_id.clone(),
            attempts: 0,
        })
        .unwrap();
    drop(sender);

    run_consumer_loop(receiver, state).await;

    let writes = archive.writes.lock().unwrap();
    assert_eq!(writes.len(), 1, "expected exactly one dead-letter write, got {writes:?}");
    let (key, payload) = &writes[0];
    assert_eq!(key, "dead-letters/MSG-RETRY.json");
    let record: DeadLetter = serde_json::from_slice(payload).unwrap();
    assert_eq!(record.attempts, 3);
    assert_eq!(record.message_id, "MSG-RETRY");
    assert_eq!(record.group_id, "1234567890@g.us");
}

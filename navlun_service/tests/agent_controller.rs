//! Integration tests for the agent controller's fixed handler order
//! (spec.md §4.7, §8 scenarios).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use navlun::error::{ArchiveError, JobStoreError, NotificationError, QueueError};
use navlun::store::{Archive, JobSearchParams, JobSearchResult, JobStore, OutboundDelivery, Queue, QueueMessage, RawMessageStore};
use navlun::types::{Job, RawMessage};
use navlun::InMemoryConversationStore;
use navlun_parser::confidence::ConfidenceLevel;
use navlun_parser::message_type::MessageType;
use navlun_parser::vehicle::VehicleType;

use navlun_service::agent::handle_turn;
use navlun_service::state::AppState;

struct StubJobs {
    fixed: Mutex<Vec<Job>>,
}

#[async_trait]
impl JobStore for StubJobs {
    async fn insert_job_if_absent(&self, job: &Job) -> Result<bool, JobStoreError> {
        self.fixed.lock().unwrap().push(job.clone());
        Ok(true)
    }

    async fn find_by_message_id(&self, _message_id: &str) -> Result<Vec<Job>, JobStoreError> {
        Ok(vec![])
    }

    async fn search(&self, params: &JobSearchParams) -> Result<JobSearchResult, JobStoreError> {
        let all = self.fixed.lock().unwrap();
        let matched: Vec<Job> = all
            .iter()
            .filter(|j| {
                params.origin_province.as_deref().map_or(true, |o| j.origin_province.as_deref() == Some(o))
                    && params.destination_province.as_deref().map_or(true, |d| j.destination_province.as_deref() == Some(d))
                    && params.cargo_type.as_deref().map_or(true, |c| j.cargo_type.as_deref() == Some(c))
            })
            .cloned()
            .collect();
        let total = matched.len() as u64;
        let page = matched.into_iter().skip(params.offset as usize).take(params.limit as usize).collect();
        Ok(JobSearchResult { jobs: page, total_count: total })
    }

    async fn deactivate_stale(&self, _retention_cutoff: DateTime<Utc>) -> Result<u64, JobStoreError> {
        Ok(0)
    }
}

#[derive(Default)]
struct NoopRawMessages;

#[async_trait]
impl RawMessageStore for NoopRawMessages {
    async fn upsert_if_absent(&self, message: &RawMessage) -> Result<RawMessage, JobStoreError> {
        Ok(message.clone())
    }
    async fn mark_processed(&self, _message_id: &str) -> Result<(), JobStoreError> {
        Ok(())
    }
}

struct NoopArchive;

#[async_trait]
impl Archive for NoopArchive {
    async fn write(&self, _key: &str, _payload: &[u8]) -> Result<(), ArchiveError> {
        Ok(())
    }
}

struct NoopQueue;

#[async_trait]
impl Queue for NoopQueue {
    async fn send(&self, _message: QueueMessage) -> Result<(), QueueError> {
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

fn sample_job(origin: &str, destination: &str) -> Job {
    Job {
        id: Uuid::new_v4(),
        message_id: format!("{origin}-{destination}"),
        source_group_id: "grp".to_string(),
        raw_text: String::new(),
        message_type: MessageType::VehicleWanted,
        origin_mentioned: Some(origin.to_string()),
        origin_province: Some(origin.to_string()),
        origin_province_code: Some(1),
        origin_district: None,
        destination_mentioned: Some(destination.to_string()),
        destination_province: Some(destination.to_string()),
        destination_province_code: Some(2),
        destination_district: None,
        vehicle_type: Some(VehicleType::Tir),
        body_type: None,
        is_refrigerated: false,
        contact_phone: "05321112233".to_string(),
        contact_phone_normalized: "5321112233".to_string(),
        contact_name: None,
        sender_jid: None,
        sender_phone: None,
        weight: Some(10.0),
        weight_unit: Some("ton".to_string()),
        cargo_type: Some("demir".to_string()),
        load_type: None,
        is_urgent: false,
        confidence_score: 1.0,
        confidence_level: ConfidenceLevel::High,
        route_index: None,
        total_routes: None,
        posted_at: Utc::now(),
        created_at: Utc::now(),
        is_active: true,
    }
}

fn test_state(jobs: Vec<Job>) -> Arc<AppState> {
    Arc::new(AppState {
        webhook_secret: "secret".to_string(),
        archive_bucket: "bucket".to_string(),
        archive: Arc::new(NoopArchive),
        queue: Arc::new(NoopQueue),
        jobs: Arc::new(StubJobs { fixed: Mutex::new(jobs) }),
        raw_messages: Arc::new(NoopRawMessages),
        conversations: Arc::new(InMemoryConversationStore::new()),
        outbound: Arc::new(NoopOutbound),
        llm_endpoint: None,
        http_client: reqwest::Client::new(),
    })
}

#[tokio::test]
async fn greets_on_first_contact() {
    let state = test_state(vec![]);
    let reply = handle_turn(&state, "user-1", "merhaba").await;
    assert!(reply.contains("nerden nereye"));
}

#[tokio::test]
async fn zero_results_reports_no_matches() {
    let state = test_state(vec![]);
    let reply = handle_turn(&state, "user-2", "antalyadan istanbula tir ariyorum").await;
    assert!(reply.contains("uygun ilan bulamadim") || reply.contains("rotasinda uygun ilan bulamadim"));
}

#[tokio::test]
async fn normal_search_renders_matching_job() {
    let state = test_state(vec![sample_job("antalya", "istanbul")]);
    let reply = handle_turn(&state, "user-3", "antalyadan istanbula tir ariyorum").await;
    assert!(reply.contains("antalya - istanbul"));
    assert!(reply.contains("tel: 5321112233"));
}

#[tokio::test]
async fn pagination_continues_from_last_offset() {
    let many: Vec<Job> = (0..12)
        .map(|i| {
            let mut j = sample_job("antalya", "istanbul");
            j.message_id = format!("job-{i}");
            j
        })
        .collect();
    let state = test_state(many);

    let first = handle_turn(&state, "user-4", "antalyadan istanbula tir ariyorum").await;
    assert!(first.contains("hint:"));

    let second = handle_turn(&state, "user-4", "devam").await;
    assert!(!second.is_empty());
}

#[tokio::test]
async fn unmatched_keyword_falls_to_normal_search_prompt() {
    let state = test_state(vec![]);
    let reply = handle_turn(&state, "user-5", "bugun hava nasil").await;
    assert_eq!(reply, "nerden nereye arac/yuk ariyorsun?");
}

#[tokio::test]
async fn parsiyel_search_falls_back_with_disclaimer_when_no_parsiyel_job_exists() {
    let mut job = sample_job("antalya", "istanbul");
    job.cargo_type = Some("demir".to_string());
    let state = test_state(vec![job]);

    let reply = handle_turn(&state, "user-6", "antalyadan istanbula parsiyel yuk ariyorum").await;

    assert!(reply.contains("parsiyel ilan bulamadim"));
    assert!(reply.contains("antalya - istanbul"));
}

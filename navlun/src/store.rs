//! Storage collaborator traits (spec.md §6 "external collaborators" and
//! §4.5/§4.6): the object archive, the FIFO queue, the relational job
//! store, and the conversation key-value store. Pluggable backends
//! implement these traits; the pipeline and agent controller operate only
//! through them (grounded on `bpmn-lite-core::store::ProcessStore`'s
//! trait-per-concern shape).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{ArchiveError, ConversationStoreError, JobStoreError, QueueError};
use crate::types::{Conversation, ConversationContextPatch, ConversationMessage, Job, PendingNotification, RawMessage};

/// Durable object storage for raw inbound payloads (spec.md §4.5 ARCHIVED
/// transition, §6.1 archive object shape).
#[async_trait]
pub trait Archive: Send + Sync {
    async fn write(&self, key: &str, payload: &[u8]) -> Result<(), ArchiveError>;
}

/// One message queued for asynchronous consumption, carrying the FIFO
/// partitioning and dedup keys spec.md §4.5/§6.1 require, plus the retry
/// count the consumer bumps on each requeue (spec.md §4.5 retry policy:
/// three attempts then dead-letter).
#[derive(Debug, Clone)]
pub struct QueueMessage {
    pub body: Vec<u8>,
    pub message_group_id: String,
    pub deduplication_id: String,
    pub attempts: u32,
}

/// Strict-FIFO, per-group-partitioned queue (spec.md §4.5 QUEUED
/// transition, §5 concurrency model).
#[async_trait]
pub trait Queue: Send + Sync {
    async fn send(&self, message: QueueMessage) -> Result<(), QueueError>;
}

/// Relational persistence for `RawMessage` rows (spec.md §4.5 PARSING/DONE
/// transitions). `message_id` uniqueness is what makes at-least-once
/// delivery idempotent (spec.md §9).
#[async_trait]
pub trait RawMessageStore: Send + Sync {
    /// Inserts `message` unless a row with the same `message_id` already
    /// exists, in which case the existing row is returned instead.
    async fn upsert_if_absent(&self, message: &RawMessage) -> Result<RawMessage, JobStoreError>;

    async fn mark_processed(&self, message_id: &str) -> Result<(), JobStoreError>;
}

/// Relational persistence for `Job` rows (spec.md §4.5 MATERIALIZED
/// transition, §6.4 columns).
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Inserts `job`, returning `Ok(false)` without error if a row with the
    /// same `message_id` already exists (idempotent under at-least-once
    /// delivery, spec.md §9 "at-least-once everywhere").
    async fn insert_job_if_absent(&self, job: &Job) -> Result<bool, JobStoreError>;

    async fn find_by_message_id(&self, message_id: &str) -> Result<Vec<Job>, JobStoreError>;

    /// Core search used by the agent's normal-search path (§4.7 step 15) and
    /// by pending-notification matching (§4.5 fan-out).
    async fn search(&self, params: &JobSearchParams) -> Result<JobSearchResult, JobStoreError>;

    /// Deactivates jobs posted before `retention_cutoff` (supplemented
    /// feature, SPEC_FULL.md §5 retention sweep). Returns the number of rows
    /// affected.
    async fn deactivate_stale(&self, retention_cutoff: DateTime<Utc>) -> Result<u64, JobStoreError>;
}

/// Search filters shared by the normal-search, pagination, region, and
/// intra-city handlers (spec.md §4.7).
#[derive(Debug, Clone, Default)]
pub struct JobSearchParams {
    pub origin_province: Option<String>,
    pub destination_province: Option<String>,
    pub vehicle_type: Option<navlun_parser::vehicle::VehicleType>,
    pub body_type: Option<navlun_parser::vehicle::BodyType>,
    pub cargo_type: Option<String>,
    pub max_weight_tons: Option<f64>,
    pub offset: u32,
    pub limit: u32,
}

#[derive(Debug, Clone)]
pub struct JobSearchResult {
    pub jobs: Vec<Job>,
    pub total_count: u64,
}

/// Key-value conversation storage (spec.md §4.6).
#[async_trait]
pub trait ConversationStore: Send + Sync {
    async fn get_conversation(&self, user_id: &str) -> Result<Conversation, ConversationStoreError>;

    async fn add_message(
        &self,
        user_id: &str,
        message: ConversationMessage,
        context_patch: Option<ConversationContextPatch>,
    ) -> Result<(), ConversationStoreError>;

    async fn get_pending_notifications_by_route(
        &self,
        origin_ascii: &str,
        destination_ascii: Option<&str>,
    ) -> Result<Vec<PendingNotification>, ConversationStoreError>;

    async fn upsert_pending_notification(
        &self,
        record: PendingNotification,
    ) -> Result<(), ConversationStoreError>;

    async fn delete_pending_notification(
        &self,
        user_id: &str,
        origin_ascii: &str,
        destination_ascii: Option<&str>,
    ) -> Result<(), ConversationStoreError>;
}

/// Outbound delivery to the original chat transport — kept as a trait so
/// the pipeline's notification fan-out (§4.5) and the agent's reply path
/// (§4.7) both depend on an abstraction, not a concrete HTTP client.
#[async_trait]
pub trait OutboundDelivery: Send + Sync {
    async fn deliver(&self, group_id: &str, text: &str) -> Result<(), crate::error::NotificationError>;
}

/// Postgres-backed [`JobStore`] (enriched from the pack: `sqlx` is not part
/// of the teacher's stack; reused here from `adamtc007-ob-poc`'s
/// `store_postgres.rs`, which is the pack's only example of an
/// `async_trait`-over-`sqlx::PgPool` store).
pub struct PostgresJobStore {
    pool: sqlx::PgPool,
}

impl PostgresJobStore {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobStore for PostgresJobStore {
    async fn insert_job_if_absent(&self, job: &Job) -> Result<bool, JobStoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO jobs (
                id, message_id, source_group_id, raw_text, message_type,
                origin_mentioned, origin_province, origin_province_code, origin_district,
                destination_mentioned, destination_province, destination_province_code, destination_district,
                vehicle_type, body_type, is_refrigerated,
                contact_phone, contact_phone_normalized, contact_name, sender_jid, sender_phone,
                weight, weight_unit, cargo_type, load_type, is_urgent,
                confidence_score, confidence_level, route_index, total_routes,
                posted_at, created_at, is_active
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27, $28, $29, $30, $31, $32, $33
            )
            ON CONFLICT (message_id) DO NOTHING
            "#,
        )
        .bind(job.id)
        .bind(&job.message_id)
        .bind(&job.source_group_id)
        .bind(&job.raw_text)
        .bind(serde_json::to_string(&job.message_type).unwrap_or_default())
        .bind(&job.origin_mentioned)
        .bind(&job.origin_province)
        .bind(job.origin_province_code.map(i32::from))
        .bind(&job.origin_district)
        .bind(&job.destination_mentioned)
        .bind(&job.destination_province)
        .bind(job.destination_province_code.map(i32::from))
        .bind(&job.destination_district)
        .bind(job.vehicle_type.map(|v| serde_json::to_string(&v).unwrap_or_default()))
        .bind(job.body_type.map(|v| serde_json::to_string(&v).unwrap_or_default()))
        .bind(job.is_refrigerated)
        .bind(&job.contact_phone)
        .bind(&job.contact_phone_normalized)
        .bind(&job.contact_name)
        .bind(&job.sender_jid)
        .bind(&job.sender_phone)
        .bind(job.weight)
        .bind(&job.weight_unit)
        .bind(&job.cargo_type)
        .bind(&job.load_type)
        .bind(job.is_urgent)
        .bind(job.confidence_score)
        .bind(serde_json::to_string(&job.confidence_level).unwrap_or_default())
        .bind(job.route_index.map(i64::from))
        .bind(job.total_routes.map(i64::from))
        .bind(job.posted_at)
        .bind(job.created_at)
        .bind(job.is_active)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_message_id(&self, message_id: &str) -> Result<Vec<Job>, JobStoreError> {
        // `message_id` may have a `#routeN` suffix on retrieval of a
        // specific leg; a base lookup uses LIKE to catch all legs.
        let pattern = format!("{message_id}%");
        let rows = sqlx::query_as::<_, JobRow>(
            "SELECT * FROM jobs WHERE message_id = $1 OR message_id LIKE $2",
        )
        .bind(message_id)
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Job::from).collect())
    }

    async fn search(&self, params: &JobSearchParams) -> Result<JobSearchResult, JobStoreError> {
        let vehicle_type = params.vehicle_type.map(|v| serde_json::to_string(&v).unwrap_or_default());
        let body_type = params.body_type.map(|b| serde_json::to_string(&b).unwrap_or_default());

        let rows = sqlx::query_as::<_, JobRow>(
            r#"
            SELECT * FROM jobs
            WHERE is_active = true
              AND ($1::text IS NULL OR origin_province = $1)
              AND ($2::text IS NULL OR destination_province = $2)
              AND ($3::numeric IS NULL OR weight <= $3)
              AND ($4::text IS NULL OR vehicle_type = $4)
              AND ($5::text IS NULL OR body_type = $5)
              AND ($6::text IS NULL OR cargo_type = $6)
            ORDER BY posted_at DESC
            OFFSET $7 LIMIT $8
            "#,
        )
        .bind(&params.origin_province)
        .bind(&params.destination_province)
        .bind(params.max_weight_tons)
        .bind(&vehicle_type)
        .bind(&body_type)
        .bind(&params.cargo_type)
        .bind(i64::from(params.offset))
        .bind(i64::from(params.limit))
        .fetch_all(&self.pool)
        .await?;

        let total_count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM jobs
            WHERE is_active = true
              AND ($1::text IS NULL OR origin_province = $1)
              AND ($2::text IS NULL OR destination_province = $2)
              AND ($3::numeric IS NULL OR weight <= $3)
              AND ($4::text IS NULL OR vehicle_type = $4)
              AND ($5::text IS NULL OR body_type = $5)
              AND ($6::text IS NULL OR cargo_type = $6)
            "#,
        )
        .bind(&params.origin_province)
        .bind(&params.destination_province)
        .bind(params.max_weight_tons)
        .bind(&vehicle_type)
        .bind(&body_type)
        .bind(&params.cargo_type)
        .fetch_one(&self.pool)
        .await?;

        Ok(JobSearchResult {
            jobs: rows.into_iter().map(Job::from).collect(),
            total_count: total_count.max(0) as u64,
        })
    }

    async fn deactivate_stale(&self, retention_cutoff: DateTime<Utc>) -> Result<u64, JobStoreError> {
        let result = sqlx::query("UPDATE jobs SET is_active = false WHERE is_active = true AND posted_at < $1")
            .bind(retention_cutoff)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

/// Postgres-backed [`RawMessageStore`].
pub struct PostgresRawMessageStore {
    pool: sqlx::PgPool,
}

impl PostgresRawMessageStore {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RawMessageRow {
    message_id: String,
    group_id: String,
    sender_id: Option<String>,
    sender_phone: Option<String>,
    text: String,
    archive_ref: String,
    received_at: DateTime<Utc>,
    source_timestamp: Option<DateTime<Utc>>,
    processed: bool,
    processed_at: Option<DateTime<Utc>>,
}

impl From<RawMessageRow> for crate::types::RawMessage {
    fn from(row: RawMessageRow) -> Self {
        crate::types::RawMessage {
            message_id: row.message_id,
            group_id: row.group_id,
            sender_id: row.sender_id,
            sender_phone: row.sender_phone,
            text: row.text,
            archive_ref: row.archive_ref,
            received_at: row.received_at,
            source_timestamp: row.source_timestamp,
            processed: row.processed,
            processed_at: row.processed_at,
        }
    }
}

#[async_trait]
impl RawMessageStore for PostgresRawMessageStore {
    async fn upsert_if_absent(&self, message: &RawMessage) -> Result<RawMessage, JobStoreError> {
        sqlx::query(
            r#"
            INSERT INTO raw_messages (message_id, group_id, sender_id, sender_phone, text, archive_ref, received_at, source_timestamp, processed, processed_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, false, NULL)
            ON CONFLICT (message_id) DO NOTHING
            "#,
        )
        .bind(&message.message_id)
        .bind(&message.group_id)
        .bind(&message.sender_id)
        .bind(&message.sender_phone)
        .bind(&message.text)
        .bind(&message.archive_ref)
        .bind(message.received_at)
        .bind(message.source_timestamp)
        .execute(&self.pool)
        .await?;

        let row: RawMessageRow = sqlx::query_as("SELECT * FROM raw_messages WHERE message_id = $1")
            .bind(&message.message_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn mark_processed(&self, message_id: &str) -> Result<(), JobStoreError> {
        sqlx::query("UPDATE raw_messages SET processed = true, processed_at = now() WHERE message_id = $1")
            .bind(message_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

/// Flat row shape matching the §6.4 column list; `FromRow` lets `sqlx`
/// decode directly, with JSON-text columns re-parsed into typed enums in
/// [`Job::from`].
#[derive(sqlx::FromRow)]
struct JobRow {
    id: Uuid,
    message_id: String,
    source_group_id: String,
    raw_text: String,
    message_type: String,
    origin_mentioned: Option<String>,
    origin_province: Option<String>,
    origin_province_code: Option<i32>,
    origin_district: Option<String>,
    destination_mentioned: Option<String>,
    destination_province: Option<String>,
    destination_province_code: Option<i32>,
    destination_district: Option<String>,
    vehicle_type: Option<String>,
    body_type: Option<String>,
    is_refrigerated: bool,
    contact_phone: String,
    contact_phone_normalized: String,
    contact_name: Option<String>,
    sender_jid: Option<String>,
    sender_phone: Option<String>,
    weight: Option<f64>,
    weight_unit: Option<String>,
    cargo_type: Option<String>,
    load_type: Option<String>,
    is_urgent: bool,
    confidence_score: f64,
    confidence_level: String,
    route_index: Option<i64>,
    total_routes: Option<i64>,
    posted_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
    is_active: bool,
}

impl From<JobRow> for Job {
    fn from(row: JobRow) -> Self {
        Job {
            id: row.id,
            message_id: row.message_id,
            source_group_id: row.source_group_id,
            raw_text: row.raw_text,
            message_type: serde_json::from_str(&row.message_type).unwrap_or(navlun_parser::message_type::MessageType::Unknown),
            origin_mentioned: row.origin_mentioned,
            origin_province: row.origin_province,
            origin_province_code: row.origin_province_code.map(|c| c as u8),
            origin_district: row.origin_district,
            destination_mentioned: row.destination_mentioned,
            destination_province: row.destination_province,
            destination_province_code: row.destination_province_code.map(|c| c as u8),
            destination_district: row.destination_district,
            vehicle_type: row.vehicle_type.and_then(|s| serde_json::from_str(&s).ok()),
            body_type: row.body_type.and_then(|s| serde_json::from_str(&s).ok()),
            is_refrigerated: row.is_refrigerated,
            contact_phone: row.contact_phone,
            contact_phone_normalized: row.contact_phone_normalized,
            contact_name: row.contact_name,
            sender_jid: row.sender_jid,
            sender_phone: row.sender_phone,
            weight: row.weight,
            weight_unit: row.weight_unit,
            cargo_type: row.cargo_type,
            load_type: row.load_type,
            is_urgent: row.is_urgent,
            confidence_score: row.confidence_score,
            confidence_level: serde_json::from_str(&row.confidence_level)
                .unwrap_or(navlun_parser::confidence::ConfidenceLevel::Low),
            route_index: row.route_index.map(|i| i as u32),
            total_routes: row.total_routes.map(|i| i as u32),
            posted_at: row.posted_at,
            created_at: row.created_at,
            is_active: row.is_active,
        }
    }
}

//! Process-singleton resources threaded through every handler (spec.md §5:
//! "cold-start resources are process-singleton and lazily initialized;
//! lifetime = process lifetime"), mirroring `airmail_service::main`'s single
//! `Arc<AirmailIndex>` passed via axum `State`.

use std::sync::Arc;

use navlun::{Archive, ConversationStore, JobStore, OutboundDelivery, Queue, RawMessageStore};

pub struct AppState {
    pub webhook_secret: String,
    pub archive_bucket: String,
    pub archive: Arc<dyn Archive>,
    pub queue: Arc<dyn Queue>,
    pub jobs: Arc<dyn JobStore>,
    pub raw_messages: Arc<dyn RawMessageStore>,
    pub conversations: Arc<dyn ConversationStore>,
    pub outbound: Arc<dyn OutboundDelivery>,
    pub llm_endpoint: Option<String>,
    pub http_client: reqwest::Client,
}

#![forbid(unsafe_code)]

//! Core domain types, storage traits, and the ingestion pipeline state
//! machine for the freight-posting aggregation system.

pub mod conversation;
pub mod error;
pub mod pipeline;
pub mod store;
pub mod types;
pub mod webhook;

pub use conversation::InMemoryConversationStore;
pub use error::PipelineError;
pub use pipeline::{consume, sweep_retention, ConsumeDeps, ConsumeOutcome, QueueMessageBody};
pub use store::{Archive, ConversationStore, JobStore, OutboundDelivery, Queue, RawMessageStore};
pub use types::{Conversation, ConversationContext, Job, PendingNotification, RawMessage};

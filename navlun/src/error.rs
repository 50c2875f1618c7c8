//! Error kinds for the ingestion pipeline and its storage collaborators
//! (spec.md §7). Names describe observable failure modes, not
//! implementation details.

use thiserror::Error;

/// Outcomes of the ADMIT transition (spec.md §4.5/§6.1). `Filtered` is a
/// silent, logged 200 (own message, non-group, empty text); `Malformed` is
/// a 400 (the JSON didn't even have the expected shape).
#[derive(Error, Debug)]
pub enum AdmissionError {
    #[error("filtered: {0}")]
    Filtered(&'static str),

    #[error("malformed webhook payload: {0}")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("archive write timed out or failed: {0}")]
    WriteFailed(String),
}

#[derive(Error, Debug)]
pub enum QueueError {
    #[error("queue send failed: {0}")]
    SendFailed(String),
}

#[derive(Error, Debug)]
pub enum JobStoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum ConversationStoreError {
    #[error("conversation store error: {0}")]
    Backend(String),
}

/// Errors surfaced by [`crate::pipeline::ingest`]. `ParseFail` and
/// `ArchiveFail`/`QueueFail` are retryable (spec.md §7 propagation policy);
/// everything else is terminal for the message.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("archive write failed")]
    ArchiveFail(#[from] ArchiveError),

    #[error("queue enqueue failed")]
    QueueFail(#[from] QueueError),

    #[error("job store error")]
    Store(#[from] JobStoreError),

    #[error("malformed message payload: {0}")]
    ParseFail(String),
}

#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("outbound delivery failed: {0}")]
    DeliveryFailed(String),

    #[error("conversation store error")]
    Store(#[from] ConversationStoreError),
}

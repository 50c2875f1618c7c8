//! Local stand-ins for the collaborators spec.md §1 treats as external
//! (object archive, FIFO queue, outbound chat delivery). Production
//! deployments swap these for the real object store / SQS-ish queue /
//! WhatsApp sender; the trait boundary in `navlun::store` is what matters,
//! not these implementations (SPEC_FULL.md §1).

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::{error, info, warn};
use navlun::error::{ArchiveError, NotificationError, QueueError};
use navlun::store::{Archive, OutboundDelivery, Queue, QueueMessage};
use navlun::types::DeadLetter;
use tokio::fs;
use tokio::sync::mpsc;

/// spec.md §4.5 retry policy: a message is returned to the queue on
/// failure; after this many attempts it is dead-lettered instead.
const MAX_CONSUME_ATTEMPTS: u32 = 3;

/// Writes archive objects to a directory tree mirroring the
/// `messages/<YYYY>/<MM>/<DD>/<instance>/<messageId>.json` key layout
/// (spec.md §6.1) under `root`.
pub struct FilesystemArchive {
    root: PathBuf,
}

impl FilesystemArchive {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl Archive for FilesystemArchive {
    async fn write(&self, key: &str, payload: &[u8]) -> Result<(), ArchiveError> {
        let path = self.root.join(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ArchiveError::WriteFailed(format!("mkdir {}: {e}", parent.display())))?;
        }
        fs::write(&path, payload)
            .await
            .map_err(|e| ArchiveError::WriteFailed(format!("write {}: {e}", path.display())))
    }
}

/// An in-process, single-consumer FIFO queue. Per-group ordering (spec.md
/// §5) holds trivially because there is exactly one consumer task reading
/// one channel in arrival order; cross-process durability is out of scope
/// for this local stand-in.
pub struct InProcessQueue {
    sender: mpsc::UnboundedSender<QueueMessage>,
}

impl InProcessQueue {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<QueueMessage>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

#[async_trait]
impl Queue for InProcessQueue {
    async fn send(&self, message: QueueMessage) -> Result<(), QueueError> {
        self.sender
            .send(message)
            .map_err(|e| QueueError::SendFailed(e.to_string()))
    }
}

/// Logs outbound notification text instead of calling a real chat
/// transport. Delivery failures here are intentionally impossible so the
/// fan-out's "delivery failure does not fail the pipeline" path (spec.md
/// §4.5) is exercised only by real backends, not this stand-in.
pub struct LoggingOutboundDelivery;

#[async_trait]
impl OutboundDelivery for LoggingOutboundDelivery {
    async fn deliver(&self, group_id: &str, text: &str) -> Result<(), NotificationError> {
        info!("outbound -> {group_id}: {text}");
        Ok(())
    }
}

/// Drives the QUEUED -> consume() loop: pulls `QueueMessageBody`s off the
/// in-process queue and runs the PARSING/Gate/MATERIALIZED/fanout/DONE
/// steps, matching spec.md §4.5's "consumer" role. Runs until the channel
/// closes (process shutdown).
pub async fn run_consumer_loop(
    mut receiver: mpsc::UnboundedReceiver<QueueMessage>,
    deps: Arc<crate::state::AppState>,
) {
    while let Some(message) = receiver.recv().await {
        let body: navlun::QueueMessageBody = match serde_json::from_slice(&message.body) {
            Ok(b) => b,
            Err(e) => {
                warn!("dropping undecodable queue message: {e}");
                continue;
            }
        };
        let consume_deps = navlun::ConsumeDeps {
            raw_messages: deps.raw_messages.as_ref(),
            jobs: deps.jobs.as_ref(),
            conversations: deps.conversations.as_ref(),
            outbound: deps.outbound.as_ref(),
        };
        match navlun::consume(&body, &consume_deps).await {
            Ok(outcome) => info!(
                "consumed {}: {} job(s) materialized, {} notification(s) sent",
                body.message_id, outcome.materialized_job_count, outcome.notifications_sent
            ),
            Err(e) => {
                let attempts = message.attempts + 1;
                warn!("consume failed for {} (attempt {attempts}): {e:#}", body.message_id);
                if attempts >= MAX_CONSUME_ATTEMPTS {
                    dead_letter(deps.archive.as_ref(), &message, &body, attempts, &e.to_string()).await;
                } else if let Err(send_err) = deps
                    .queue
                    .send(QueueMessage { attempts, ..message.clone() })
                    .await
                {
                    error!("failed to requeue {} for retry: {send_err}", body.message_id);
                }
            }
        }
    }
}

async fn dead_letter(archive: &dyn Archive, message: &QueueMessage, body: &navlun::QueueMessageBody, attempts: u32, last_error: &str) {
    let record = DeadLetter {
        message_id: body.message_id.clone(),
        group_id: message.message_group_id.clone(),
        last_error: last_error.to_string(),
        attempts,
        first_failed_at: Utc::now(),
        payload: serde_json::to_value(body).unwrap_or(serde_json::Value::Null),
    };
    let key = format!("dead-letters/{}.json", body.message_id);
    let payload = serde_json::to_vec(&record).unwrap_or_default();
    if let Err(e) = archive.write(&key, &payload).await {
        error!("failed to archive dead letter for {}: {e}", body.message_id);
    } else {
        error!("dead-lettered {} after {} attempts", body.message_id, record.attempts);
    }
}

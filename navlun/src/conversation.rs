//! In-memory `ConversationStore` (spec.md §4.6). A single conversation is
//! mutated from one logical actor at a time (spec.md §5), so a `Mutex`
//! guarding a plain `HashMap` is sufficient — no cross-turn concurrency
//! guarantees are required beyond mutual exclusion within one turn.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::error::ConversationStoreError;
use crate::store::ConversationStore;
use crate::types::{Conversation, ConversationContextPatch, ConversationMessage, PendingNotification};

#[derive(Default)]
pub struct InMemoryConversationStore {
    conversations: Mutex<HashMap<String, Conversation>>,
    pending: Mutex<Vec<PendingNotification>>,
}

impl InMemoryConversationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn get_conversation(&self, user_id: &str) -> Result<Conversation, ConversationStoreError> {
        let guard = self.conversations.lock().unwrap();
        Ok(guard.get(user_id).cloned().unwrap_or_else(|| Conversation {
            user_id: user_id.to_string(),
            messages: Vec::new(),
            context: Default::default(),
        }))
    }

    async fn add_message(
        &self,
        user_id: &str,
        message: ConversationMessage,
        context_patch: Option<ConversationContextPatch>,
    ) -> Result<(), ConversationStoreError> {
        let mut guard = self.conversations.lock().unwrap();
        let convo = guard.entry(user_id.to_string()).or_insert_with(|| Conversation {
            user_id: user_id.to_string(),
            messages: Vec::new(),
            context: Default::default(),
        });
        convo.messages.push(message);
        if let Some(patch) = context_patch {
            convo.context.merge(patch);
        }
        Ok(())
    }

    async fn get_pending_notifications_by_route(
        &self,
        origin_ascii: &str,
        destination_ascii: Option<&str>,
    ) -> Result<Vec<PendingNotification>, ConversationStoreError> {
        let now = Utc::now();
        let guard = self.pending.lock().unwrap();
        Ok(guard
            .iter()
            .filter(|p| p.ttl_expires_at > now)
            .filter(|p| p.origin_ascii == origin_ascii)
            .filter(|p| destination_ascii.is_none() || p.destination_ascii.as_deref() == destination_ascii)
            .cloned()
            .collect())
    }

    async fn upsert_pending_notification(
        &self,
        record: PendingNotification,
    ) -> Result<(), ConversationStoreError> {
        let mut guard = self.pending.lock().unwrap();
        guard.retain(|p| {
            !(p.user_id == record.user_id
                && p.origin_ascii == record.origin_ascii
                && p.destination_ascii == record.destination_ascii)
        });
        guard.push(record);
        Ok(())
    }

    async fn delete_pending_notification(
        &self,
        user_id: &str,
        origin_ascii: &str,
        destination_ascii: Option<&str>,
    ) -> Result<(), ConversationStoreError> {
        let mut guard = self.pending.lock().unwrap();
        guard.retain(|p| {
            !(p.user_id == user_id
                && p.origin_ascii == origin_ascii
                && p.destination_ascii.as_deref() == destination_ascii)
        });
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::Role;
    use chrono::Duration;

    fn msg(text: &str) -> ConversationMessage {
        ConversationMessage { role: Role::User, content: text.to_string(), ts: Utc::now() }
    }

    #[tokio::test]
    async fn add_message_appends_and_merges_context() {
        let store = InMemoryConversationStore::new();
        store.add_message("u1", msg("merhaba"), None).await.unwrap();
        let patch = ConversationContextPatch { last_origin: Some("istanbul".to_string()), ..Default::default() };
        store.add_message("u1", msg("istanbul ankara"), Some(patch)).await.unwrap();

        let convo = store.get_conversation("u1").await.unwrap();
        assert_eq!(convo.messages.len(), 2);
        assert_eq!(convo.context.last_origin.as_deref(), Some("istanbul"));
    }

    #[tokio::test]
    async fn pending_notification_round_trips_and_expires() {
        let store = InMemoryConversationStore::new();
        let now = Utc::now();
        store
            .upsert_pending_notification(PendingNotification {
                user_id: "u1".to_string(),
                origin_ascii: "kayseri".to_string(),
                destination_ascii: Some("ankara".to_string()),
                vehicle_type: None,
                body_type: None,
                cargo_type: None,
                created_at: now,
                ttl_expires_at: now + Duration::days(1),
            })
            .await
            .unwrap();

        let found = store.get_pending_notifications_by_route("kayseri", Some("ankara")).await.unwrap();
        assert_eq!(found.len(), 1);

        store.delete_pending_notification("u1", "kayseri", Some("ankara")).await.unwrap();
        let found = store.get_pending_notifications_by_route("kayseri", Some("ankara")).await.unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn expired_pending_notification_is_not_returned() {
        let store = InMemoryConversationStore::new();
        let now = Utc::now();
        store
            .upsert_pending_notification(PendingNotification {
                user_id: "u1".to_string(),
                origin_ascii: "kayseri".to_string(),
                destination_ascii: None,
                vehicle_type: None,
                body_type: None,
                cargo_type: None,
                created_at: now - Duration::days(2),
                ttl_expires_at: now - Duration::hours(1),
            })
            .await
            .unwrap();

        let found = store.get_pending_notifications_by_route("kayseri", None).await.unwrap();
        assert!(found.is_empty());
    }
}

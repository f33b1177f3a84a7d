//! Unseen-message tracking behind the blinking tab labels.
//!
//! Only real chat lines count; joins, quits, and nick changes never make a
//! tab blink. A buffer with no tracking record is treated as fully seen so
//! a fresh profile does not light every tab at once.

use std::collections::HashMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::script::record::{EventKind, EventRecord};
use crate::store::{KvStore, Result};

const STORAGE_KEY: &str = "papatya_unseen_messages";

/// Sentinel meaning nothing in the buffer has been seen yet.
const NOTHING_SEEN: i64 = -1;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct Tracking {
    last_seen_index: i64,
    last_seen_timestamp: i64,
}

pub struct UnseenTracker<S: KvStore> {
    store: S,
}

impl<S: KvStore> UnseenTracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn load(&self) -> HashMap<String, Tracking> {
        match self.store.get(STORAGE_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            _ => HashMap::new(),
        }
    }

    fn save(&mut self, data: &HashMap<String, Tracking>) -> Result<()> {
        let raw = serde_json::to_string(data)?;
        self.store.set(STORAGE_KEY, &raw)
    }

    /// Mark everything currently in the buffer as seen. `message_count` is
    /// the full buffer length, system events included.
    pub fn mark_seen(&mut self, buffer: &str, message_count: usize) -> Result<()> {
        let mut data = self.load();
        data.insert(
            buffer.to_string(),
            Tracking {
                last_seen_index: message_count as i64 - 1,
                last_seen_timestamp: Utc::now().timestamp_millis(),
            },
        );
        self.save(&data)
    }

    /// Start tracking a buffer as caught-up, if not already tracked.
    pub fn initialize_tracking(&mut self, buffer: &str, message_count: usize) -> Result<()> {
        if !self.load().contains_key(buffer) {
            self.mark_seen(buffer, message_count)?;
        }
        Ok(())
    }

    /// Start tracking a buffer as fully unseen, if not already tracked.
    /// Used for tabs opened in the background.
    pub fn initialize_unseen(&mut self, buffer: &str) -> Result<()> {
        let mut data = self.load();
        if !data.contains_key(buffer) {
            data.insert(
                buffer.to_string(),
                Tracking {
                    last_seen_index: NOTHING_SEEN,
                    last_seen_timestamp: 0,
                },
            );
            self.save(&data)?;
        }
        Ok(())
    }

    /// Whether the buffer holds chat lines past the last seen position.
    pub fn has_unseen(&self, buffer: &str, messages: &[EventRecord]) -> bool {
        let data = self.load();
        let Some(tracking) = data.get(buffer) else {
            return false;
        };

        let chat_count = messages
            .iter()
            .filter(|m| m.kind == EventKind::Chat)
            .count();
        if chat_count == 0 {
            return false;
        }
        if tracking.last_seen_index == NOTHING_SEEN {
            return true;
        }

        // Chat lines at or before the last seen position.
        let seen_chats = messages
            .iter()
            .take((tracking.last_seen_index + 1) as usize)
            .filter(|m| m.kind == EventKind::Chat)
            .count();
        chat_count > seen_chats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn tracker() -> UnseenTracker<MemoryStore> {
        UnseenTracker::new(MemoryStore::new())
    }

    fn chat(n: usize) -> EventRecord {
        EventRecord::chat(format!("user{}", n), "selam")
    }

    fn join(n: usize) -> EventRecord {
        EventRecord::login(
            format!("user{}", n),
            "PAPATYAv7@1.2.AAAA0000.sibertr.online",
            "#test",
        )
    }

    #[test]
    fn untracked_buffer_counts_as_seen() {
        let t = tracker();
        assert!(!t.has_unseen("#test", &[chat(0), chat(1)]));
    }

    #[test]
    fn mark_seen_clears_then_new_chat_lights_up() {
        let mut t = tracker();
        let mut messages = vec![chat(0), chat(1)];
        t.mark_seen("#test", messages.len()).unwrap();
        assert!(!t.has_unseen("#test", &messages));

        messages.push(chat(2));
        assert!(t.has_unseen("#test", &messages));
    }

    #[test]
    fn churn_never_lights_a_tab() {
        let mut t = tracker();
        let mut messages = vec![chat(0)];
        t.mark_seen("#test", messages.len()).unwrap();

        messages.push(join(1));
        messages.push(join(2));
        assert!(!t.has_unseen("#test", &messages));
    }

    #[test]
    fn initialize_unseen_lights_on_first_chat() {
        let mut t = tracker();
        t.initialize_unseen("#arka").unwrap();
        assert!(!t.has_unseen("#arka", &[join(0)]));
        assert!(t.has_unseen("#arka", &[join(0), chat(1)]));
    }

    #[test]
    fn initialize_tracking_does_not_overwrite() {
        let mut t = tracker();
        t.initialize_unseen("#test").unwrap();
        t.initialize_tracking("#test", 5).unwrap();
        assert!(t.has_unseen("#test", &[chat(0)]));
    }

    #[test]
    fn seen_position_counts_only_prior_chats() {
        let mut t = tracker();
        // join, chat, join seen; then one more join arrives
        let mut messages = vec![join(0), chat(1), join(2)];
        t.mark_seen("#test", messages.len()).unwrap();
        messages.push(join(3));
        assert!(!t.has_unseen("#test", &messages));
        messages.push(chat(4));
        assert!(t.has_unseen("#test", &messages));
    }
}

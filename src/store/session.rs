//! Session-scoped persistence: the chosen nick, open query tabs, and the
//! intro chime cooldown.

use chrono::Utc;

use crate::store::{KvStore, Result};

const NICKNAME_KEY: &str = "papatya_nickname";
const USER_TABS_KEY: &str = "papatya_user_tabs";
const CHIME_KEY: &str = "papatya_sound_last_played";

/// One hour between intro chimes.
const CHIME_COOLDOWN_MS: i64 = 60 * 60 * 1000;

pub struct SessionStore<S: KvStore> {
    store: S,
}

impl<S: KvStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn nickname(&self) -> Option<String> {
        self.store.get(NICKNAME_KEY).ok().flatten()
    }

    pub fn set_nickname(&mut self, nickname: &str) -> Result<()> {
        self.store.set(NICKNAME_KEY, nickname)
    }

    /// Query tabs left open last session.
    pub fn user_tabs(&self) -> Vec<String> {
        match self.store.get(USER_TABS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    pub fn set_user_tabs(&mut self, tabs: &[String]) -> Result<()> {
        let raw = serde_json::to_string(tabs)?;
        self.store.set(USER_TABS_KEY, &raw)
    }

    /// Whether the intro chime may ring, honoring the hourly cooldown.
    pub fn chime_allowed(&self) -> bool {
        match self.store.get(CHIME_KEY) {
            Ok(Some(raw)) => match raw.parse::<i64>() {
                Ok(last) => Utc::now().timestamp_millis() - last >= CHIME_COOLDOWN_MS,
                Err(_) => true,
            },
            _ => true,
        }
    }

    pub fn record_chime(&mut self) -> Result<()> {
        let now = Utc::now().timestamp_millis();
        self.store.set(CHIME_KEY, &now.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn session() -> SessionStore<MemoryStore> {
        SessionStore::new(MemoryStore::new())
    }

    #[test]
    fn nickname_round_trips() {
        let mut s = session();
        assert_eq!(s.nickname(), None);
        s.set_nickname("DeLi_Kiz").unwrap();
        assert_eq!(s.nickname().as_deref(), Some("DeLi_Kiz"));
    }

    #[test]
    fn user_tabs_round_trip() {
        let mut s = session();
        assert!(s.user_tabs().is_empty());
        s.set_user_tabs(&["Gezgin".to_string(), "AzrA".to_string()])
            .unwrap();
        assert_eq!(s.user_tabs(), vec!["Gezgin", "AzrA"]);
    }

    #[test]
    fn chime_cooldown_blocks_repeat() {
        let mut s = session();
        assert!(s.chime_allowed());
        s.record_chime().unwrap();
        assert!(!s.chime_allowed());
    }
}

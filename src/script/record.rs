//! Scripted event records.
//!
//! One `EventRecord` is one simulated line of IRC activity: a chat message,
//! a login, a quit, or a nickname change. The kind determines which optional
//! fields carry meaning (`new_nick` only for nick changes, `hostmask` and
//! `channel` only for logins/quits). Records are immutable once emitted.

use chrono::Local;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Chat,
    Login,
    Quit,
    NickChange,
}

impl EventKind {
    /// Logins and quits are the "churn" half of a blended stream.
    pub fn is_churn(self) -> bool {
        matches!(self, EventKind::Login | EventKind::Quit)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub time: String,
    pub kind: EventKind,
    pub message: String,
    pub user: String,
    pub new_nick: Option<String>,
    pub hostmask: Option<String>,
    pub channel: Option<String>,
}

impl EventRecord {
    pub fn chat(user: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            time: clock_now(),
            kind: EventKind::Chat,
            message: message.into(),
            user: user.into(),
            new_nick: None,
            hostmask: None,
            channel: None,
        }
    }

    pub fn login(
        user: impl Into<String>,
        hostmask: impl Into<String>,
        channel: impl Into<String>,
    ) -> Self {
        Self {
            time: clock_now(),
            kind: EventKind::Login,
            message: String::new(),
            user: user.into(),
            new_nick: None,
            hostmask: Some(hostmask.into()),
            channel: Some(channel.into()),
        }
    }

    pub fn quit(user: impl Into<String>, hostmask: impl Into<String>) -> Self {
        Self {
            time: clock_now(),
            kind: EventKind::Quit,
            message: String::new(),
            user: user.into(),
            new_nick: None,
            hostmask: Some(hostmask.into()),
            channel: None,
        }
    }

    pub fn nick_change(user: impl Into<String>, new_nick: impl Into<String>) -> Self {
        Self {
            time: clock_now(),
            kind: EventKind::NickChange,
            message: String::new(),
            user: user.into(),
            new_nick: Some(new_nick.into()),
            hostmask: None,
            channel: None,
        }
    }

    /// Re-stamp the record with the current wall clock. Authored logs carry
    /// their original times; emission always shows "now".
    pub fn stamped_now(mut self) -> Self {
        self.time = clock_now();
        self
    }
}

/// Current wall clock as `HH:MM`, the format every PAPATYA line leads with.
pub fn clock_now() -> String {
    Local::now().format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_fields_follow_the_kind() {
        let c = EventRecord::chat("Mina", "selam");
        assert_eq!(c.kind, EventKind::Chat);
        assert!(c.new_nick.is_none() && c.hostmask.is_none() && c.channel.is_none());

        let l = EventRecord::login("sevde", "PAPATYAv7@D9.52.sibertr.net", "#str_chat");
        assert_eq!(l.kind, EventKind::Login);
        assert_eq!(l.channel.as_deref(), Some("#str_chat"));
        assert!(l.message.is_empty());

        let q = EventRecord::quit("Hazal", "PAPATYAv7@5.19.sibertr.net");
        assert_eq!(q.kind, EventKind::Quit);
        assert!(q.channel.is_none());

        let n = EventRecord::nick_change("Eylul", "Eylul_99");
        assert_eq!(n.new_nick.as_deref(), Some("Eylul_99"));
    }

    #[test]
    fn churn_kinds() {
        assert!(EventKind::Login.is_churn());
        assert!(EventKind::Quit.is_churn());
        assert!(!EventKind::Chat.is_churn());
        assert!(!EventKind::NickChange.is_churn());
    }

    #[test]
    fn clock_format_is_hh_mm() {
        let t = clock_now();
        assert_eq!(t.len(), 5);
        assert_eq!(t.as_bytes()[2], b':');
    }
}

//! Channel rosters: who shows up in the user list and with which prefix.
//!
//! A roster keeps three buckets. Chat users come from the authored log and
//! stay put. Stable lurkers pad the list to the channel's density and never
//! speak or leave. Cycling users follow the synthetic churn, joining and
//! quitting as the stream plays.

use rand::RngExt;

use crate::script::data::{NICKNAME_POOL, STAFF};
use crate::script::density;
use crate::script::record::{EventKind, EventRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub nick: String,
    pub op: Option<char>,
}

impl RosterEntry {
    pub fn new(nick: impl Into<String>, op: Option<char>) -> Self {
        Self {
            nick: nick.into(),
            op,
        }
    }
}

/// Sort rank for a mode prefix. Owner first, plain users last.
pub fn op_priority(op: Option<char>) -> u8 {
    match op {
        Some('~') => 1,
        Some('&') => 2,
        Some('@') => 3,
        Some('%') => 4,
        Some('+') => 5,
        _ => 99,
    }
}

#[derive(Debug, Clone)]
pub struct ChannelRoster {
    chat_users: Vec<RosterEntry>,
    stable_lurkers: Vec<RosterEntry>,
    cycling_users: Vec<RosterEntry>,
    max_users: usize,
}

impl ChannelRoster {
    /// Build the roster for `channel` from its authored log.
    pub fn new(channel: &str, log: &[EventRecord]) -> Self {
        let profile = density::profile_for(channel);
        Self {
            chat_users: extract_chat_users(log),
            stable_lurkers: generate_stable_lurkers(profile.stable_lurkers),
            cycling_users: Vec::new(),
            max_users: profile.max_users,
        }
    }

    /// Feed one scripted event through the roster. Joins add a cycling
    /// user, quits remove one, nick changes rename in place.
    pub fn apply(&mut self, event: &EventRecord) {
        match event.kind {
            EventKind::Login => {
                let exists = self.cycling_users.iter().any(|u| u.nick == event.user);
                if !exists && self.cycling_users.len() < self.max_users {
                    self.cycling_users.push(RosterEntry::new(&event.user, None));
                }
            }
            EventKind::Quit => {
                self.cycling_users.retain(|u| u.nick != event.user);
            }
            EventKind::NickChange => {
                if let Some(new_nick) = &event.new_nick {
                    self.rename(&event.user, new_nick);
                }
            }
            EventKind::Chat => {}
        }
    }

    fn rename(&mut self, old: &str, new: &str) {
        for bucket in [
            &mut self.chat_users,
            &mut self.stable_lurkers,
            &mut self.cycling_users,
        ] {
            for entry in bucket.iter_mut() {
                if entry.nick == old {
                    entry.nick = new.to_string();
                }
            }
        }
    }

    /// All visible users, with the local nick and the staff pinned in,
    /// deduplicated and sorted by prefix rank then nick.
    pub fn visible_users(&self, current_nick: &str) -> Vec<RosterEntry> {
        let mut all: Vec<RosterEntry> = self
            .chat_users
            .iter()
            .chain(&self.stable_lurkers)
            .chain(&self.cycling_users)
            .cloned()
            .collect();

        if !all.iter().any(|u| u.nick == current_nick) {
            all.push(RosterEntry::new(current_nick, None));
        }
        for (nick, prefix) in STAFF {
            if !all.iter().any(|u| u.nick == *nick) {
                all.push(RosterEntry::new(*nick, prefix.chars().next()));
            }
        }

        let mut unique: Vec<RosterEntry> = Vec::with_capacity(all.len());
        for entry in all {
            if !unique.iter().any(|u| u.nick == entry.nick) {
                unique.push(entry);
            }
        }

        unique.sort_by(|a, b| {
            op_priority(a.op)
                .cmp(&op_priority(b.op))
                .then_with(|| a.nick.to_lowercase().cmp(&b.nick.to_lowercase()))
        });
        unique
    }

    pub fn user_count(&self, current_nick: &str) -> usize {
        self.visible_users(current_nick).len()
    }
}

/// Users who speak in the authored log, with prefixes inferred from role
/// hints in the nick.
fn extract_chat_users(log: &[EventRecord]) -> Vec<RosterEntry> {
    let mut nicks: Vec<&str> = Vec::new();
    for record in log {
        match record.kind {
            EventKind::Chat => {
                if !record.user.trim().is_empty() && !nicks.contains(&record.user.as_str()) {
                    nicks.push(&record.user);
                }
            }
            EventKind::NickChange => {
                if !record.user.trim().is_empty() && !nicks.contains(&record.user.as_str()) {
                    nicks.push(&record.user);
                }
                if let Some(new_nick) = record.new_nick.as_deref() {
                    if !new_nick.trim().is_empty() && !nicks.contains(&new_nick) {
                        nicks.push(new_nick);
                    }
                }
            }
            _ => {}
        }
    }

    nicks
        .into_iter()
        .map(|nick| {
            let op = if nick.contains("Admin") || nick == "bLueStar" {
                Some('~')
            } else if nick.contains("Mod") {
                Some('@')
            } else if nick.contains("Support") || nick.contains("Manager") {
                Some('+')
            } else {
                None
            };
            RosterEntry::new(nick, op)
        })
        .collect()
}

/// Staff first, then `count` silent nicks walked off the pool in order,
/// with a numeric suffix once the pool wraps. A few get half-op or voice.
fn generate_stable_lurkers(count: usize) -> Vec<RosterEntry> {
    let mut lurkers: Vec<RosterEntry> = STAFF
        .iter()
        .map(|(nick, prefix)| RosterEntry::new(*nick, prefix.chars().next()))
        .collect();
    let mut rng = rand::rng();

    for i in 0..count {
        let base = NICKNAME_POOL[i % NICKNAME_POOL.len()];
        let nick = if i >= NICKNAME_POOL.len() {
            format!("{}_{}", base, i / NICKNAME_POOL.len())
        } else {
            base.to_string()
        };
        if lurkers.iter().any(|u| u.nick == nick) {
            continue;
        }

        let roll: f64 = rng.random_range(0.0..1.0);
        let op = if roll < 0.05 {
            Some('%')
        } else if roll < 0.10 {
            Some('+')
        } else {
            None
        };
        lurkers.push(RosterEntry::new(nick, op));
    }

    lurkers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::data;

    fn roster() -> ChannelRoster {
        ChannelRoster::new("#PAPATYA", &data::authored_log("#PAPATYA"))
    }

    #[test]
    fn staff_is_always_visible_and_first() {
        let roster = ChannelRoster::new("#Radyo", &[]);
        let users = roster.visible_users("Misafir_01");
        assert_eq!(users[0].nick, "bLueStar");
        assert_eq!(users[0].op, Some('~'));
        assert!(users.iter().any(|u| u.nick == "esmerim_23"));
        assert!(users.iter().any(|u| u.nick == "NiGDe"));
        assert!(users.iter().any(|u| u.nick == "Misafir_01"));
    }

    #[test]
    fn join_then_quit_cycles_a_user() {
        let mut roster = roster();
        let join = EventRecord::login("Gezgin", "PAPATYAv7@1.2.AAAA0000.sibertr.online", "#PAPATYA");
        roster.apply(&join);
        assert!(roster.visible_users("ben").iter().any(|u| u.nick == "Gezgin"));

        let quit = EventRecord::quit("Gezgin", "PAPATYAv7@1.2.AAAA0000.sibertr.online");
        roster.apply(&quit);
        assert!(!roster.visible_users("ben").iter().any(|u| u.nick == "Gezgin"));
    }

    #[test]
    fn duplicate_join_is_ignored() {
        let mut roster = roster();
        let join = EventRecord::login("Gezgin", "PAPATYAv7@1.2.AAAA0000.sibertr.online", "#PAPATYA");
        roster.apply(&join);
        let before = roster.user_count("ben");
        roster.apply(&join);
        assert_eq!(roster.user_count("ben"), before);
    }

    #[test]
    fn cycling_users_respect_the_cap() {
        let mut roster = ChannelRoster::new("#Webcam", &[]);
        for i in 0..100 {
            let join = EventRecord::login(
                format!("kisi{}", i),
                "PAPATYAv7@1.2.AAAA0000.sibertr.online",
                "#Webcam",
            );
            roster.apply(&join);
        }
        assert!(roster.cycling_users.len() <= density::profile_for("#Webcam").max_users);
    }

    #[test]
    fn nick_change_renames_in_place() {
        let mut roster = roster();
        let change = EventRecord::nick_change("Emrehan", "Eyluls");
        roster.apply(&change);
        let users = roster.visible_users("ben");
        assert!(!users.iter().any(|u| u.nick == "Emrehan"));
        assert!(users.iter().any(|u| u.nick == "Eyluls"));
    }

    #[test]
    fn sorted_by_prefix_then_nick() {
        let users = roster().visible_users("ben");
        let ranks: Vec<u8> = users.iter().map(|u| op_priority(u.op)).collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        assert_eq!(ranks, sorted);
    }
}

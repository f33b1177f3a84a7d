//! Synthetic churn generation: the joins and quits that make a scripted
//! room look alive between authored lines.

use rand::RngExt;

use crate::script::data::NICKNAME_POOL;
use crate::script::record::EventRecord;

const MASK_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A plausible cloaked hostmask in the network's house style.
pub fn synthetic_hostmask() -> String {
    let mut rng = rand::rng();
    let a: u8 = rng.random_range(0..255);
    let b: u8 = rng.random_range(0..255);
    let tail: String = (0..8)
        .map(|_| MASK_ALPHABET[rng.random_range(0..MASK_ALPHABET.len())] as char)
        .collect();
    format!("PAPATYAv7@{}.{}.{}.sibertr.online", a, b, tail)
}

/// Generate `count` join/quit events for `channel`, drawing distinct nicks
/// from the pool. Each event is a coin flip between join and quit; joins
/// carry the channel, quits do not.
pub fn generate_churn(channel: &str, count: usize) -> Vec<EventRecord> {
    let mut events = Vec::with_capacity(count);
    let mut used: Vec<&str> = Vec::with_capacity(count);
    let mut rng = rand::rng();

    for _ in 0..count {
        let mut nickname = NICKNAME_POOL[rng.random_range(0..NICKNAME_POOL.len())];
        let mut attempts = 0;
        while used.contains(&nickname) && attempts < 50 {
            nickname = NICKNAME_POOL[rng.random_range(0..NICKNAME_POOL.len())];
            attempts += 1;
        }
        used.push(nickname);

        let is_join = rng.random_range(0.0..1.0) > 0.5;
        let event = if is_join {
            EventRecord::login(nickname, synthetic_hostmask(), channel)
        } else {
            EventRecord::quit(nickname, synthetic_hostmask())
        };
        events.push(event);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::record::EventKind;

    #[test]
    fn generates_requested_count() {
        assert_eq!(generate_churn("#str_chat", 50).len(), 50);
        assert!(generate_churn("#str_chat", 0).is_empty());
    }

    #[test]
    fn only_joins_and_quits_come_out() {
        for ev in generate_churn("#PAPATYA", 40) {
            match ev.kind {
                EventKind::Login => {
                    assert_eq!(ev.channel.as_deref(), Some("#PAPATYA"));
                }
                EventKind::Quit => assert!(ev.channel.is_none()),
                other => panic!("unexpected churn kind {:?}", other),
            }
            assert!(ev.hostmask.is_some());
        }
    }

    #[test]
    fn hostmask_matches_house_style() {
        let mask = synthetic_hostmask();
        assert!(mask.starts_with("PAPATYAv7@"));
        assert!(mask.ends_with(".sibertr.online"));
        let host = mask.split('@').nth(1).unwrap();
        assert_eq!(host.split('.').count(), 5);
    }

    #[test]
    fn nicknames_are_mostly_distinct() {
        let events = generate_churn("#Webcam", 30);
        let mut nicks: Vec<&str> = events.iter().map(|e| e.user.as_str()).collect();
        nicks.sort_unstable();
        nicks.dedup();
        assert!(nicks.len() >= 25);
    }
}

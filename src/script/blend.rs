//! Stream blending: weave an authored chat log and a synthetic churn
//! stream into one sequence without reordering either side.

use rand::RngExt;

use crate::script::record::EventRecord;

/// Share of blend steps that pull from the chat stream when both streams
/// still have events.
pub const CHAT_BIAS: f64 = 0.7;

/// Interleave `chat` and `churn` into a single stream. Each step is a
/// biased coin flip; whichever stream runs dry first, the other drains in
/// order. Relative order within each input is preserved.
pub fn blend(chat: Vec<EventRecord>, churn: Vec<EventRecord>, chat_bias: f64) -> Vec<EventRecord> {
    let mut blended = Vec::with_capacity(chat.len() + churn.len());
    let mut chat = chat.into_iter().peekable();
    let mut churn = churn.into_iter().peekable();
    let mut rng = rand::rng();

    while chat.peek().is_some() || churn.peek().is_some() {
        let take_chat = rng.random_range(0.0..1.0) < chat_bias;
        let next = if take_chat && chat.peek().is_some() {
            chat.next()
        } else {
            churn.next().or_else(|| chat.next())
        };
        if let Some(ev) = next {
            blended.push(ev);
        }
    }

    blended
}

/// Split an authored log into its chat-side events (chat and nick changes)
/// and its churn-side events (logins and quits).
pub fn split_log(log: Vec<EventRecord>) -> (Vec<EventRecord>, Vec<EventRecord>) {
    log.into_iter().partition(|ev| !ev.kind.is_churn())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat_line(n: usize) -> EventRecord {
        EventRecord::chat(format!("user{}", n), format!("line {}", n))
    }

    fn churn_line(n: usize) -> EventRecord {
        EventRecord::quit(format!("ghost{}", n), "PAPATYAv7@1.2.ABCDEF00.sibertr.online")
    }

    #[test]
    fn blend_keeps_every_event() {
        let chat: Vec<_> = (0..20).map(chat_line).collect();
        let churn: Vec<_> = (0..9).map(churn_line).collect();
        let blended = blend(chat, churn, CHAT_BIAS);
        assert_eq!(blended.len(), 29);
    }

    #[test]
    fn blend_preserves_relative_order() {
        for _ in 0..20 {
            let chat: Vec<_> = (0..15).map(chat_line).collect();
            let churn: Vec<_> = (0..15).map(churn_line).collect();
            let blended = blend(chat, churn, CHAT_BIAS);

            let chat_out: Vec<&str> = blended
                .iter()
                .filter(|e| !e.kind.is_churn())
                .map(|e| e.user.as_str())
                .collect();
            let churn_out: Vec<&str> = blended
                .iter()
                .filter(|e| e.kind.is_churn())
                .map(|e| e.user.as_str())
                .collect();

            let expected_chat: Vec<String> = (0..15).map(|n| format!("user{}", n)).collect();
            let expected_churn: Vec<String> = (0..15).map(|n| format!("ghost{}", n)).collect();
            assert_eq!(chat_out, expected_chat);
            assert_eq!(churn_out, expected_churn);
        }
    }

    #[test]
    fn blend_with_empty_churn_is_identity() {
        let chat: Vec<_> = (0..10).map(chat_line).collect();
        let blended = blend(chat.clone(), Vec::new(), CHAT_BIAS);
        assert_eq!(blended, chat);
    }

    #[test]
    fn split_separates_churn_from_chat() {
        let log = vec![chat_line(0), churn_line(0), chat_line(1)];
        let (chat, churn) = split_log(log);
        assert_eq!(chat.len(), 2);
        assert_eq!(churn.len(), 1);
    }
}

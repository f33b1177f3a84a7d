//! The scripted experience: authored logs, synthetic churn, stream
//! blending, rosters, and the playback tasks that drive them.

pub mod banner;
pub mod blend;
pub mod data;
pub mod density;
pub mod generator;
pub mod record;
pub mod roster;
pub mod scheduler;
pub mod whois;

use crate::config::model::AppConfig;
use crate::script::record::EventRecord;

/// Churn volume for channels without a density profile.
const FALLBACK_CHURN_COUNT: usize = 15;

/// Build the playable stream for `channel`: the authored chat lines plus a
/// churn stream sized at the configured share of the chat volume, blended
/// with the configured bias. Channels without a profile get a small fixed
/// churn count.
pub fn build_channel_stream(channel: &str, cfg: &AppConfig) -> Vec<EventRecord> {
    let log = data::authored_log(channel);
    let (chat, _) = blend::split_log(log);

    let churn_count = if cfg.has_density_profile(channel) {
        (chat.len() as f64 * cfg.pacing.churn_ratio) as usize
    } else {
        FALLBACK_CHURN_COUNT
    };
    let churn = generator::generate_churn(channel, churn_count);

    blend::blend(chat, churn, cfg.pacing.chat_bias)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_holds_chat_plus_ratio_of_churn() {
        let cfg = AppConfig::default();
        let chat_len = blend::split_log(data::authored_log("#PAPATYA")).0.len();
        let stream = build_channel_stream("#PAPATYA", &cfg);
        let expected_churn = (chat_len as f64 * cfg.pacing.churn_ratio) as usize;
        assert_eq!(stream.len(), chat_len + expected_churn);
    }

    #[test]
    fn unknown_channel_gets_fixed_churn() {
        let stream = build_channel_stream("#Radyo", &AppConfig::default());
        assert_eq!(stream.len(), FALLBACK_CHURN_COUNT);
        assert!(stream.iter().all(|r| r.kind.is_churn()));
    }
}

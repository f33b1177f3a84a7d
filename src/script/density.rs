//! Per-channel traffic density profiles.
//!
//! Each channel carries a pacing profile: how often synthetic joins and
//! quits fire, how many people the room is allowed to hold, and how many
//! silent lurkers pad the roster. Channels without a profile get a quiet
//! fallback so unknown rooms still feel inhabited.

use rand::RngExt;
use serde::{Deserialize, Serialize};

/// Pacing knobs for one channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityProfile {
    /// Average gap between synthetic joins, in milliseconds.
    pub join_rate_ms: u64,
    /// Average gap between synthetic quits, in milliseconds.
    pub leave_rate_ms: u64,
    /// Cap on concurrently cycling users.
    pub max_users: usize,
    /// Silent roster padding: present, never chat, never leave.
    pub stable_lurkers: usize,
}

impl DensityProfile {
    pub const fn new(
        join_rate_ms: u64,
        leave_rate_ms: u64,
        max_users: usize,
        stable_lurkers: usize,
    ) -> Self {
        Self {
            join_rate_ms,
            leave_rate_ms,
            max_users,
            stable_lurkers,
        }
    }
}

/// Quiet default for channels with no authored profile.
pub const FALLBACK: DensityProfile = DensityProfile::new(5_000, 10_000, 20, 50);

const PROFILES: &[(&str, DensityProfile)] = &[
    ("#str_chat", DensityProfile::new(3_000, 8_000, 80, 100)),
    ("#PAPATYA", DensityProfile::new(8_000, 15_000, 40, 60)),
    ("#Webcam", DensityProfile::new(12_000, 20_000, 25, 30)),
];

/// Whether the channel carries an authored density profile.
pub fn has_profile(channel: &str) -> bool {
    PROFILES.iter().any(|(ch, _)| *ch == channel)
}

/// Density profile for a channel, falling back to [`FALLBACK`].
pub fn profile_for(channel: &str) -> DensityProfile {
    PROFILES
        .iter()
        .find(|(ch, _)| *ch == channel)
        .map(|(_, p)| *p)
        .unwrap_or(FALLBACK)
}

/// Next delay before a synthetic join or quit under `profile`, jittered
/// ±30% around the rate.
pub fn churn_delay(profile: &DensityProfile, is_join: bool) -> u64 {
    let base = if is_join {
        profile.join_rate_ms
    } else {
        profile.leave_rate_ms
    };
    jitter(base)
}

fn jitter(base_ms: u64) -> u64 {
    let variation = base_ms as f64 * 0.3;
    let offset = rand::rng().random_range(-variation..=variation);
    (base_ms as f64 + offset).max(0.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_channels_have_profiles() {
        let p = profile_for("#str_chat");
        assert_eq!(p.join_rate_ms, 3_000);
        assert_eq!(p.stable_lurkers, 100);
    }

    #[test]
    fn unknown_channel_falls_back() {
        assert_eq!(profile_for("#Radyo"), FALLBACK);
        assert_eq!(FALLBACK.join_rate_ms, 5_000);
        assert_eq!(FALLBACK.leave_rate_ms, 10_000);
    }

    #[test]
    fn churn_delay_stays_within_jitter_band() {
        let papatya = profile_for("#PAPATYA");
        let webcam = profile_for("#Webcam");
        for _ in 0..200 {
            let d = churn_delay(&papatya, true);
            assert!((5_600..=10_400).contains(&d), "delay {} out of band", d);
            let d = churn_delay(&webcam, false);
            assert!((14_000..=26_000).contains(&d), "delay {} out of band", d);
        }
    }
}

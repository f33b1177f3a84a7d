//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

use super::nickname::generate_nickname;
use crate::script::density::DensityProfile;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_nickname")]
    pub nickname: String,
    #[serde(default = "default_ui")]
    pub ui: UiConfig,
    #[serde(default)]
    pub pacing: PacingConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Per-channel density overrides, keyed by channel name.
    #[serde(default)]
    pub density: Vec<DensityOverride>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            nickname: default_nickname(),
            ui: default_ui(),
            pacing: PacingConfig::default(),
            behavior: BehaviorConfig::default(),
            logging: LoggingConfig::default(),
            density: Vec::new(),
        }
    }
}

/// UI appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default = "default_max_scrollback")]
    pub max_scrollback: usize,
}

/// Playback pacing knobs, all in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacingConfig {
    /// Gap between connect banner lines.
    #[serde(default = "default_banner_line_min")]
    pub banner_line_min_ms: u64,
    #[serde(default = "default_banner_line_max")]
    pub banner_line_max_ms: u64,
    /// Pause after the banner before the connection reports up.
    #[serde(default = "default_connect_hold")]
    pub connect_hold_ms: u64,
    /// Delay before the first channel join.
    #[serde(default = "default_join_first")]
    pub join_first_ms: u64,
    /// Stagger between the remaining joins.
    #[serde(default = "default_join_stagger_min")]
    pub join_stagger_min_ms: u64,
    #[serde(default = "default_join_stagger_max")]
    pub join_stagger_max_ms: u64,
    /// Delay before the first replayed event in a channel.
    #[serde(default = "default_replay_initial")]
    pub replay_initial_ms: u64,
    /// Pause between the last event and the completion flag.
    #[serde(default = "default_replay_settle")]
    pub replay_settle_ms: u64,
    /// Gap band between replayed chat lines.
    #[serde(default = "default_chat_min")]
    pub chat_min_ms: u64,
    #[serde(default = "default_chat_max")]
    pub chat_max_ms: u64,
    /// Churn volume as a share of a channel's chat lines.
    #[serde(default = "default_churn_ratio")]
    pub churn_ratio: f64,
    /// Share of blend steps that favor chat over churn.
    #[serde(default = "default_chat_bias")]
    pub chat_bias: f64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            banner_line_min_ms: default_banner_line_min(),
            banner_line_max_ms: default_banner_line_max(),
            connect_hold_ms: default_connect_hold(),
            join_first_ms: default_join_first(),
            join_stagger_min_ms: default_join_stagger_min(),
            join_stagger_max_ms: default_join_stagger_max(),
            replay_initial_ms: default_replay_initial(),
            replay_settle_ms: default_replay_settle(),
            chat_min_ms: default_chat_min(),
            chat_max_ms: default_chat_max(),
            churn_ratio: default_churn_ratio(),
            chat_bias: default_chat_bias(),
        }
    }
}

/// Client behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    #[serde(default = "default_true")]
    pub bell_on_query: bool,
    #[serde(default = "default_true")]
    pub intro_chime: bool,
    #[serde(default = "default_quit_message")]
    pub quit_message: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            bell_on_query: true,
            intro_chime: true,
            quit_message: default_quit_message(),
        }
    }
}

/// Chat transcript logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_true")]
    pub log_channels: bool,
    #[serde(default)]
    pub log_queries: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            log_channels: true,
            log_queries: false,
        }
    }
}

/// One density override from the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DensityOverride {
    pub channel: String,
    #[serde(flatten)]
    pub profile: DensityProfile,
}

impl AppConfig {
    /// Density for a channel: config override first, then the built-in
    /// profile, then the quiet fallback.
    pub fn density_profile(&self, channel: &str) -> DensityProfile {
        self.density
            .iter()
            .find(|o| o.channel == channel)
            .map(|o| o.profile)
            .unwrap_or_else(|| crate::script::density::profile_for(channel))
    }

    /// Whether the channel has an authored or configured density profile.
    pub fn has_density_profile(&self, channel: &str) -> bool {
        self.density.iter().any(|o| o.channel == channel)
            || crate::script::density::has_profile(channel)
    }
}

fn default_nickname() -> String {
    generate_nickname()
}
fn default_true() -> bool {
    true
}
fn default_timestamp_format() -> String {
    "%H:%M".to_string()
}
fn default_max_scrollback() -> usize {
    10000
}
fn default_banner_line_min() -> u64 {
    60
}
fn default_banner_line_max() -> u64 {
    180
}
fn default_connect_hold() -> u64 {
    500
}
fn default_join_first() -> u64 {
    500
}
fn default_join_stagger_min() -> u64 {
    800
}
fn default_join_stagger_max() -> u64 {
    1200
}
fn default_replay_initial() -> u64 {
    200
}
fn default_replay_settle() -> u64 {
    500
}
fn default_chat_min() -> u64 {
    2000
}
fn default_chat_max() -> u64 {
    8000
}
fn default_churn_ratio() -> f64 {
    0.3
}
fn default_chat_bias() -> f64 {
    crate::script::blend::CHAT_BIAS
}
fn default_quit_message() -> String {
    "PAPATYA v7 - www.sibertr.online".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/papatya/logs".to_string()
}
fn default_ui() -> UiConfig {
    UiConfig {
        timestamp_format: default_timestamp_format(),
        max_scrollback: default_max_scrollback(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_pacing() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.pacing.chat_min_ms, 2000);
        assert_eq!(cfg.pacing.chat_max_ms, 8000);
        assert_eq!(cfg.pacing.replay_initial_ms, 200);
        assert!((cfg.pacing.chat_bias - 0.7).abs() < f64::EPSILON);
        assert!((cfg.pacing.churn_ratio - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            nickname = "DeLi_Kiz34"

            [pacing]
            chat_min_ms = 100
            "#,
        )
        .unwrap();
        assert_eq!(cfg.nickname, "DeLi_Kiz34");
        assert_eq!(cfg.pacing.chat_min_ms, 100);
        assert_eq!(cfg.pacing.chat_max_ms, 8000);
        assert!(cfg.behavior.bell_on_query);
    }

    #[test]
    fn density_override_parses() {
        let cfg: AppConfig = toml::from_str(
            r##"
            [[density]]
            channel = "#str_chat"
            join_rate_ms = 1000
            leave_rate_ms = 2000
            max_users = 10
            stable_lurkers = 5
            "##,
        )
        .unwrap();
        assert_eq!(cfg.density.len(), 1);
        assert_eq!(cfg.density[0].profile.max_users, 10);
    }
}

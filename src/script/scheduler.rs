//! Playback scheduling: the tasks that feed scripted events into the app
//! at human-looking intervals.
//!
//! One task drips the connect banner, one staggers the channel joins, and
//! one per channel walks its blended stream. All state mutation happens in
//! the main loop; tasks only sleep and send. `dispose` aborts everything
//! still running.

use std::time::Duration;

use rand::RngExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::app::event::AppEvent;
use crate::config::model::PacingConfig;
use crate::script::banner;
use crate::script::density::{self, DensityProfile};
use crate::script::record::{EventKind, EventRecord};

pub struct PlaybackScheduler {
    event_tx: mpsc::UnboundedSender<AppEvent>,
    pacing: PacingConfig,
    handles: Vec<JoinHandle<()>>,
}

impl PlaybackScheduler {
    pub fn new(event_tx: mpsc::UnboundedSender<AppEvent>, pacing: PacingConfig) -> Self {
        Self {
            event_tx,
            pacing,
            handles: Vec::new(),
        }
    }

    /// Drip the connect banner into the status window, then report the
    /// connection as up.
    pub fn start_connection(&mut self, nickname: String, server_name: String) {
        let tx = self.event_tx.clone();
        let pacing = self.pacing.clone();
        let handle = tokio::spawn(async move {
            let lines = banner::generate_banner(&nickname, &server_name);
            for line in lines {
                let gap = {
                    let mut rng = rand::rng();
                    rng.random_range(pacing.banner_line_min_ms..=pacing.banner_line_max_ms)
                };
                tokio::time::sleep(Duration::from_millis(gap)).await;
                if tx.send(AppEvent::BannerLine(line)).is_err() {
                    return;
                }
            }
            tokio::time::sleep(Duration::from_millis(pacing.connect_hold_ms)).await;
            let _ = tx.send(AppEvent::Connected);
        });
        self.handles.push(handle);
    }

    /// Join the configured channels one by one, first quickly, the rest
    /// with a human stagger.
    pub fn start_channel_joins(&mut self, channels: Vec<String>) {
        let tx = self.event_tx.clone();
        let pacing = self.pacing.clone();
        let handle = tokio::spawn(async move {
            for (index, channel) in channels.into_iter().enumerate() {
                let gap = if index == 0 {
                    pacing.join_first_ms
                } else {
                    let mut rng = rand::rng();
                    rng.random_range(pacing.join_stagger_min_ms..=pacing.join_stagger_max_ms)
                };
                tokio::time::sleep(Duration::from_millis(gap)).await;
                if tx.send(AppEvent::ChannelJoined { channel }).is_err() {
                    return;
                }
            }
        });
        self.handles.push(handle);
    }

    /// Play a channel's blended stream to the end, then flag completion
    /// after a short settle. Churn pacing follows the supplied profile.
    pub fn start_replay(
        &mut self,
        channel: String,
        profile: DensityProfile,
        stream: Vec<EventRecord>,
    ) {
        let tx = self.event_tx.clone();
        let pacing = self.pacing.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(pacing.replay_initial_ms)).await;
            for record in stream {
                let gap = gap_after(&record, &profile, &pacing);
                let event = AppEvent::Scripted {
                    channel: channel.clone(),
                    record: record.stamped_now(),
                };
                if tx.send(event).is_err() {
                    return;
                }
                tokio::time::sleep(Duration::from_millis(gap)).await;
            }
            tokio::time::sleep(Duration::from_millis(pacing.replay_settle_ms)).await;
            let _ = tx.send(AppEvent::ReplayComplete { channel });
        });
        self.handles.push(handle);
    }

    /// Abort every task still in flight.
    pub fn dispose(&mut self) {
        if !self.handles.is_empty() {
            tracing::debug!(tasks = self.handles.len(), "aborting playback tasks");
        }
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for PlaybackScheduler {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Gap to the next event, keyed by what just played: churn follows the
/// channel's density rates, chat falls in the configured band.
fn gap_after(record: &EventRecord, profile: &DensityProfile, pacing: &PacingConfig) -> u64 {
    match record.kind {
        EventKind::Login => density::churn_delay(profile, true),
        EventKind::Quit => density::churn_delay(profile, false),
        _ => {
            let mut rng = rand::rng();
            rng.random_range(pacing.chat_min_ms..=pacing.chat_max_ms)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pacing() -> PacingConfig {
        PacingConfig::default()
    }

    #[test]
    fn chat_gap_stays_in_band() {
        let record = EventRecord::chat("biri", "selam");
        let profile = density::profile_for("#str_chat");
        for _ in 0..100 {
            let gap = gap_after(&record, &profile, &pacing());
            assert!((2_000..=8_000).contains(&gap), "gap {} out of band", gap);
        }
    }

    #[test]
    fn churn_gap_follows_density_not_chat_band() {
        let join = EventRecord::login("biri", "PAPATYAv7@1.2.AAAA0000.sibertr.online", "#Webcam");
        let profile = density::profile_for("#Webcam");
        for _ in 0..50 {
            let gap = gap_after(&join, &profile, &pacing());
            assert!(gap >= 8_400, "join gap {} below jitter floor", gap);
        }
    }

    #[tokio::test]
    async fn replay_emits_stream_then_completion() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut fast = pacing();
        fast.replay_initial_ms = 0;
        fast.replay_settle_ms = 0;
        fast.chat_min_ms = 0;
        fast.chat_max_ms = 1;

        let mut scheduler = PlaybackScheduler::new(tx, fast);
        let stream = vec![
            EventRecord::chat("a", "bir"),
            EventRecord::chat("b", "iki"),
        ];
        scheduler.start_replay("#test".to_string(), density::FALLBACK, stream);

        let mut chats = 0;
        loop {
            match rx.recv().await {
                Some(AppEvent::Scripted { channel, .. }) => {
                    assert_eq!(channel, "#test");
                    chats += 1;
                }
                Some(AppEvent::ReplayComplete { channel }) => {
                    assert_eq!(channel, "#test");
                    break;
                }
                other => panic!("unexpected event {:?}", other),
            }
        }
        assert_eq!(chats, 2);
    }

    #[tokio::test]
    async fn dispose_stops_pending_tasks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut slow = pacing();
        slow.replay_initial_ms = 60_000;

        let mut scheduler = PlaybackScheduler::new(tx, slow);
        scheduler.start_replay(
            "#test".to_string(),
            density::FALLBACK,
            vec![EventRecord::chat("a", "bir")],
        );
        scheduler.dispose();

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(matches!(
            rx.try_recv(),
            Err(mpsc::error::TryRecvError::Empty | mpsc::error::TryRecvError::Disconnected)
        ));
    }
}

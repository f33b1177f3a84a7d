use std::collections::HashMap;

use chrono::Local;

use crate::config::AppConfig;
use crate::script::banner::{BannerLine, BannerTone};
use crate::script::data;
use crate::script::record::{EventKind, EventRecord};
use crate::script::roster::ChannelRoster;
use crate::store::session::SessionStore;
use crate::store::unseen::UnseenTracker;
use crate::store::KvStore;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BufferKey {
    Console,
    Channel(String),
    Query(String),
}

impl BufferKey {
    pub fn title(&self) -> &str {
        match self {
            BufferKey::Console => "Durum",
            BufferKey::Channel(name) => name,
            BufferKey::Query(nick) => nick,
        }
    }
}

/// One line in the status window.
#[derive(Debug, Clone)]
pub struct ConsoleLine {
    pub timestamp: String,
    pub text: String,
    pub tone: BannerTone,
}

/// A channel or query buffer holding scripted and typed events.
#[derive(Debug, Default)]
pub struct ChatBuffer {
    pub records: Vec<EventRecord>,
    pub scroll_offset: usize,
    pub replay_complete: bool,
}

impl ChatBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: EventRecord, max_scrollback: usize) {
        self.records.push(record);
        if self.records.len() > max_scrollback {
            self.records.remove(0);
            if self.scroll_offset > 0 {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
        }
    }
}

/// Where the client is in its scripted connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    ConnectDialog,
    Connecting,
    Connected,
}

/// State of the server-picker dialog shown before connecting.
#[derive(Debug)]
pub struct ConnectDialog {
    pub nickname: String,
    pub selected: usize,
}

impl ConnectDialog {
    pub fn new(nickname: String) -> Self {
        Self {
            nickname,
            selected: 0,
        }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % data::SERVER_CHOICES.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = if self.selected == 0 {
            data::SERVER_CHOICES.len() - 1
        } else {
            self.selected - 1
        };
    }

    pub fn chosen_server(&self) -> (&'static str, &'static str, u16) {
        data::SERVER_CHOICES[self.selected]
    }
}

#[derive(Debug)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
    pub history: Vec<String>,
    pub history_index: Option<usize>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            history: Vec::new(),
            history_index: None,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn take_text(&mut self) -> String {
        let text = self.text.clone();
        self.text.clear();
        self.cursor = 0;
        self.history_index = None;
        if !text.is_empty() {
            self.history.push(text.clone());
        }
        text
    }

    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let idx = match self.history_index {
            Some(i) if i > 0 => i - 1,
            Some(_) => return,
            None => self.history.len() - 1,
        };
        self.history_index = Some(idx);
        self.text = self.history[idx].clone();
        self.cursor = self.text.len();
    }

    pub fn history_down(&mut self) {
        match self.history_index {
            Some(i) if i + 1 < self.history.len() => {
                let idx = i + 1;
                self.history_index = Some(idx);
                self.text = self.history[idx].clone();
                self.cursor = self.text.len();
            }
            Some(_) => {
                self.history_index = None;
                self.text.clear();
                self.cursor = 0;
            }
            None => {}
        }
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    TabTree,
    MessageArea,
    Input,
    UserList,
}

pub struct AppState {
    pub config: AppConfig,
    pub phase: Phase,
    pub dialog: ConnectDialog,
    pub nickname: String,
    pub server_name: String,
    pub console: Vec<ConsoleLine>,
    pub buffers: HashMap<BufferKey, ChatBuffer>,
    pub tabs: Vec<BufferKey>,
    pub active_buffer: BufferKey,
    pub rosters: HashMap<String, ChannelRoster>,
    pub topics: HashMap<String, String>,
    pub input: InputState,
    pub focus: FocusPanel,
    pub unseen: UnseenTracker<Box<dyn KvStore>>,
    pub session: SessionStore<Box<dyn KvStore>>,
    /// Buffers whose tab label should blink.
    pub blinking: Vec<BufferKey>,
    pub blink_on: bool,
    tick_count: u64,
    /// Records appended this event, drained by the main loop for logging.
    pub new_records: Vec<(BufferKey, EventRecord)>,
    pub should_quit: bool,
    pub dirty: bool,
    pub pending_bell: bool,
    pub timestamp_format: String,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        unseen: UnseenTracker<Box<dyn KvStore>>,
        session: SessionStore<Box<dyn KvStore>>,
    ) -> Self {
        let nickname = session.nickname().unwrap_or_else(|| config.nickname.clone());
        let timestamp_format = config.ui.timestamp_format.clone();
        Self {
            config,
            phase: Phase::ConnectDialog,
            dialog: ConnectDialog::new(nickname.clone()),
            nickname,
            server_name: String::new(),
            console: Vec::new(),
            buffers: HashMap::new(),
            tabs: vec![BufferKey::Console],
            active_buffer: BufferKey::Console,
            rosters: HashMap::new(),
            topics: HashMap::new(),
            input: InputState::new(),
            focus: FocusPanel::Input,
            unseen,
            session,
            blinking: Vec::new(),
            blink_on: false,
            tick_count: 0,
            new_records: Vec::new(),
            should_quit: false,
            dirty: true,
            pending_bell: false,
            timestamp_format,
        }
    }

    fn now(&self) -> String {
        Local::now().format(&self.timestamp_format).to_string()
    }

    /// Leave the dialog and start the scripted connection.
    pub fn begin_connect(&mut self) {
        self.nickname = self.dialog.nickname.trim().to_string();
        if self.nickname.is_empty() {
            self.nickname = self.config.nickname.clone();
        }
        let (label, _, _) = self.dialog.chosen_server();
        self.server_name = label.to_string();
        let _ = self.session.set_nickname(&self.nickname);
        self.phase = Phase::Connecting;
        self.dirty = true;
    }

    pub fn push_banner_line(&mut self, line: BannerLine) {
        self.console.push(ConsoleLine {
            timestamp: self.now(),
            text: line.message,
            tone: line.tone,
        });
        self.dirty = true;
    }

    pub fn console_line(&mut self, tone: BannerTone, text: String) {
        self.console.push(ConsoleLine {
            timestamp: self.now(),
            text,
            tone,
        });
        self.dirty = true;
    }

    pub fn mark_connected(&mut self) {
        self.phase = Phase::Connected;
        // Reopen the private chats left open last time, in the background.
        for nick in self.session.user_tabs() {
            self.open_query(&nick, false);
        }
        self.dirty = true;
    }

    /// Open a channel tab: buffer, roster, topic, unseen tracking. The
    /// first channel becomes active; the rest start in the background as
    /// unseen.
    pub fn join_channel(&mut self, channel: &str) {
        let key = BufferKey::Channel(channel.to_string());
        if self.buffers.contains_key(&key) {
            return;
        }
        self.buffers.insert(key.clone(), ChatBuffer::new());
        self.tabs.push(key.clone());
        self.rosters.insert(
            channel.to_string(),
            ChannelRoster::new(channel, &data::authored_log(channel)),
        );
        self.topics
            .insert(channel.to_string(), data::channel_topic(channel).to_string());

        let first_channel = !self
            .tabs
            .iter()
            .any(|t| matches!(t, BufferKey::Channel(c) if c != channel));
        if first_channel {
            let _ = self.unseen.initialize_tracking(channel, 0);
            self.set_active_buffer(key);
        } else {
            let _ = self.unseen.initialize_unseen(channel);
        }
        self.dirty = true;
    }

    /// Open (or focus) a query tab for `nick`.
    pub fn open_query(&mut self, nick: &str, activate: bool) {
        let key = BufferKey::Query(nick.to_string());
        if !self.buffers.contains_key(&key) {
            self.buffers.insert(key.clone(), ChatBuffer::new());
            self.tabs.push(key.clone());
            let _ = self.unseen.initialize_tracking(nick, 0);
            self.persist_query_tabs();
        }
        if activate {
            self.set_active_buffer(key);
        }
        self.dirty = true;
    }

    pub fn close_buffer(&mut self, key: &BufferKey) {
        if *key == BufferKey::Console {
            return;
        }
        self.buffers.remove(key);
        self.tabs.retain(|t| t != key);
        self.blinking.retain(|t| t != key);
        if self.active_buffer == *key {
            let fallback = self
                .tabs
                .iter()
                .rev()
                .find(|t| matches!(t, BufferKey::Channel(_)))
                .cloned()
                .unwrap_or(BufferKey::Console);
            self.set_active_buffer(fallback);
        }
        if matches!(key, BufferKey::Query(_)) {
            self.persist_query_tabs();
        }
        self.dirty = true;
    }

    fn persist_query_tabs(&mut self) {
        let tabs: Vec<String> = self
            .tabs
            .iter()
            .filter_map(|t| match t {
                BufferKey::Query(nick) => Some(nick.clone()),
                _ => None,
            })
            .collect();
        let _ = self.session.set_user_tabs(&tabs);
    }

    /// Append a scripted event to its channel, updating roster and blink
    /// state.
    pub fn apply_scripted(&mut self, channel: &str, record: EventRecord) {
        if let Some(roster) = self.rosters.get_mut(channel) {
            roster.apply(&record);
        }
        let key = BufferKey::Channel(channel.to_string());
        self.append_record(&key, record);
    }

    /// Append a record to any buffer, handling scrollback, logging, and
    /// the unseen blink.
    pub fn append_record(&mut self, key: &BufferKey, record: EventRecord) {
        let max = self.config.ui.max_scrollback;
        let Some(buffer) = self.buffers.get_mut(key) else {
            return;
        };
        buffer.push(record.clone(), max);

        let is_active = self.active_buffer == *key;
        if is_active {
            let _ = self.unseen.mark_seen(key.title(), self.buffer_len(key));
        } else if record.kind == EventKind::Chat {
            let records = &self.buffers[key].records;
            if self.unseen.has_unseen(key.title(), records) && !self.blinking.contains(key) {
                self.blinking.push(key.clone());
            }
            if matches!(key, BufferKey::Query(_)) && self.config.behavior.bell_on_query {
                self.pending_bell = true;
            }
        }

        self.new_records.push((key.clone(), record));
        self.dirty = true;
    }

    /// A line the local user typed into the active buffer.
    pub fn self_message(&mut self, text: String) {
        let record = EventRecord::chat(self.nickname.clone(), text).stamped_now();
        let key = self.active_buffer.clone();
        self.append_record(&key, record);
    }

    pub fn replay_complete(&mut self, channel: &str) {
        let key = BufferKey::Channel(channel.to_string());
        if let Some(buffer) = self.buffers.get_mut(&key) {
            buffer.replay_complete = true;
        }
        self.dirty = true;
    }

    pub fn buffer_len(&self, key: &BufferKey) -> usize {
        self.buffers.get(key).map(|b| b.records.len()).unwrap_or(0)
    }

    pub fn set_active_buffer(&mut self, key: BufferKey) {
        if key != BufferKey::Console {
            let _ = self.unseen.mark_seen(key.title(), self.buffer_len(&key));
        }
        self.blinking.retain(|t| t != &key);
        self.active_buffer = key;
        self.dirty = true;
    }

    pub fn select_next_buffer(&mut self) {
        if self.tabs.is_empty() {
            return;
        }
        let idx = self
            .tabs
            .iter()
            .position(|t| *t == self.active_buffer)
            .unwrap_or(0);
        self.set_active_buffer(self.tabs[(idx + 1) % self.tabs.len()].clone());
    }

    pub fn select_prev_buffer(&mut self) {
        if self.tabs.is_empty() {
            return;
        }
        let idx = self
            .tabs
            .iter()
            .position(|t| *t == self.active_buffer)
            .unwrap_or(0);
        let prev = if idx == 0 { self.tabs.len() - 1 } else { idx - 1 };
        self.set_active_buffer(self.tabs[prev].clone());
    }

    /// Rename the local user, echoing the change into the active channel.
    pub fn change_nick(&mut self, new_nick: String) {
        let record = EventRecord::nick_change(self.nickname.clone(), new_nick.clone()).stamped_now();
        self.nickname = new_nick;
        let _ = self.session.set_nickname(&self.nickname);
        let key = self.active_buffer.clone();
        if matches!(key, BufferKey::Channel(_)) {
            self.append_record(&key, record);
        }
        self.dirty = true;
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Input => FocusPanel::TabTree,
            FocusPanel::TabTree => FocusPanel::MessageArea,
            FocusPanel::MessageArea => FocusPanel::UserList,
            FocusPanel::UserList => FocusPanel::Input,
        };
        self.dirty = true;
    }

    /// Advance the blink animation; only redraws while something blinks.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if !self.blinking.is_empty() && self.tick_count % 10 == 0 {
            self.blink_on = !self.blink_on;
            self.dirty = true;
        }
    }

    pub fn status_line(&self) -> String {
        match self.phase {
            Phase::ConnectDialog => format!("{} {}", data::SCRIPT_NAME, data::SCRIPT_VERSION),
            Phase::Connecting => format!("Bağlanıyor: {}...", self.server_name),
            Phase::Connected => {
                let users = match &self.active_buffer {
                    BufferKey::Channel(ch) => self
                        .rosters
                        .get(ch)
                        .map(|r| r.user_count(&self.nickname))
                        .unwrap_or(0),
                    _ => 0,
                };
                let idle = self
                    .buffers
                    .get(&self.active_buffer)
                    .map(|b| b.replay_complete)
                    .unwrap_or(false);
                if users > 0 {
                    let mut line = format!(
                        "{} @ {} | {} kişi",
                        self.nickname,
                        self.active_buffer.title(),
                        users
                    );
                    if idle {
                        line.push_str(" | sessiz");
                    }
                    line
                } else {
                    format!("{} @ {}", self.nickname, self.server_name)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn state() -> AppState {
        AppState::new(
            AppConfig::default(),
            UnseenTracker::new(Box::new(MemoryStore::new())),
            SessionStore::new(Box::new(MemoryStore::new())),
        )
    }

    fn connected_state() -> AppState {
        let mut s = state();
        s.begin_connect();
        s.mark_connected();
        for ch in data::CHANNELS {
            s.join_channel(ch);
        }
        s
    }

    #[test]
    fn first_channel_becomes_active_rest_stay_background() {
        let s = connected_state();
        assert_eq!(s.active_buffer, BufferKey::Channel("#str_chat".into()));
        assert_eq!(s.tabs.len(), 1 + data::CHANNELS.len());
        assert_eq!(s.tabs[0], BufferKey::Console);
    }

    #[test]
    fn background_chat_blinks_active_chat_does_not() {
        let mut s = connected_state();
        s.apply_scripted("#str_chat", EventRecord::chat("biri", "selam"));
        assert!(s.blinking.is_empty());

        s.apply_scripted("#PAPATYA", EventRecord::chat("biri", "selam"));
        assert!(s.blinking.contains(&BufferKey::Channel("#PAPATYA".into())));
    }

    #[test]
    fn background_churn_never_blinks() {
        let mut s = connected_state();
        s.apply_scripted(
            "#Webcam",
            EventRecord::login("biri", "PAPATYAv7@1.2.AAAA0000.sibertr.online", "#Webcam"),
        );
        assert!(s.blinking.is_empty());
    }

    #[test]
    fn switching_to_a_blinking_tab_clears_it() {
        let mut s = connected_state();
        s.apply_scripted("#PAPATYA", EventRecord::chat("biri", "selam"));
        let key = BufferKey::Channel("#PAPATYA".into());
        assert!(s.blinking.contains(&key));

        s.set_active_buffer(key.clone());
        assert!(s.blinking.is_empty());
        s.apply_scripted("#str_chat", EventRecord::chat("biri", "selam"));
        assert!(s.blinking.contains(&BufferKey::Channel("#str_chat".into())));
    }

    #[test]
    fn closing_active_query_falls_back_to_a_channel() {
        let mut s = connected_state();
        s.open_query("Gezgin", true);
        assert_eq!(s.active_buffer, BufferKey::Query("Gezgin".into()));

        s.close_buffer(&BufferKey::Query("Gezgin".into()));
        assert!(matches!(s.active_buffer, BufferKey::Channel(_)));
        assert_eq!(s.session.user_tabs(), Vec::<String>::new());
    }

    #[test]
    fn query_tabs_persist_to_session() {
        let mut s = connected_state();
        s.open_query("Gezgin", false);
        s.open_query("AzrA", false);
        assert_eq!(s.session.user_tabs(), vec!["Gezgin", "AzrA"]);
    }

    #[test]
    fn saved_query_tabs_reopen_on_connect() {
        let mut session_store = MemoryStore::new();
        session_store
            .set("papatya_user_tabs", r#"["Gezgin","AzrA"]"#)
            .unwrap();
        let mut s = AppState::new(
            AppConfig::default(),
            UnseenTracker::new(Box::new(MemoryStore::new())),
            SessionStore::new(Box::new(session_store)),
        );
        s.begin_connect();
        s.mark_connected();
        assert!(s.tabs.contains(&BufferKey::Query("Gezgin".into())));
        assert!(s.tabs.contains(&BufferKey::Query("AzrA".into())));
        // Restored tabs stay in the background.
        assert_eq!(s.active_buffer, BufferKey::Console);
    }

    #[test]
    fn change_nick_echoes_into_channel_and_session() {
        let mut s = connected_state();
        let old = s.nickname.clone();
        s.change_nick("YeniBen".into());
        assert_eq!(s.session.nickname().as_deref(), Some("YeniBen"));
        let buf = &s.buffers[&BufferKey::Channel("#str_chat".into())];
        let last = buf.records.last().unwrap();
        assert_eq!(last.kind, EventKind::NickChange);
        assert_eq!(last.user, old);
    }

    #[test]
    fn scrollback_is_capped() {
        let mut s = connected_state();
        s.config.ui.max_scrollback = 5;
        for i in 0..10 {
            s.apply_scripted("#str_chat", EventRecord::chat("biri", format!("m{}", i)));
        }
        let buf = &s.buffers[&BufferKey::Channel("#str_chat".into())];
        assert_eq!(buf.records.len(), 5);
        assert_eq!(buf.records[0].message, "m5");
    }

    #[test]
    fn tick_animates_only_while_blinking() {
        let mut s = connected_state();
        s.dirty = false;
        for _ in 0..20 {
            s.tick();
        }
        assert!(!s.dirty);

        s.apply_scripted("#PAPATYA", EventRecord::chat("biri", "selam"));
        s.dirty = false;
        let before = s.blink_on;
        for _ in 0..10 {
            s.tick();
        }
        assert!(s.dirty);
        assert_ne!(s.blink_on, before);
    }
}

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::script::banner::BannerTone;
use crate::script::record::EventRecord;
use crate::script::{data, whois};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::BannerLine(line) => {
            state.push_banner_line(line);
            vec![]
        }
        AppEvent::Connected => {
            state.mark_connected();
            vec![Action::StartChannelJoins {
                channels: data::CHANNELS.iter().map(|c| c.to_string()).collect(),
            }]
        }
        AppEvent::ChannelJoined { channel } => {
            state.join_channel(&channel);
            state.console_line(BannerTone::Green, format!("* Giriş: {}", channel));
            vec![Action::StartReplay { channel }]
        }
        AppEvent::Scripted { channel, record } => {
            state.apply_scripted(&channel, record);
            vec![]
        }
        AppEvent::ReplayComplete { channel } => {
            state.replay_complete(&channel);
            vec![]
        }
        AppEvent::Tick => {
            state.tick();
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    if state.phase == Phase::ConnectDialog {
        return handle_dialog_key(state, key);
    }

    // Alt+1..9 jumps straight to a tab
    if key.modifiers.contains(KeyModifiers::ALT) {
        if let KeyCode::Char(c @ '1'..='9') = key.code {
            let idx = c as usize - '1' as usize;
            if let Some(tab) = state.tabs.get(idx).cloned() {
                state.set_active_buffer(tab);
            }
            return vec![];
        }
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('n') => {
                state.select_next_buffer();
                return vec![];
            }
            KeyCode::Char('p') => {
                state.select_prev_buffer();
                return vec![];
            }
            _ => {}
        }
    }

    // Tab to cycle focus (when not in input)
    if key.code == KeyCode::Tab && state.focus != FocusPanel::Input {
        state.cycle_focus();
        return vec![];
    }

    match state.focus {
        FocusPanel::Input => handle_input_key(state, key),
        FocusPanel::MessageArea => handle_message_key(state, key),
        FocusPanel::TabTree => handle_tree_key(state, key),
        FocusPanel::UserList => handle_user_list_key(state, key),
    }
}

fn handle_dialog_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up => {
            state.dialog.select_prev();
            vec![]
        }
        KeyCode::Down => {
            state.dialog.select_next();
            vec![]
        }
        KeyCode::Backspace => {
            state.dialog.nickname.pop();
            vec![]
        }
        KeyCode::Enter => {
            state.begin_connect();
            vec![Action::StartConnect {
                nickname: state.nickname.clone(),
                server_name: state.server_name.clone(),
            }]
        }
        KeyCode::Esc => vec![Action::Quit],
        KeyCode::Char(c) => {
            if state.dialog.nickname.len() < 24 {
                state.dialog.nickname.push(c);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_input_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => {
            let text = state.input.take_text();
            if text.is_empty() {
                return vec![];
            }
            if text.starts_with('/') {
                return handle_command(state, &text);
            }
            if state.active_buffer == BufferKey::Console {
                state.console_line(
                    BannerTone::Red,
                    "Durum penceresine mesaj yazılamaz.".to_string(),
                );
                return vec![];
            }
            state.self_message(text);
            vec![]
        }
        KeyCode::Backspace => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                state.input.delete_word_back();
            } else {
                state.input.delete_back();
            }
            vec![]
        }
        KeyCode::Delete => {
            state.input.delete_forward();
            vec![]
        }
        KeyCode::Left => {
            state.input.move_left();
            vec![]
        }
        KeyCode::Right => {
            state.input.move_right();
            vec![]
        }
        KeyCode::Home => {
            state.input.move_home();
            vec![]
        }
        KeyCode::End => {
            state.input.move_end();
            vec![]
        }
        KeyCode::Up => {
            state.input.history_up();
            vec![]
        }
        KeyCode::Down => {
            state.input.history_down();
            vec![]
        }
        KeyCode::Tab => {
            if state.input.text.is_empty() {
                state.cycle_focus();
            } else if !state.input.text.starts_with('/') {
                try_nick_completion(state);
            }
            vec![]
        }
        KeyCode::PageUp => {
            scroll_up(state);
            vec![]
        }
        KeyCode::PageDown => {
            scroll_down(state);
            vec![]
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'a' => state.input.move_home(),
                    'e' => state.input.move_end(),
                    'w' => state.input.delete_word_back(),
                    'u' => {
                        state.input.text.clear();
                        state.input.cursor = 0;
                    }
                    _ => {}
                }
            } else {
                state.input.insert_char(c);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_message_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::PageUp | KeyCode::Up => {
            scroll_up(state);
            vec![]
        }
        KeyCode::PageDown | KeyCode::Down => {
            scroll_down(state);
            vec![]
        }
        KeyCode::Char(c) => {
            // Start typing: switch to input
            state.focus = FocusPanel::Input;
            state.input.insert_char(c);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_tree_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up => {
            state.select_prev_buffer();
            vec![]
        }
        KeyCode::Down => {
            state.select_next_buffer();
            vec![]
        }
        _ => vec![],
    }
}

fn handle_user_list_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => {
            // The list has no cursor of its own; open a query with the
            // first visible user.
            if let BufferKey::Channel(ref channel) = state.active_buffer {
                let channel = channel.clone();
                let nickname = state.nickname.clone();
                let first = state
                    .rosters
                    .get(&channel)
                    .and_then(|r| r.visible_users(&nickname).first().map(|u| u.nick.clone()));
                if let Some(nick) = first {
                    if nick != state.nickname {
                        state.open_query(&nick, true);
                    }
                }
            }
            vec![]
        }
        _ => vec![],
    }
}

fn scroll_up(state: &mut AppState) {
    let key = state.active_buffer.clone();
    if let Some(buf) = state.buffers.get_mut(&key) {
        let max_scroll = buf.records.len().saturating_sub(1);
        buf.scroll_offset = (buf.scroll_offset + 5).min(max_scroll);
        state.dirty = true;
    }
}

fn scroll_down(state: &mut AppState) {
    let key = state.active_buffer.clone();
    if let Some(buf) = state.buffers.get_mut(&key) {
        buf.scroll_offset = buf.scroll_offset.saturating_sub(5);
        state.dirty = true;
    }
}

fn try_nick_completion(state: &mut AppState) {
    let word_start = state.input.text[..state.input.cursor]
        .rfind(' ')
        .map(|i| i + 1)
        .unwrap_or(0);
    let partial = state.input.text[word_start..state.input.cursor].to_string();
    if partial.is_empty() {
        return;
    }

    let BufferKey::Channel(ref channel) = state.active_buffer else {
        return;
    };
    let Some(roster) = state.rosters.get(channel) else {
        return;
    };
    let partial_lower = partial.to_lowercase();
    let Some(nick) = roster
        .visible_users(&state.nickname)
        .into_iter()
        .map(|u| u.nick)
        .find(|n| n.to_lowercase().starts_with(&partial_lower))
    else {
        return;
    };

    let completion = if word_start == 0 {
        format!("{}: ", nick)
    } else {
        format!("{} ", nick)
    };
    let new_text = format!(
        "{}{}{}",
        &state.input.text[..word_start],
        completion,
        &state.input.text[state.input.cursor..]
    );
    state.input.cursor = word_start + completion.len();
    state.input.text = new_text;
}

fn handle_command(state: &mut AppState, text: &str) -> Vec<Action> {
    let mut parts = text[1..].splitn(2, ' ');
    let cmd = parts.next().unwrap_or("").to_lowercase();
    let rest = parts.next().unwrap_or("").trim();

    match cmd.as_str() {
        "nick" => {
            if rest.is_empty() {
                state.console_line(BannerTone::Red, "Kullanım: /nick <rumuz>".to_string());
            } else {
                let nick = rest.split_whitespace().next().unwrap_or(rest).to_string();
                state.change_nick(nick);
            }
            vec![]
        }
        "query" | "q" => {
            if rest.is_empty() {
                state.console_line(BannerTone::Red, "Kullanım: /query <rumuz>".to_string());
            } else {
                let nick = rest.split_whitespace().next().unwrap_or(rest).to_string();
                state.open_query(&nick, true);
            }
            vec![]
        }
        "close" => {
            let key = state.active_buffer.clone();
            state.close_buffer(&key);
            vec![]
        }
        "clear" => {
            let key = state.active_buffer.clone();
            if key == BufferKey::Console {
                state.console.clear();
            } else if let Some(buf) = state.buffers.get_mut(&key) {
                buf.records.clear();
                buf.scroll_offset = 0;
            }
            state.dirty = true;
            vec![]
        }
        "me" => {
            if rest.is_empty() || state.active_buffer == BufferKey::Console {
                return vec![];
            }
            let record =
                EventRecord::chat("*", format!("{} {}", state.nickname, rest)).stamped_now();
            let key = state.active_buffer.clone();
            state.append_record(&key, record);
            vec![]
        }
        "whois" => {
            if rest.is_empty() {
                state.console_line(BannerTone::Red, "Kullanım: /whois <rumuz>".to_string());
                return vec![];
            }
            let nick = rest.split_whitespace().next().unwrap_or(rest);
            let channels: Vec<String> = state
                .rosters
                .iter()
                .filter(|(_, roster)| {
                    roster
                        .visible_users(&state.nickname)
                        .iter()
                        .any(|u| u.nick.eq_ignore_ascii_case(nick))
                })
                .map(|(channel, _)| channel.clone())
                .collect();
            let info = whois::whois_info(nick, channels);
            for line in info.console_lines() {
                state.console_line(BannerTone::Navy, line);
            }
            state.set_active_buffer(BufferKey::Console);
            vec![]
        }
        "help" => {
            let help = [
                "Komutlar:",
                "  /nick <rumuz>    — Rumuz değiştir",
                "  /query <rumuz>   — Özel sohbet aç",
                "  /close           — Aktif sekmeyi kapat",
                "  /clear           — Pencereyi temizle",
                "  /me <metin>      — Eylem mesajı",
                "  /whois <rumuz>   — Kullanıcı bilgisi",
                "  /quit            — Çıkış",
                "",
                "Tuşlar: Tab odak değiştirir, Alt+1..9 sekme seçer,",
                "Ctrl+N/P sekmeler arasında gezer, PageUp/Down kaydırır.",
            ];
            for line in help {
                state.console_line(BannerTone::Gray, line.to_string());
            }
            vec![]
        }
        "quit" | "exit" => vec![Action::Quit],
        _ => {
            state.console_line(BannerTone::Red, format!("Bilinmeyen komut: /{}", cmd));
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::store::session::SessionStore;
    use crate::store::unseen::UnseenTracker;
    use crate::store::MemoryStore;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

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

    fn press(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }))
    }

    fn type_line(s: &mut AppState, line: &str) -> Vec<Action> {
        for c in line.chars() {
            handle_event(s, press(KeyCode::Char(c)));
        }
        handle_event(s, press(KeyCode::Enter))
    }

    #[test]
    fn dialog_enter_starts_connection() {
        let mut s = state();
        handle_event(&mut s, press(KeyCode::Down));
        let actions = handle_event(&mut s, press(KeyCode::Enter));
        assert_eq!(s.phase, Phase::Connecting);
        assert!(matches!(actions[0], Action::StartConnect { .. }));
    }

    #[test]
    fn connected_event_kicks_off_channel_joins() {
        let mut s = state();
        s.begin_connect();
        let actions = handle_event(&mut s, AppEvent::Connected);
        assert_eq!(s.phase, Phase::Connected);
        assert_eq!(
            actions,
            vec![Action::StartChannelJoins {
                channels: data::CHANNELS.iter().map(|c| c.to_string()).collect(),
            }]
        );
    }

    #[test]
    fn channel_joined_starts_that_replay() {
        let mut s = state();
        s.begin_connect();
        s.mark_connected();
        let actions = handle_event(
            &mut s,
            AppEvent::ChannelJoined {
                channel: "#str_chat".into(),
            },
        );
        assert_eq!(
            actions,
            vec![Action::StartReplay {
                channel: "#str_chat".into()
            }]
        );
        assert!(s
            .buffers
            .contains_key(&BufferKey::Channel("#str_chat".into())));
    }

    #[test]
    fn plain_text_lands_in_active_channel() {
        let mut s = connected_state();
        type_line(&mut s, "selam millet");
        let buf = &s.buffers[&BufferKey::Channel("#str_chat".into())];
        let last = buf.records.last().unwrap();
        assert_eq!(last.message, "selam millet");
        assert_eq!(last.user, s.nickname);
    }

    #[test]
    fn query_command_opens_and_close_returns() {
        let mut s = connected_state();
        type_line(&mut s, "/query Gezgin");
        assert_eq!(s.active_buffer, BufferKey::Query("Gezgin".into()));

        type_line(&mut s, "/close");
        assert!(matches!(s.active_buffer, BufferKey::Channel(_)));
    }

    #[test]
    fn me_command_uses_star_speaker() {
        let mut s = connected_state();
        type_line(&mut s, "/me dans ediyor");
        let buf = &s.buffers[&BufferKey::Channel("#str_chat".into())];
        let last = buf.records.last().unwrap();
        assert_eq!(last.user, "*");
        assert!(last.message.ends_with("dans ediyor"));
    }

    #[test]
    fn whois_prints_to_console() {
        let mut s = connected_state();
        let before = s.console.len();
        type_line(&mut s, "/whois bLueStar");
        assert_eq!(s.active_buffer, BufferKey::Console);
        assert!(s.console.len() >= before + 6);
        assert!(s.console.iter().any(|l| l.text.contains("bLueStar")));
    }

    #[test]
    fn quit_command_yields_quit_action() {
        let mut s = connected_state();
        let actions = type_line(&mut s, "/quit");
        assert_eq!(actions, vec![Action::Quit]);
    }

    #[test]
    fn unknown_command_reports_error() {
        let mut s = connected_state();
        type_line(&mut s, "/yok");
        assert!(s
            .console
            .iter()
            .any(|l| l.text.contains("Bilinmeyen komut")));
    }

    #[test]
    fn nick_completion_matches_roster() {
        let mut s = connected_state();
        for c in "bLu".chars() {
            handle_event(&mut s, press(KeyCode::Char(c)));
        }
        handle_event(&mut s, press(KeyCode::Tab));
        assert_eq!(s.input.text, "bLueStar: ");
    }
}

use crate::app::state::*;
use crate::script::record::{EventKind, EventRecord};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::MessageArea;
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(Theme::panel_bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.active_buffer == BufferKey::Console {
        render_console(frame, inner, state);
        return;
    }

    let Some(buf) = state.buffers.get(&state.active_buffer) else {
        return;
    };

    let available_height = inner.height as usize;
    let total = buf.records.len();

    // Compute visible range with scroll offset
    let end = total.saturating_sub(buf.scroll_offset);
    let start = end.saturating_sub(available_height);

    let lines: Vec<Line> = buf
        .records
        .iter()
        .skip(start)
        .take(end - start)
        .map(|record| format_record(record, &state.nickname))
        .collect();

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);

    // Scrollbar
    if total > available_height {
        let mut scrollbar_state =
            ScrollbarState::new(total.saturating_sub(available_height)).position(start);

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .thumb_symbol("┃")
            .track_symbol(Some("│"))
            .thumb_style(Theme::scrollbar_thumb())
            .track_style(Theme::scrollbar_track());

        frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}

fn render_console(frame: &mut Frame, area: Rect, state: &AppState) {
    let available_height = area.height as usize;
    let total = state.console.len();
    let start = total.saturating_sub(available_height);

    let lines: Vec<Line> = state.console[start..]
        .iter()
        .map(|line| {
            Line::from(vec![
                Span::styled(format!("[{}] ", line.timestamp), Theme::timestamp()),
                Span::styled(
                    line.text.clone(),
                    Style::default().fg(Theme::tone_color(line.tone)),
                ),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn format_record<'a>(record: &EventRecord, our_nick: &str) -> Line<'a> {
    let ts = Span::styled(format!("[{}] ", record.time), Theme::timestamp());

    match record.kind {
        EventKind::Chat => {
            if record.user == "*" {
                // /me action line
                return Line::from(vec![
                    ts,
                    Span::styled(
                        format!("* {}", record.message),
                        Theme::nick_change_message(),
                    ),
                ]);
            }
            let nick_style = if record.user == our_nick {
                Theme::nick_self()
            } else {
                Theme::nick_other()
            };
            Line::from(vec![
                ts,
                Span::styled(format!("{}: ", record.user), nick_style),
                Span::styled(record.message.clone(), Theme::message_text()),
            ])
        }
        EventKind::Login => Line::from(vec![
            ts,
            Span::styled(
                format!(
                    "*** Giriş: {} ({}) {}",
                    record.user,
                    record.hostmask.as_deref().unwrap_or(""),
                    record.channel.as_deref().unwrap_or(""),
                ),
                Theme::login_message(),
            ),
        ]),
        EventKind::Quit => Line::from(vec![
            ts,
            Span::styled(
                format!(
                    "*** Çıkış: {} ({})",
                    record.user,
                    record.hostmask.as_deref().unwrap_or(""),
                ),
                Theme::quit_message(),
            ),
        ]),
        EventKind::NickChange => Line::from(vec![
            ts,
            Span::styled(
                format!(
                    "* {} nickini {} olarak değiştirdi.",
                    record.user,
                    record.new_nick.as_deref().unwrap_or(""),
                ),
                Theme::nick_change_message(),
            ),
        ]),
    }
}

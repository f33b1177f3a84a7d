use crate::app::state::*;
use crate::script::data;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let bg = Style::default().bg(Theme::BG_ELEVATED);

    let line = match &state.active_buffer {
        BufferKey::Channel(channel) => {
            let topic = state
                .topics
                .get(channel)
                .map(|t| t.as_str())
                .unwrap_or("");
            Line::from(vec![
                Span::styled(
                    format!(" {} ", channel),
                    Style::default()
                        .fg(Theme::NAVY)
                        .bg(Theme::BG_ELEVATED)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "│ ",
                    Style::default().fg(Theme::BORDER_DIM).bg(Theme::BG_ELEVATED),
                ),
                Span::styled(
                    topic.to_string(),
                    Style::default()
                        .fg(Theme::TEXT_PRIMARY)
                        .bg(Theme::BG_ELEVATED),
                ),
            ])
        }
        BufferKey::Query(nick) => Line::from(vec![
            Span::styled(
                " → ",
                Style::default()
                    .fg(Theme::ACCENT_BLUE)
                    .bg(Theme::BG_ELEVATED)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                nick.clone(),
                Style::default()
                    .fg(Theme::ACCENT_BLUE)
                    .bg(Theme::BG_ELEVATED)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        BufferKey::Console => Line::from(vec![
            Span::styled(
                format!(" {} {} ", data::SCRIPT_NAME, data::SCRIPT_VERSION),
                Style::default()
                    .fg(Theme::NAVY)
                    .bg(Theme::BG_ELEVATED)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "│ ",
                Style::default().fg(Theme::BORDER_DIM).bg(Theme::BG_ELEVATED),
            ),
            Span::styled(
                "www.sibertr.online",
                Style::default()
                    .fg(Theme::TEXT_SECONDARY)
                    .bg(Theme::BG_ELEVATED),
            ),
        ]),
    };

    let paragraph = Paragraph::new(line).style(bg);
    frame.render_widget(paragraph, area);
}

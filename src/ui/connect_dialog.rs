use crate::app::state::AppState;
use crate::script::data;
use crate::ui::{layout, theme::Theme};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};

/// The PAPATYA connect dialog: nickname on top, server picker below.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(Theme::BG_ELEVATED)),
        area,
    );

    let height = (data::SERVER_CHOICES.len() as u16 + 7).min(area.height);
    let dialog = layout::centered_rect(52, height, area);
    frame.render_widget(Clear, dialog);

    let block = Block::default()
        .title(format!(" {} {} ", data::SCRIPT_NAME, data::SCRIPT_VERSION))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Theme::border_focused())
        .style(Theme::panel_bg());

    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Nickname row
            Constraint::Length(1), // Spacer
            Constraint::Min(3),    // Server list
            Constraint::Length(1), // Hint row
        ])
        .split(inner);

    let nick_line = Line::from(vec![
        Span::styled(
            " Rumuz: ",
            Style::default().fg(Theme::NAVY).add_modifier(Modifier::BOLD),
        ),
        Span::styled(state.dialog.nickname.as_str(), Theme::input_text()),
        Span::styled("▏", Style::default().fg(Theme::ACCENT_BLUE)),
    ]);
    frame.render_widget(Paragraph::new(nick_line), chunks[0]);

    let items: Vec<ListItem> = data::SERVER_CHOICES
        .iter()
        .enumerate()
        .map(|(i, (label, host, port))| {
            let selected = i == state.dialog.selected;
            let marker = if selected { " ▸ " } else { "   " };
            let style = if selected {
                Theme::tab_active()
            } else {
                Theme::tab_normal()
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Theme::ACCENT_BLUE)),
                Span::styled(format!("{:<18}", label), style),
                Span::styled(
                    format!("{}:{}", host, port),
                    Style::default().fg(Theme::TEXT_MUTED),
                ),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items), chunks[2]);

    frame.render_widget(
        Paragraph::new(Span::styled(
            " ↑/↓ sunucu seç · Enter bağlan · Esc çıkış",
            Style::default().fg(Theme::TEXT_MUTED),
        )),
        chunks[3],
    );
}

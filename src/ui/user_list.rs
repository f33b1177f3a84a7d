use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::UserList;
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let mut items: Vec<ListItem> = Vec::new();
    let mut user_count = 0usize;

    if let BufferKey::Channel(ref channel) = state.active_buffer {
        if let Some(roster) = state.rosters.get(channel) {
            let users = roster.visible_users(&state.nickname);
            user_count = users.len();

            for user in users {
                let color = Theme::op_color(user.op);
                let prefix = user.op.map(|c| c.to_string()).unwrap_or_default();
                let style = if user.nick == state.nickname {
                    Theme::nick_self()
                } else {
                    Style::default().fg(color)
                };
                items.push(ListItem::new(Line::from(vec![
                    Span::styled(
                        format!(" {:1} ", prefix),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(user.nick, style),
                ])));
            }
        }
    }

    let title = if user_count > 0 {
        format!(" {} kişi ", user_count)
    } else {
        " Kullanıcılar ".to_string()
    };

    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(Theme::panel_bg());

    if items.is_empty() {
        items.push(ListItem::new(Span::styled(
            " —",
            Style::default().fg(Theme::TEXT_MUTED),
        )));
    }

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

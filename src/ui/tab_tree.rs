use crate::app::state::*;
use crate::script::data;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::TabTree;
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .title(format!(" {} ", data::SERVER_NAME))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(Theme::panel_bg());

    let mut items: Vec<ListItem> = Vec::new();

    for (i, key) in state.tabs.iter().enumerate() {
        let is_active = state.active_buffer == *key;
        let is_blinking = state.blinking.contains(key);

        let style = if is_active {
            Theme::tab_active()
        } else if is_blinking && state.blink_on {
            Theme::tab_blink()
        } else {
            Theme::tab_normal()
        };

        let spans = match key {
            BufferKey::Console => vec![
                Span::styled(" ◆ ", Style::default().fg(Theme::NAVY)),
                Span::styled(key.title().to_string(), style),
            ],
            _ => {
                let is_last = i == state.tabs.len() - 1;
                let prefix = if is_last { " └─" } else { " ├─" };
                vec![
                    Span::styled(prefix, Style::default().fg(Theme::BORDER_DIM)),
                    Span::styled(key.title().to_string(), style),
                ]
            }
        };
        items.push(ListItem::new(Line::from(spans)));
    }

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

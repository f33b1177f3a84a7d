use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub tab_tree: Rect,
    pub user_list: Rect,
    pub topic_bar: Rect,
    pub message_area: Rect,
    pub input_box: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Horizontal: tab tree | middle | user list
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20), // Tab tree
            Constraint::Min(30),    // Middle content
            Constraint::Length(20), // User list
        ])
        .split(content);

    let tab_tree = h_chunks[0];
    let middle = h_chunks[1];
    let user_list = h_chunks[2];

    // Middle: topic bar | messages | input
    let middle_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Topic bar
            Constraint::Min(5),    // Messages
            Constraint::Length(3), // Input box
        ])
        .split(middle);

    let topic_bar = middle_chunks[0];
    let message_area = middle_chunks[1];
    let input_box = middle_chunks[2];

    AppLayout {
        tab_tree,
        user_list,
        topic_bar,
        message_area,
        input_box,
        status_bar,
    }
}

/// Centered rect for the connect dialog.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

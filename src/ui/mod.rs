mod connect_dialog;
mod input_box;
mod layout;
mod message_area;
mod status_bar;
mod tab_tree;
mod theme;
mod topic_bar;
mod user_list;

use crate::app::state::{AppState, Phase};
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    if state.phase == Phase::ConnectDialog {
        connect_dialog::render(frame, state);
        return;
    }

    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    tab_tree::render(frame, app_layout.tab_tree, state);
    topic_bar::render(frame, app_layout.topic_bar, state);
    message_area::render(frame, app_layout.message_area, state);
    input_box::render(frame, app_layout.input_box, state);
    user_list::render(frame, app_layout.user_list, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

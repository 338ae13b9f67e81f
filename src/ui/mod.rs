mod button_view;
mod console_panel;
pub mod layout;
mod paragraph_view;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let app_layout = layout::compute_layout(frame.area());

    paragraph_view::render(frame, app_layout.paragraph, state);
    button_view::render(frame, app_layout.buttons, state);
    console_panel::render(frame, app_layout.console, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

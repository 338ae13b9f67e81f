use crate::app::state::AppState;
use crate::ui::layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let buttons: Vec<_> = state.page.document().buttons().cloned().collect();
    let labels: Vec<&str> = buttons.iter().map(|b| b.label.as_str()).collect();

    for (rect, button) in layout::button_rects(area, &labels).into_iter().zip(&buttons) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::button_border());
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let label = Paragraph::new(Line::from(Span::styled(
            button.label.as_str(),
            Theme::button_label(),
        )))
        .centered();
        frame.render_widget(label, inner);
    }
}

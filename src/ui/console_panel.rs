use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Console ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Most recent lines that fit, oldest at the top
    let console = state.page.console();
    let visible = inner.height as usize;
    let start = console.len().saturating_sub(visible);

    let lines: Vec<Line> = console.lines()[start..]
        .iter()
        .map(|l| {
            Line::from(vec![
                Span::styled(format!("{} ", l.timestamp), Theme::timestamp()),
                Span::styled(l.text.clone(), Theme::console_text()),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

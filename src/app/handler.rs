use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::page::BUTTON_ID;
use crate::ui::layout;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Position;
use tracing::{debug, warn};

pub fn handle_event(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => state.expire_status(),
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => state.set_viewport(width, height),
        _ => {}
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL)
        | (KeyCode::Char('q'), _)
        | (KeyCode::Esc, _) => {
            state.should_quit = true;
        }
        // Keyboard equivalent of clicking the page's button
        (KeyCode::Enter, _) | (KeyCode::Char(' '), _) => activate(state, BUTTON_ID),
        _ => {}
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let pos = Position::new(mouse.column, mouse.row);
    if let Some(id) = button_at(state, pos) {
        activate(state, &id);
    }
}

/// Hit test a terminal position against the rendered button row.
fn button_at(state: &AppState, pos: Position) -> Option<String> {
    let row = state.layout().buttons;
    let buttons: Vec<_> = state.page.document().buttons().cloned().collect();
    let labels: Vec<&str> = buttons.iter().map(|b| b.label.as_str()).collect();
    layout::button_rects(row, &labels)
        .into_iter()
        .zip(&buttons)
        .find(|(rect, _)| rect.contains(pos))
        .map(|(_, button)| button.id.clone())
}

fn activate(state: &mut AppState, id: &str) {
    debug!(target: "input", "activation on \"{}\"", id);
    match state.page.dispatch_click(id) {
        Ok(()) => state.clicks += 1,
        Err(e) => {
            warn!("click dispatch failed: {}", e);
            state.set_status(format!("Click failed: {}", e));
        }
    }
    state.dirty = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::page::{markup, Console, Page, CHANGED_CONTENT, PARAGRAPH_ID};

    fn test_state() -> AppState {
        let config = AppConfig::default();
        let console = Console::new(100, "%H:%M:%S");
        let page = Page::initialize(markup::default_document(), console).unwrap();
        let mut state = AppState::new(config, page);
        state.set_viewport(80, 24);
        state
    }

    fn paragraph_text(state: &AppState) -> String {
        state
            .page
            .document()
            .paragraph(PARAGRAPH_ID)
            .unwrap()
            .text()
            .to_string()
    }

    fn click_at(column: u16, row: u16) -> AppEvent {
        AppEvent::Terminal(CEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    #[test]
    fn test_click_on_button_changes_paragraph() {
        let mut state = test_state();
        let labels = vec!["change content"];
        let rect = layout::button_rects(state.layout().buttons, &labels)[0];
        let (x, y) = (rect.x + rect.width / 2, rect.y + rect.height / 2);

        handle_event(&mut state, click_at(x, y));
        assert_eq!(paragraph_text(&state), CHANGED_CONTENT);
        assert_eq!(state.clicks, 1);
        assert_eq!(state.page.console().len(), 1);
    }

    #[test]
    fn test_click_outside_button_does_nothing() {
        let mut state = test_state();
        handle_event(&mut state, click_at(0, 0));
        assert_eq!(paragraph_text(&state), "original content");
        assert_eq!(state.clicks, 0);
        assert!(state.page.console().is_empty());
    }

    #[test]
    fn test_repeat_clicks_are_idempotent() {
        let mut state = test_state();
        let labels = vec!["change content"];
        let rect = layout::button_rects(state.layout().buttons, &labels)[0];
        let (x, y) = (rect.x + rect.width / 2, rect.y + rect.height / 2);

        handle_event(&mut state, click_at(x, y));
        handle_event(&mut state, click_at(x, y));
        assert_eq!(paragraph_text(&state), CHANGED_CONTENT);
        assert_eq!(state.page.console().len(), 2);
    }

    #[test]
    fn test_enter_activates_button() {
        let mut state = test_state();
        handle_event(
            &mut state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(
                KeyCode::Enter,
                KeyModifiers::NONE,
            ))),
        );
        assert_eq!(paragraph_text(&state), CHANGED_CONTENT);
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut state = test_state();
            handle_event(
                &mut state,
                AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))),
            );
            assert!(state.should_quit);
        }
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut state = test_state();
        handle_event(&mut state, AppEvent::Terminal(CEvent::Resize(100, 40)));
        assert_eq!(state.viewport.width, 100);
        assert_eq!(state.viewport.height, 40);
    }
}

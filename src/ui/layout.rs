use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthStr;

/// Horizontal gap between adjacent buttons in the button row.
const BUTTON_GAP: u16 = 2;

pub struct PageLayout {
    pub paragraph: Rect,
    pub buttons: Rect,
    pub console: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> PageLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),     // Paragraph panel
            Constraint::Length(3),  // Button row
            Constraint::Length(10), // Console panel
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    PageLayout {
        paragraph: chunks[0],
        buttons: chunks[1],
        console: chunks[2],
        status_bar: chunks[3],
    }
}

/// Rects for the buttons in a row, centered as a group. Shared by the
/// renderer and mouse hit testing so both always agree on where a button is.
pub fn button_rects(row: Rect, labels: &[&str]) -> Vec<Rect> {
    // Borders plus one cell of padding on each side of the label
    let widths: Vec<u16> = labels.iter().map(|l| l.width() as u16 + 4).collect();
    let total: u16 = widths.iter().sum::<u16>()
        + BUTTON_GAP * labels.len().saturating_sub(1) as u16;

    let mut x = row.x + row.width.saturating_sub(total) / 2;
    let mut rects = Vec::with_capacity(labels.len());
    for width in widths {
        let width = width.min(row.right().saturating_sub(x));
        rects.push(Rect::new(x, row.y, width, row.height));
        x = x.saturating_add(width + BUTTON_GAP);
    }
    rects
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Position;

    #[test]
    fn test_layout_partitions_area() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.paragraph.height, 10);
        assert_eq!(layout.buttons.height, 3);
        assert_eq!(layout.console.height, 10);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 23);
    }

    #[test]
    fn test_single_button_centered() {
        let row = Rect::new(0, 10, 80, 3);
        let rects = button_rects(row, &["change content"]);
        assert_eq!(rects.len(), 1);
        // 14 columns of label + 4 of chrome, centered in 80
        assert_eq!(rects[0], Rect::new(31, 10, 18, 3));
        assert!(rects[0].contains(Position::new(40, 11)));
        assert!(!rects[0].contains(Position::new(5, 11)));
    }

    #[test]
    fn test_two_buttons_do_not_overlap() {
        let row = Rect::new(0, 0, 80, 3);
        let rects = button_rects(row, &["ok", "cancel"]);
        assert_eq!(rects.len(), 2);
        assert!(rects[0].right() < rects[1].x);
        assert_eq!(rects[1].x - rects[0].right(), BUTTON_GAP);
    }

    #[test]
    fn test_narrow_row_clamps_width() {
        let row = Rect::new(0, 0, 10, 3);
        let rects = button_rects(row, &["a very long label"]);
        assert!(rects[0].right() <= row.right());
    }
}

//! Frame layout: header, display field, keypad, status hint.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::view::help;
use crate::view::keypad::{self, Keypad};
use crate::view::styles::CalcStyles;

/// The rectangles a frame is divided into, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// One-line header bar.
    pub header: Rect,
    /// Bordered display field.
    pub display: Rect,
    /// Keypad grid.
    pub keypad: Rect,
    /// One-line status hint.
    pub hint: Rect,
}

/// Split a frame-sized rectangle into the screen areas.
///
/// A trailing `Min(0)` chunk absorbs any excess height, keeping the
/// calculator a compact stack at the top of the terminal.
pub fn compute_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(Keypad::total_height()),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);
    ScreenAreas {
        header: chunks[0],
        display: chunks[1],
        keypad: chunks[2],
        hint: chunks[3],
    }
}

/// Render the whole frame and return the keypad geometry for hit testing.
pub fn render_screen(
    frame: &mut Frame,
    display_value: &str,
    help_visible: bool,
    styles: &CalcStyles,
) -> Keypad {
    let areas = compute_areas(frame.area());

    render_header(frame, areas.header);
    render_display(frame, areas.display, display_value, styles);
    let keypad = keypad::render_keypad(frame, areas.keypad, styles);
    render_hint(frame, areas.hint, styles);

    if help_visible {
        help::render_help_overlay(frame);
    }
    keypad
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(concat!("tcalc ", env!("CARGO_PKG_VERSION")))
        .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn render_display(frame: &mut Frame, area: Rect, value: &str, styles: &CalcStyles) {
    let display = Paragraph::new(value)
        .alignment(Alignment::Right)
        .style(styles.display_style())
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(display, area);
}

fn render_hint(frame: &mut Frame, area: Rect, styles: &CalcStyles) {
    let hint = Paragraph::new("q: quit   ?: help   c: clear")
        .alignment(Alignment::Center)
        .style(styles.hint_style());
    frame.render_widget(hint, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn areas_stack_top_to_bottom() {
        let areas = compute_areas(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.header.height, 1);
        assert_eq!(areas.display.height, 3);
        assert_eq!(areas.keypad.height, Keypad::total_height());
        assert_eq!(areas.hint.height, 1);
        assert_eq!(areas.display.y, areas.header.bottom());
        assert_eq!(areas.keypad.y, areas.display.bottom());
        assert_eq!(areas.hint.y, areas.keypad.bottom());
    }

    #[test]
    fn areas_span_the_full_width() {
        let frame_area = Rect::new(0, 0, 60, 30);
        let areas = compute_areas(frame_area);
        for area in [areas.header, areas.display, areas.keypad, areas.hint] {
            assert_eq!(area.width, frame_area.width);
        }
    }
}

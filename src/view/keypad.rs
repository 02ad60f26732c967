//! Keypad grid: layout, rendering, and mouse hit testing.
//!
//! The keypad mirrors the original button panel: every button carries a
//! single-glyph label, and a click is dispatched by reading that label and
//! classifying it. Geometry from the last render is kept so mouse events
//! can be hit-tested against what is actually on screen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::view::styles::CalcStyles;

/// Button labels, row by row.
///
/// Every label must classify (see the invariant test below); the last row
/// holds the clear button spanning the full width.
pub const KEYPAD_ROWS: [&[&str]; 5] = [
    &["7", "8", "9", "/"],
    &["4", "5", "6", "*"],
    &["1", "2", "3", "-"],
    &["0", ".", "=", "+"],
    &["C"],
];

/// Height of one button row in terminal cells (content plus borders).
pub const BUTTON_ROW_HEIGHT: u16 = 3;

/// A keypad button: its label and the rectangle it was laid out into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    /// The single-glyph caption, fed to the classifier on click.
    pub label: &'static str,
    /// The button's on-screen rectangle.
    pub area: Rect,
}

/// Keypad geometry computed from the area it was last rendered into.
#[derive(Debug, Clone, Default)]
pub struct Keypad {
    buttons: Vec<Button>,
}

impl Keypad {
    /// Lay out the keypad grid inside `area`.
    pub fn layout(area: Rect) -> Self {
        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                KEYPAD_ROWS
                    .iter()
                    .map(|_| Constraint::Length(BUTTON_ROW_HEIGHT))
                    .collect::<Vec<_>>(),
            )
            .split(area);

        let mut buttons = Vec::new();
        for (labels, row_area) in KEYPAD_ROWS.iter().zip(row_areas.iter()) {
            let column_areas = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(
                    labels
                        .iter()
                        .map(|_| Constraint::Ratio(1, labels.len() as u32))
                        .collect::<Vec<_>>(),
                )
                .split(*row_area);
            for (label, area) in labels.iter().copied().zip(column_areas.iter()) {
                buttons.push(Button { label, area: *area });
            }
        }
        Self { buttons }
    }

    /// The laid-out buttons, in reading order.
    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Find the label of the button containing the given cell, if any.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<&'static str> {
        self.buttons
            .iter()
            .find(|button| button.area.contains(Position::new(column, row)))
            .map(|button| button.label)
    }

    /// Total height of the keypad in terminal cells.
    pub fn total_height() -> u16 {
        BUTTON_ROW_HEIGHT * KEYPAD_ROWS.len() as u16
    }
}

/// Render the keypad into `area` and return its geometry for hit testing.
pub fn render_keypad(frame: &mut Frame, area: Rect, styles: &CalcStyles) -> Keypad {
    let keypad = Keypad::layout(area);
    for button in keypad.buttons() {
        let style = styles.button_style(button.label);
        let widget = Paragraph::new(button.label)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(widget, button.area);
    }
    keypad
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::key::classify;

    #[test]
    fn every_keypad_label_classifies() {
        for row in KEYPAD_ROWS {
            for label in row {
                assert!(
                    classify(label).is_some(),
                    "keypad label {:?} must be a recognized key",
                    label
                );
            }
        }
    }

    #[test]
    fn layout_produces_a_button_per_label() {
        let keypad = Keypad::layout(Rect::new(0, 0, 40, Keypad::total_height()));
        let label_count: usize = KEYPAD_ROWS.iter().map(|row| row.len()).sum();
        assert_eq!(keypad.buttons().len(), label_count);
    }

    #[test]
    fn hit_test_finds_the_clicked_button() {
        let keypad = Keypad::layout(Rect::new(0, 0, 40, Keypad::total_height()));
        for button in keypad.buttons() {
            let x = button.area.x + button.area.width / 2;
            let y = button.area.y + button.area.height / 2;
            assert_eq!(
                keypad.hit_test(x, y),
                Some(button.label),
                "center of {:?} should hit it",
                button.label
            );
        }
    }

    #[test]
    fn hit_test_misses_outside_the_grid() {
        let keypad = Keypad::layout(Rect::new(0, 0, 40, Keypad::total_height()));
        assert_eq!(keypad.hit_test(100, 100), None);
    }

    #[test]
    fn buttons_do_not_overlap() {
        let keypad = Keypad::layout(Rect::new(0, 0, 41, Keypad::total_height()));
        let buttons = keypad.buttons();
        for (i, a) in buttons.iter().enumerate() {
            for b in &buttons[i + 1..] {
                assert!(
                    a.area.intersection(b.area).is_empty(),
                    "{:?} and {:?} overlap",
                    a.label,
                    b.label
                );
            }
        }
    }
}

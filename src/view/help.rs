//! Help overlay listing the key bindings.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Help popup width as a percentage of the terminal width.
const HELP_POPUP_WIDTH_PERCENT: u16 = 50;
/// Help popup height as a percentage of the terminal height.
const HELP_POPUP_HEIGHT_PERCENT: u16 = 60;

/// Render the help overlay centered on the screen.
///
/// Triggered by '?', dismissed by 'Esc' or '?'.
pub fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content())
        .block(
            Block::default()
                .title(" Keys ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        Style::default().add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

fn build_help_content() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "Entry",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("  0-9 .        type an operand"),
        Line::from("  + - * /      choose an operator"),
        Line::from("  = or Enter   compute the result"),
        Line::from("  c / C        clear everything"),
        Line::from(""),
        Line::from(Span::styled(
            "Mouse",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("  left click   press a keypad button"),
        Line::from(""),
        Line::from(Span::styled(
            "Application",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("  q            quit"),
        Line::from("  ?            toggle this help"),
    ]
}

/// Calculate the centered rect for the help overlay.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

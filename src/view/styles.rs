//! Widget styling configuration.

use ratatui::style::{Color, Modifier, Style};

use crate::model::key::{classify, Key};

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag / config file
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from the resolved flag and the environment.
    ///
    /// Priority (first match wins):
    /// 1. `no_color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

/// Styles for the calculator widgets.
///
/// Digits and the point render plain; operators, equals, and clear get
/// distinct colors so the keypad reads at a glance.
pub struct CalcStyles {
    display_style: Style,
    digit_style: Style,
    operator_style: Style,
    equals_style: Style,
    clear_style: Style,
    hint_style: Style,
}

impl CalcStyles {
    /// Create styles with the default color scheme.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Create styles honoring the given color configuration.
    ///
    /// With colors disabled every widget uses default styling.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                display_style: Style::default().add_modifier(Modifier::BOLD),
                digit_style: Style::default(),
                operator_style: Style::default().fg(Color::Yellow),
                equals_style: Style::default().fg(Color::Green),
                clear_style: Style::default().fg(Color::Red),
                hint_style: Style::default().fg(Color::DarkGray),
            }
        } else {
            Self {
                display_style: Style::default(),
                digit_style: Style::default(),
                operator_style: Style::default(),
                equals_style: Style::default(),
                clear_style: Style::default(),
                hint_style: Style::default(),
            }
        }
    }

    /// Style for the display field.
    pub fn display_style(&self) -> Style {
        self.display_style
    }

    /// Style for the status hint line.
    pub fn hint_style(&self) -> Style {
        self.hint_style
    }

    /// Style for a keypad button, chosen by what its label classifies to.
    pub fn button_style(&self, label: &str) -> Style {
        match classify(label) {
            Some(Key::Op(_)) => self.operator_style,
            Some(Key::Equals) => self.equals_style,
            Some(Key::Clear) => self.clear_style,
            _ => self.digit_style,
        }
    }
}

impl Default for CalcStyles {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_flag_disables_colors() {
        let config = ColorConfig::from_env_and_args(true);
        assert!(!config.colors_enabled());
    }

    #[test]
    fn disabled_colors_use_default_styles() {
        let styles = CalcStyles::with_color_config(ColorConfig::from_env_and_args(true));
        assert_eq!(styles.button_style("+"), Style::default());
        assert_eq!(styles.button_style("C"), Style::default());
        assert_eq!(styles.display_style(), Style::default());
    }

    #[test]
    fn operator_and_digit_buttons_are_distinct_when_colored() {
        let styles = CalcStyles {
            display_style: Style::default(),
            digit_style: Style::default(),
            operator_style: Style::default().fg(Color::Yellow),
            equals_style: Style::default().fg(Color::Green),
            clear_style: Style::default().fg(Color::Red),
            hint_style: Style::default(),
        };
        assert_ne!(styles.button_style("+"), styles.button_style("7"));
        assert_ne!(styles.button_style("="), styles.button_style("C"));
    }
}

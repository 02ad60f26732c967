//! Keyboard bindings configuration.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;
use std::collections::HashMap;

use crate::config::ConfigError;
use crate::model::key::{Key, Op};

/// An input-layer action resolved from a keyboard event.
///
/// Calculator keys are wrapped in [`AppAction::Press`] and forwarded to the
/// session; the remaining variants are application controls the session
/// never sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Feed a classified calculator key to the state machine.
    Press(Key),
    /// Exit the application. Default: q (Ctrl+C always works).
    Quit,
    /// Toggle the help overlay. Default: ?
    Help,
}

/// `[keybindings]` section of the config file.
///
/// Each field is a key spec: a single character (uppercase implies Shift)
/// or one of the named keys `esc`, `enter`, `tab`, `backspace`, `delete`.
/// Only the application-control keys are rebindable; the calculator keys
/// mirror the keypad labels and stay fixed.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct KeybindingsSection {
    /// Override for the quit key.
    #[serde(default)]
    pub quit: Option<String>,

    /// Override for the help-overlay key.
    #[serde(default)]
    pub help: Option<String>,

    /// Override for the clear key (in addition to the keypad's C button).
    #[serde(default)]
    pub clear: Option<String>,
}

/// Maps keyboard events to input-layer actions.
///
/// Provides defaults that mirror the keypad labels, with config-file
/// overrides for the application-control keys.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, AppAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<AppAction> {
        self.bindings.get(&key).copied()
    }

    /// Build bindings from the defaults plus a config-file section.
    ///
    /// An override replaces every default binding for that action.
    pub fn from_section(section: &KeybindingsSection) -> Result<Self, ConfigError> {
        let mut keybindings = Self::default();
        keybindings.rebind(section.quit.as_deref(), "quit", AppAction::Quit)?;
        keybindings.rebind(section.help.as_deref(), "help", AppAction::Help)?;
        keybindings.rebind(
            section.clear.as_deref(),
            "clear",
            AppAction::Press(Key::Clear),
        )?;
        Ok(keybindings)
    }

    fn rebind(
        &mut self,
        spec: Option<&str>,
        action_name: &'static str,
        action: AppAction,
    ) -> Result<(), ConfigError> {
        let Some(spec) = spec else {
            return Ok(());
        };
        let event = parse_key_spec(spec).ok_or_else(|| ConfigError::InvalidKeySpec {
            action: action_name,
            spec: spec.to_string(),
        })?;
        self.bindings.retain(|_, bound| *bound != action);
        self.bindings.insert(event, action);
        Ok(())
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        // Digits
        for ch in '0'..='9' {
            bindings.insert(
                KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE),
                AppAction::Press(Key::Digit(ch)),
            );
        }

        // Decimal point
        bindings.insert(
            KeyEvent::new(KeyCode::Char('.'), KeyModifiers::NONE),
            AppAction::Press(Key::Point),
        );

        // Operators. Symbol keys arrive shifted on many layouts, so each is
        // registered with and without Shift.
        for op in [Op::Add, Op::Sub, Op::Mul, Op::Div] {
            for modifiers in [KeyModifiers::NONE, KeyModifiers::SHIFT] {
                bindings.insert(
                    KeyEvent::new(KeyCode::Char(op.symbol()), modifiers),
                    AppAction::Press(Key::Op(op)),
                );
            }
        }

        // Equals
        bindings.insert(
            KeyEvent::new(KeyCode::Char('='), KeyModifiers::NONE),
            AppAction::Press(Key::Equals),
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            AppAction::Press(Key::Equals),
        );

        // Clear, like the keypad's C button
        bindings.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE),
            AppAction::Press(Key::Clear),
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT),
            AppAction::Press(Key::Clear),
        );

        // Application controls
        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            AppAction::Quit,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE),
            AppAction::Help,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT),
            AppAction::Help,
        );

        Self { bindings }
    }
}

/// Parse a config-file key spec into a key event.
///
/// A single character maps to that character key (uppercase implies Shift);
/// the named keys `esc`, `enter`, `tab`, `backspace`, and `delete` are also
/// accepted. Anything else is invalid.
fn parse_key_spec(spec: &str) -> Option<KeyEvent> {
    let code = match spec {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        _ => {
            let mut chars = spec.chars();
            let (ch, rest) = (chars.next()?, chars.next());
            if rest.is_some() {
                return None;
            }
            let modifiers = if ch.is_ascii_uppercase() {
                KeyModifiers::SHIFT
            } else {
                KeyModifiers::NONE
            };
            return Some(KeyEvent::new(KeyCode::Char(ch), modifiers));
        }
    };
    Some(KeyEvent::new(code, KeyModifiers::NONE))
}

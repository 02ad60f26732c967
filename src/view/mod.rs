//! TUI rendering and terminal management (impure shell).

pub mod help;
pub mod keypad;
pub mod screen;
pub mod styles;

pub use keypad::Keypad;
pub use screen::{compute_areas, render_screen, ScreenAreas};
pub use styles::{CalcStyles, ColorConfig};

use crate::config::{AppAction, KeyBindings};
use crate::model::key::{classify, Key};
use crate::state::{DisplayBuffer, Session};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur during TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations.
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<TuiError> for crate::model::AppError {
    fn from(err: TuiError) -> Self {
        match err {
            TuiError::Io(io_err) => crate::model::AppError::Terminal(io_err),
        }
    }
}

/// Main TUI application.
///
/// Owns the terminal, the calculator session, the display buffer, and the
/// keypad geometry from the last render. Generic over the backend so tests
/// can drive it with `ratatui::backend::TestBackend`.
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    session: Session,
    display: DisplayBuffer,
    key_bindings: KeyBindings,
    styles: CalcStyles,
    help_visible: bool,
    /// Keypad geometry from the last render (for mouse click detection).
    last_keypad: Keypad,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application.
    ///
    /// Sets up the terminal in raw mode with the alternate screen and
    /// mouse capture enabled.
    pub fn new(key_bindings: KeyBindings, color_config: ColorConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self::with_terminal(terminal, key_bindings, color_config))
    }

    /// Run the main event loop.
    ///
    /// Returns when the user quits (q or Ctrl+C). Each event is handled to
    /// completion before the next is read; there is no background work, so
    /// the loop blocks idle on the event source.
    pub fn run(&mut self) -> Result<(), TuiError> {
        // Initial render so the screen has content immediately
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        return Ok(()); // User quit
                    }
                    self.draw()?;
                }
                Event::Mouse(mouse) => {
                    self.handle_mouse(mouse);
                    self.draw()?;
                }
                Event::Resize(_, _) => {
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build an app around an existing terminal.
    ///
    /// Used by tests with `TestBackend`; production code goes through
    /// [`TuiApp::new`].
    pub fn with_terminal(
        terminal: Terminal<B>,
        key_bindings: KeyBindings,
        color_config: ColorConfig,
    ) -> Self {
        Self {
            terminal,
            session: Session::new(),
            display: DisplayBuffer::new(),
            key_bindings,
            styles: CalcStyles::with_color_config(color_config),
            help_visible: false,
            last_keypad: Keypad::default(),
        }
    }

    /// The current display text.
    pub fn display_value(&self) -> &str {
        self.display.value()
    }

    /// The calculator session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Whether the help overlay is up.
    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    /// The keypad geometry from the last render.
    pub fn keypad(&self) -> &Keypad {
        &self.last_keypad
    }

    /// Handle a single keyboard event.
    ///
    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C should always quit, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Esc closes the help overlay (before key binding dispatch)
        if key.code == KeyCode::Esc && self.help_visible {
            self.help_visible = false;
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            trace!(?key, "unbound key ignored");
            return false;
        };

        // Calculator input is blocked while the help overlay is up
        if self.help_visible && !matches!(action, AppAction::Help | AppAction::Quit) {
            return false;
        }

        match action {
            AppAction::Quit => return true,
            AppAction::Help => self.help_visible = !self.help_visible,
            AppAction::Press(calc_key) => self.press(calc_key),
        }
        false
    }

    /// Handle a single mouse event.
    ///
    /// A left click on a keypad button reads the button's label, classifies
    /// it, and dispatches the classified key, the same path a physical
    /// button panel would take. Labels that do not classify are never
    /// dispatched.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.help_visible {
            return;
        }
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if let Some(label) = self.last_keypad.hit_test(mouse.column, mouse.row) {
                match classify(label) {
                    Some(calc_key) => self.press(calc_key),
                    None => trace!(label, "unclassifiable label ignored"),
                }
            }
        }
    }

    /// Feed one classified key to the session and apply the emitted display
    /// commands to the display buffer.
    fn press(&mut self, key: Key) {
        debug!(?key, phase = ?self.session.phase(), "key press");
        let commands = self.session.on_key(key);
        self.display.apply_all(&commands);
    }

    /// Render the current frame and refresh the keypad hit-test geometry.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let display_value = self.display.value().to_string();
        let help_visible = self.help_visible;
        let styles = &self.styles;
        let mut keypad = Keypad::default();
        self.terminal.draw(|frame| {
            keypad = screen::render_screen(frame, &display_value, help_visible, styles);
        })?;
        self.last_keypad = keypad;
        Ok(())
    }
}

impl TuiApp<ratatui::backend::TestBackend> {
    /// The last rendered frame as one string, line by line.
    ///
    /// Only available with `TestBackend`; used by integration tests to
    /// assert on rendered content. Trailing whitespace and empty lines are
    /// trimmed.
    pub fn rendered_text(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let area = buffer.area();
        let mut lines = Vec::new();

        for y in area.top()..area.bottom() {
            let mut line = String::new();
            for x in area.left()..area.right() {
                line.push_str(buffer[(x, y)].symbol());
            }
            let trimmed = line.trim_end();
            if !trimmed.is_empty() {
                lines.push(trimmed.to_string());
            }
        }

        lines.join("\n")
    }
}

/// Initialize and run the TUI application.
///
/// This is the main entry point for the TUI. It handles terminal setup,
/// runs the event loop, and restores the terminal on the way out even when
/// the loop errors.
///
/// Note: logging must be initialized by the caller before calling this.
pub fn run(key_bindings: KeyBindings, color_config: ColorConfig) -> Result<(), TuiError> {
    let mut app = TuiApp::new(key_bindings, color_config)?;

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore the terminal to its normal state.
///
/// Disables raw mode and mouse capture, and leaves the alternate screen.
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

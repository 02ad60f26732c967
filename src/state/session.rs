//! Calculator input state machine (pure).
//!
//! All transitions are pure with respect to the terminal: the session
//! mutates its own fields and returns the display commands the host must
//! apply. Nothing here can fail; invalid input is a silent no-op and
//! non-finite arithmetic results are displayed rather than raised.

use crate::model::key::{Key, Op};
use crate::state::display::DisplayCommand;

/// Which part of the calculation the next key press applies to.
///
/// The pending operator lives inside [`Phase::EnteringRight`], so a session
/// with an operator but no active right-hand entry is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accumulating the left operand. Initial phase.
    EnteringLeft,
    /// An operator is recorded; accumulating the right operand.
    EnteringRight(Op),
    /// A result is on the display; the next key starts or chains a
    /// calculation.
    ShowingResult,
}

/// The calculator session: operands, phase, and a mirror of the display.
///
/// Created once at startup and reset in place by [`Key::Clear`]; never
/// destroyed during the program's run. The `display` mirror is kept
/// byte-for-byte identical to the host's display buffer by routing every
/// emitted command through it, which is what lets the ShowingResult
/// transitions reuse the shown result without reading the host's display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    phase: Phase,
    left: String,
    right: String,
    display: String,
}

impl Session {
    /// Create a session in its initial configuration: empty operands, no
    /// operator, empty display, entering the left operand.
    pub fn new() -> Self {
        Self {
            phase: Phase::EnteringLeft,
            left: String::new(),
            right: String::new(),
            display: String::new(),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The accumulated left operand string. Empty means nothing entered.
    pub fn left(&self) -> &str {
        &self.left
    }

    /// The accumulated right operand string. Empty means nothing entered.
    pub fn right(&self) -> &str {
        &self.right
    }

    /// The pending operator, if one has been recorded.
    pub fn op(&self) -> Option<Op> {
        match self.phase {
            Phase::EnteringRight(op) => Some(op),
            Phase::EnteringLeft | Phase::ShowingResult => None,
        }
    }

    /// The session's mirror of the visible display text.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Consume one classified key press and return the display commands it
    /// produced, in application order.
    ///
    /// Most keys emit zero or one command; operator chaining emits a
    /// `Set` of the intermediate result followed by an `Append` of the new
    /// operator symbol.
    pub fn on_key(&mut self, key: Key) -> Vec<DisplayCommand> {
        let mut out = Vec::new();
        // Clear wins from any phase.
        if key == Key::Clear {
            self.reset("", &mut out);
            return out;
        }
        match self.phase {
            Phase::EnteringLeft => self.on_entering_left(key, &mut out),
            Phase::EnteringRight(op) => self.on_entering_right(op, key, &mut out),
            Phase::ShowingResult => self.on_showing_result(key, &mut out),
        }
        out
    }

    fn on_entering_left(&mut self, key: Key, out: &mut Vec<DisplayCommand>) {
        match key {
            Key::Digit(digit) => {
                self.left.push(digit);
                self.emit(DisplayCommand::append(digit.to_string()), out);
            }
            Key::Point => {
                // At most one decimal point per operand.
                if self.left.contains('.') {
                    return;
                }
                self.left.push('.');
                self.emit(DisplayCommand::append("."), out);
            }
            Key::Op(op) => {
                // An operator before any digit treats the left operand as 0.
                if self.left.is_empty() {
                    self.left.push('0');
                    self.emit(DisplayCommand::set("0"), out);
                }
                self.phase = Phase::EnteringRight(op);
                self.emit(DisplayCommand::append(op.symbol().to_string()), out);
            }
            // No operand pair exists yet.
            Key::Equals | Key::Clear => {}
        }
    }

    fn on_entering_right(&mut self, op: Op, key: Key, out: &mut Vec<DisplayCommand>) {
        match key {
            Key::Digit(digit) => {
                self.right.push(digit);
                self.emit(DisplayCommand::append(digit.to_string()), out);
            }
            Key::Point => {
                if self.right.contains('.') {
                    return;
                }
                self.right.push('.');
                self.emit(DisplayCommand::append("."), out);
            }
            Key::Op(next_op) => {
                // Chaining needs a complete right operand.
                if self.right.is_empty() {
                    return;
                }
                // Fold the pending operation into a fresh left operand and
                // keep accumulating against it.
                let result = format_value(evaluate(&self.left, op, &self.right));
                self.left = result.clone();
                self.right.clear();
                self.phase = Phase::EnteringRight(next_op);
                self.emit(DisplayCommand::set(result), out);
                self.emit(DisplayCommand::append(next_op.symbol().to_string()), out);
            }
            Key::Equals => {
                if self.right.is_empty() {
                    return;
                }
                let result = format_value(evaluate(&self.left, op, &self.right));
                // Clean slate: the shown result survives only in the
                // display mirror until the next key decides what it seeds.
                self.left.clear();
                self.right.clear();
                self.phase = Phase::ShowingResult;
                self.emit(DisplayCommand::set(result), out);
            }
            Key::Clear => {}
        }
    }

    fn on_showing_result(&mut self, key: Key, out: &mut Vec<DisplayCommand>) {
        match key {
            Key::Digit(digit) => {
                // A digit discards the previous calculation entirely.
                self.reset(&digit.to_string(), out);
            }
            Key::Point => {
                // A point continues from the shown result: the new left
                // operand is the previous display text plus the point.
                let seeded = format!("{}.", self.display);
                self.reset(&seeded, out);
            }
            Key::Op(op) => {
                // Chain off the shown result.
                self.left = self.display.clone();
                self.right.clear();
                self.phase = Phase::EnteringRight(op);
                self.emit(DisplayCommand::append(op.symbol().to_string()), out);
            }
            Key::Equals | Key::Clear => {}
        }
    }

    /// Reset to the initial configuration, seeding the left operand (and
    /// the display) with `seed`. Clear uses an empty seed; transitions out
    /// of ShowingResult seed the new calculation's left operand.
    fn reset(&mut self, seed: &str, out: &mut Vec<DisplayCommand>) {
        self.left = seed.to_string();
        self.right.clear();
        self.phase = Phase::EnteringLeft;
        self.emit(DisplayCommand::set(seed), out);
    }

    /// Record a command in the mirror and the output batch.
    fn emit(&mut self, command: DisplayCommand, out: &mut Vec<DisplayCommand>) {
        match &command {
            DisplayCommand::Set(text) => {
                self.display.clear();
                self.display.push_str(text);
            }
            DisplayCommand::Append(text) => self.display.push_str(text),
        }
        out.push(command);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate `left op right` with IEEE-754 double semantics.
///
/// Operand strings that do not parse as floats (a bare "." is the only
/// reachable form) evaluate as NaN, so evaluation is total.
fn evaluate(left: &str, op: Op, right: &str) -> f64 {
    op.apply(parse_operand(left), parse_operand(right))
}

fn parse_operand(text: &str) -> f64 {
    text.parse().unwrap_or(f64::NAN)
}

/// Render a result for the display.
///
/// Finite values use Rust's shortest `f64` formatting, so integral results
/// have no fractional part. Non-finite values render as `Infinity`,
/// `-Infinity`, or `NaN`.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        value.to_string()
    }
}

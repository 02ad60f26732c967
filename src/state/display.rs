//! Display update commands and the host-side display buffer.

/// A mutation of the visible display text.
///
/// These are the only two primitives the state machine issues to its host;
/// the host never needs to expose anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCommand {
    /// Replace the display text outright.
    Set(String),
    /// Concatenate text onto the current display value.
    Append(String),
}

impl DisplayCommand {
    /// Build a `Set` from anything string-like.
    pub fn set(text: impl Into<String>) -> Self {
        DisplayCommand::Set(text.into())
    }

    /// Build an `Append` from anything string-like.
    pub fn append(text: impl Into<String>) -> Self {
        DisplayCommand::Append(text.into())
    }
}

/// The host's display sink: a plain text buffer the view renders each frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayBuffer {
    value: String,
}

impl DisplayBuffer {
    /// Create an empty display buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current display text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Apply a single display command.
    pub fn apply(&mut self, command: &DisplayCommand) {
        match command {
            DisplayCommand::Set(text) => self.value = text.clone(),
            DisplayCommand::Append(text) => self.value.push_str(text),
        }
    }

    /// Apply a batch of commands in order.
    pub fn apply_all<'a>(&mut self, commands: impl IntoIterator<Item = &'a DisplayCommand>) {
        for command in commands {
            self.apply(command);
        }
    }
}

//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, GateTheme, OutputMode, UserInterface};

/// Terminal UI implementation.
///
/// Status, warnings and errors go to stderr; [`emit`](UserInterface::emit)
/// writes the requirement list to stdout.
pub struct TerminalUI {
    status: Term,
    artifact: Term,
    theme: GateTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            GateTheme::new()
        } else {
            GateTheme::plain()
        };

        Self {
            status: Term::stderr(),
            artifact: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.status, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.status, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.status, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.status, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.status, "{}", self.theme.format_header(title)).ok();
        }
    }

    fn field(&mut self, key: &str, value: &str) {
        if self.mode.shows_status() {
            writeln!(self.status, "  {}", self.theme.format_field(key, value)).ok();
        }
    }

    fn emit(&mut self, line: &str) {
        writeln!(self.artifact, "{}", line).ok();
    }
}

/// Create the UI for the given mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}

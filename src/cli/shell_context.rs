use std::io;

use strsim::levenshtein;

use crate::cli::handlers;
use crate::cli::output::{self, MessageKind, OutputPreferences, Target};
use crate::cli::registry::CommandRegistry;
use crate::config::{Config, ViewKind};
use crate::core::{Refresh, SystemClock, TrackerSession};
use crate::errors::CliError;
use crate::view::{JsonView, TerminalView, View};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<LoopControl, CliError>;

/// State shared by the shell loop and the command handlers.
pub struct ShellContext {
    pub mode: CliMode,
    pub running: bool,
    session: TrackerSession,
    view: Box<dyn View>,
    registry: CommandRegistry,
    output: OutputPreferences,
}

impl ShellContext {
    pub fn new(
        mode: CliMode,
        session: TrackerSession,
        view: Box<dyn View>,
        output: OutputPreferences,
    ) -> Self {
        let mut registry = CommandRegistry::new();
        handlers::register_all(&mut registry);
        Self {
            mode,
            running: true,
            session,
            view,
            registry,
            output,
        }
    }

    /// Wires the configured view to stdout. Colour is only used for an
    /// interactive terminal view with colour enabled.
    pub fn from_config(mode: CliMode, config: &Config) -> Self {
        let session = TrackerSession::from_config(config, Box::new(SystemClock));
        let color = config.ui_color_enabled
            && mode == CliMode::Interactive
            && std::env::var_os("NO_COLOR").is_none();
        let (view, target): (Box<dyn View>, Target) = match config.view {
            ViewKind::Terminal => (
                Box::new(TerminalView::new(io::stdout(), color)) as Box<dyn View>,
                Target::Stdout,
            ),
            ViewKind::Json => (
                Box::new(JsonView::new(io::stdout())) as Box<dyn View>,
                Target::Stderr,
            ),
        };
        Self::new(mode, session, view, OutputPreferences { color, target })
    }

    pub fn session(&self) -> &TrackerSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut TrackerSession {
        &mut self.session
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn prompt(&self) -> String {
        format!("expenses ({})> ", self.session.ledger().len())
    }

    pub fn dispatch(&mut self, command: &str, raw: &str, args: &[&str]) -> CommandResult {
        match self.registry.handler(command) {
            Some(handler) => handler(self, args),
            None => {
                self.suggest_command(raw);
                Ok(LoopControl::Continue)
            }
        }
    }

    pub fn render(&mut self, refresh: &Refresh) -> Result<(), CliError> {
        self.view.render(refresh)?;
        Ok(())
    }

    pub fn print_info(&self, message: impl std::fmt::Display) {
        output::print(MessageKind::Info, message, &self.output);
    }

    pub fn print_warning(&self, message: impl std::fmt::Display) {
        output::print(MessageKind::Warning, message, &self.output);
    }

    pub fn print_section(&self, title: impl std::fmt::Display) {
        output::print(MessageKind::Section, title, &self.output);
    }

    pub fn suggest_command(&self, input: &str) {
        self.print_warning(format!(
            "Unknown command `{input}`. Type `help` to see available commands."
        ));
        if let Some(best) = self.closest_command(input) {
            self.print_info(format!("Suggestion: `{best}`?"));
        }
    }

    pub(crate) fn closest_command(&self, input: &str) -> Option<&'static str> {
        let needle = input.to_ascii_lowercase();
        self.registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .filter(|(distance, _)| *distance <= 3)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, name)| name)
    }

    pub fn report_error(&self, err: CliError) {
        tracing::error!(error = %err, "command failed");
        self.print_warning(err);
    }
}

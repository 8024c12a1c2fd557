use std::{
    borrow::Cow,
    fmt,
    io::{self, BufRead},
};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::{ValidationContext, ValidationResult, Validator},
    Cmd, ConditionalEventHandler, Context as ReadlineContext, Editor, Event, EventContext,
    EventHandler, Helper, KeyEvent, RepeatCount,
};
use shell_words::split;
use tracing::debug;

use crate::cli::shell_context::{CliMode, CommandResult, LoopControl, ShellContext};
use crate::config::{ConfigManager, ViewKind};
use crate::errors::CliError;

/// Switches the shell to line-by-line stdin processing.
pub const SCRIPT_ENV_VAR: &str = "EXPENSE_TRACKER_SCRIPT";
/// Overrides the configured view (`terminal` or `json`).
pub const VIEW_ENV_VAR: &str = "EXPENSE_TRACKER_VIEW";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV_VAR).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let manager = ConfigManager::from_env()?;
    let mut config = manager.load()?;
    if let Ok(raw) = std::env::var(VIEW_ENV_VAR) {
        config.view = raw.parse::<ViewKind>()?;
    }
    debug!(path = %manager.config_path().display(), view = %config.view, "configuration loaded");

    let mut context = ShellContext::from_config(mode, &config);
    let initial = context.session().refresh();
    context.render(&initial)?;

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    let helper = CommandHelper::new(context.command_names());
    editor.set_helper(Some(helper));
    editor.bind_sequence(
        KeyEvent::from('?'),
        EventHandler::Conditional(Box::new(CompleteOnEmptyPrefix)),
    );

    while context.running {
        let prompt = context.prompt();
        match editor.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();
                match execute_line(context, trimmed) {
                    Ok(LoopControl::Continue) => {}
                    Ok(LoopControl::Exit) => break,
                    Err(err) => context.report_error(err),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                context.print_info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if !context.running {
            break;
        }
        let line = match line {
            Ok(line) => line,
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                context.report_error(err.into());
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        match execute_line(context, &line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err),
        }
    }
    Ok(())
}

/// Tokenises one input line and dispatches it.
pub(crate) fn execute_line(context: &mut ShellContext, line: &str) -> CommandResult {
    let tokens = match parse_command_line(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            context.print_warning(&err);
            return Ok(LoopControl::Continue);
        }
    };

    let Some(raw) = tokens.first() else {
        return Ok(LoopControl::Continue);
    };
    let command = raw.to_lowercase();
    let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

    let outcome = context.dispatch(&command, raw, &args)?;
    if outcome == LoopControl::Exit {
        context.running = false;
    }
    Ok(outcome)
}

/// `?` lists commands while nothing but whitespace precedes the cursor and
/// is typed literally everywhere else.
struct CompleteOnEmptyPrefix;

impl ConditionalEventHandler for CompleteOnEmptyPrefix {
    fn handle(
        &self,
        _evt: &Event,
        _n: RepeatCount,
        _positive: bool,
        ctx: &EventContext,
    ) -> Option<Cmd> {
        completes_on_question_mark(&ctx.line()[..ctx.pos()]).then_some(Cmd::Complete)
    }
}

fn completes_on_question_mark(before_cursor: &str) -> bool {
    before_cursor.trim().is_empty()
}

struct CommandHelper {
    commands: Vec<String>,
}

impl CommandHelper {
    fn new(names: Vec<&'static str>) -> Self {
        let mut commands: Vec<String> = names
            .into_iter()
            .map(|name| name.to_ascii_lowercase())
            .collect();
        commands.sort();
        commands.dedup();
        Self { commands }
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix
            .rfind(char::is_whitespace)
            .map(|idx| idx + 1)
            .unwrap_or(0);

        // Only the first word is a command name.
        if prefix[..start].trim().is_empty() {
            let needle = prefix[start..].to_ascii_lowercase();
            let candidates = self
                .commands
                .iter()
                .filter(|name| name.starts_with(&needle))
                .map(|name| Pair {
                    display: name.clone(),
                    replacement: name.clone(),
                })
                .collect();
            return Ok((start, candidates));
        }
        Ok((start, Vec::new()))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        Ok(ValidationResult::Valid(None))
    }
}

/// Splits a line with shell quoting rules, so descriptions may contain spaces.
pub fn parse_command_line(input: &str) -> Result<Vec<String>, ParseError> {
    split(input).map_err(|err| ParseError {
        message: err.to_string(),
    })
}

#[derive(Debug)]
pub struct ParseError {
    message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

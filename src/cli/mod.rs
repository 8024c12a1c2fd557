mod handlers;
pub mod output;
pub mod registry;
mod shell;
pub mod shell_context;

pub use shell::{parse_command_line, run_cli};
pub use shell_context::{CliMode, LoopControl, ShellContext};

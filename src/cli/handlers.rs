//! Shell commands. Each handler turns tokens into a session call and hands
//! the resulting refresh to the view.

use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::shell_context::{CommandResult, LoopControl, ShellContext};
use crate::domain::{Category, RawTransaction, TransactionId, TransactionKind};

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    registry.register(CommandEntry::new(
        "add",
        "Record an income or expense",
        "add <description> <amount> [category] [income|expense]",
        cmd_add,
    ));
    registry.register(CommandEntry::new(
        "delete",
        "Remove a transaction by id",
        "delete <id>",
        cmd_delete,
    ));
    registry.register(CommandEntry::new(
        "list",
        "Show all transactions and totals",
        "list",
        cmd_list,
    ));
    registry.register(CommandEntry::new(
        "categories",
        "Show the available categories",
        "categories",
        cmd_categories,
    ));
    registry.register(CommandEntry::new("help", "Show this help", "help", cmd_help));
    registry.register(CommandEntry::new("exit", "Leave the shell", "exit", cmd_exit));
    registry.alias("rm", "delete");
    registry.alias("ls", "list");
    registry.alias("summary", "list");
    registry.alias("quit", "exit");
}

fn usage_warning(context: &ShellContext, command: &str) {
    if let Some(entry) = context.registry().get(command) {
        context.print_warning(format!("Usage: {}", entry.usage));
    }
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (description, amount) = match args {
        [description, amount, ..] if args.len() <= 4 => (*description, *amount),
        _ => {
            usage_warning(context, "add");
            return Ok(LoopControl::Continue);
        }
    };
    let category = args
        .get(2)
        .map(|raw| Category::from_raw(raw))
        .unwrap_or_default();
    let kind = match args.get(3).map(|raw| raw.parse::<TransactionKind>()) {
        None => TransactionKind::default(),
        Some(Ok(kind)) => kind,
        Some(Err(err)) => {
            context.print_warning(err);
            return Ok(LoopControl::Continue);
        }
    };
    let refresh = context
        .session_mut()
        .add_transaction(RawTransaction::new(description, amount, category, kind));
    context.render(&refresh)?;
    Ok(LoopControl::Continue)
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw_id] = args else {
        usage_warning(context, "delete");
        return Ok(LoopControl::Continue);
    };
    let id = match raw_id.parse::<TransactionId>() {
        Ok(id) => id,
        Err(_) => {
            context.print_warning(format!("`{raw_id}` is not a transaction id."));
            return Ok(LoopControl::Continue);
        }
    };
    let refresh = context.session_mut().delete_transaction(id);
    context.render(&refresh)?;
    Ok(LoopControl::Continue)
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let refresh = context.session().refresh();
    context.render(&refresh)?;
    Ok(LoopControl::Continue)
}

fn cmd_categories(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.print_section("Categories");
    for category in Category::KNOWN {
        context.print_info(format!("  {} {}", category.icon(), category.as_str()));
    }
    Ok(LoopControl::Continue)
}

fn cmd_help(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.print_section("Commands");
    for entry in context.registry().list() {
        context.print_info(format!("  {:<60} {}", entry.usage, entry.description));
    }
    Ok(LoopControl::Continue)
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Ok(LoopControl::Exit)
}

//! List command.

use crate::shell::command::{Command, CommandResult, ShellContext};

/// Lists all entries in insertion order.
pub struct ListCommand;

impl Command for ListCommand {
    fn name(&self) -> &str {
        "list"
    }

    fn aliases(&self) -> &[&str] {
        &["ls", "l"]
    }

    fn description(&self) -> &str {
        "List all stored entries"
    }

    fn usage(&self) -> &str {
        "list"
    }

    fn help(&self) -> &str {
        "Display all entries in the order they were added.\n\n\
         Passwords are not shown; use 'show <website>' for a single entry.\n\n\
         Examples:\n  \
           list\n  \
           ls"
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        log::debug!("Listing entries");

        if ctx.store.is_empty() {
            return CommandResult::success("The database is currently empty.");
        }

        let output = ctx
            .store
            .entries()
            .map(|entry| entry.to_string())
            .collect::<Vec<_>>()
            .join("\n");

        log::info!("Listed {} entries", ctx.store.len());
        CommandResult::success(output)
    }

    fn min_args(&self) -> usize {
        0
    }

    fn max_args(&self) -> Option<usize> {
        Some(0)
    }
}

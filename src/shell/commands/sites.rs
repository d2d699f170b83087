//! Sites command.

use crate::shell::command::{Command, CommandResult, ShellContext};

/// Lists the stored website names only.
pub struct SitesCommand;

impl Command for SitesCommand {
    fn name(&self) -> &str {
        "sites"
    }

    fn aliases(&self) -> &[&str] {
        &["websites", "w"]
    }

    fn description(&self) -> &str {
        "List stored website names"
    }

    fn usage(&self) -> &str {
        "sites"
    }

    fn help(&self) -> &str {
        "Display only the website names of all stored entries, in the order\n\
         they were added.\n\n\
         Examples:\n  \
           sites\n  \
           websites"
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        log::debug!("Listing websites");

        if ctx.store.is_empty() {
            return CommandResult::success("The database is currently empty.");
        }

        CommandResult::success(ctx.store.websites().join("\n"))
    }

    fn min_args(&self) -> usize {
        0
    }

    fn max_args(&self) -> Option<usize> {
        Some(0)
    }
}

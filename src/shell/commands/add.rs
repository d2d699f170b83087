//! Add command.

use crate::entry::Entry;
use crate::shell::command::{Command, CommandResult, ShellContext};

/// Adds a new entry to the store.
pub struct AddCommand;

impl Command for AddCommand {
    fn name(&self) -> &str {
        "add"
    }

    fn aliases(&self) -> &[&str] {
        &["a", "new"]
    }

    fn description(&self) -> &str {
        "Add a new entry"
    }

    fn usage(&self) -> &str {
        "add <website> <username> [password]"
    }

    fn help(&self) -> &str {
        "Add a new entry to the database.\n\n\
         Arguments:\n  \
           <website>  - Website the entry is for\n  \
           <username> - Username for the website\n  \
           [password] - Optional password; omit to store the entry without one\n\n\
         Each website/username combination can only be stored once.\n\n\
         Examples:\n  \
           add github.com octocat hunter2\n  \
           add example.org alice"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        if args.len() < 2 {
            return CommandResult::error(format!(
                "Usage: {}\nMissing required arguments",
                self.usage()
            ));
        }

        let website = args[0];
        let username = args[1];
        let password = args.get(2).copied();

        log::debug!("Adding entry for {}", website);

        let entry = match Entry::new(website, username, password) {
            Ok(entry) => entry,
            Err(e) => return CommandResult::error(e.to_string()),
        };

        match ctx.store.add(entry) {
            Ok(_) => {
                ctx.site_trie.insert(website);
                ctx.mark_modified();
                log::info!("Added entry for {}", website);
                CommandResult::success(format!("Entry for '{}' added to the database.", website))
            }
            Err(e) => {
                log::warn!("Failed to add entry for '{}': {}", website, e);
                CommandResult::error(format!("{}. Use 'update' to change the existing entry.", e))
            }
        }
    }

    fn min_args(&self) -> usize {
        2
    }

    fn max_args(&self) -> Option<usize> {
        Some(3)
    }
}

//! Update command.

use crate::shell::command::{Command, CommandResult, ShellContext};

const FIELDS: &[&str] = &["website", "username", "password"];

/// Updates one field of a stored entry.
pub struct UpdateCommand;

impl Command for UpdateCommand {
    fn name(&self) -> &str {
        "update"
    }

    fn aliases(&self) -> &[&str] {
        &["u", "edit"]
    }

    fn description(&self) -> &str {
        "Update one field of an entry"
    }

    fn usage(&self) -> &str {
        "update <website> <field> <value>"
    }

    fn help(&self) -> &str {
        "Update one field of the entry stored for a website.\n\n\
         Arguments:\n  \
           <website> - Website of the entry to update\n  \
           <field>   - website, username or password (or w, u, p)\n  \
           <value>   - New value for the field\n\n\
         The entry's timestamp is refreshed on success.\n\n\
         Examples:\n  \
           update github.com password hunter3\n  \
           u example.org u alice2"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        if args.len() < 3 {
            return CommandResult::error(format!(
                "Usage: {}\nMissing required arguments",
                self.usage()
            ));
        }

        let name = args[0];
        let field = args[1];
        let value = args[2];

        let Some((id, _)) = ctx.store.find_by_website(name) else {
            log::debug!("No entry to update for: {}", name);
            return CommandResult::error(ctx.unknown_website(name));
        };

        log::debug!("Updating {} of entry for {}", field, name);

        match ctx.store.update(id, field, value) {
            Ok(()) => {
                if field == "w" || field == "website" {
                    // Keep the completion trie in line with the rename.
                    if ctx.store.find_by_website(name).is_none() {
                        ctx.site_trie.remove(name);
                    }
                    ctx.site_trie.insert(value);
                }
                ctx.mark_modified();
                log::info!("Updated {} of entry for {}", field, name);
                CommandResult::success(format!("{} updated.", capitalized(field)))
            }
            Err(e) => {
                log::warn!("Failed to update entry for '{}': {}", name, e);
                CommandResult::error(e.to_string())
            }
        }
    }

    fn completions(&self, arg_index: usize, partial: &str, ctx: &ShellContext) -> Vec<String> {
        match arg_index {
            0 => ctx.site_trie.completions(partial),
            1 => FIELDS
                .iter()
                .filter(|f| f.starts_with(partial))
                .map(|f| f.to_string())
                .collect(),
            _ => vec![],
        }
    }

    fn min_args(&self) -> usize {
        3
    }

    fn max_args(&self) -> Option<usize> {
        Some(3)
    }
}

fn capitalized(field: &str) -> &'static str {
    match field {
        "w" | "website" => "Website",
        "u" | "username" => "Username",
        _ => "Password",
    }
}

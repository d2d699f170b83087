//! Show command.

use crate::shell::command::{Command, CommandResult, ShellContext};

/// Displays one entry, looked up by exact website name.
pub struct ShowCommand;

impl Command for ShowCommand {
    fn name(&self) -> &str {
        "show"
    }

    fn aliases(&self) -> &[&str] {
        &["get", "g", "view"]
    }

    fn description(&self) -> &str {
        "Show the entry for a website"
    }

    fn usage(&self) -> &str {
        "show <website>"
    }

    fn help(&self) -> &str {
        "Display the entry stored for a website, including its password.\n\n\
         The lookup is exact and case-sensitive; on a miss the closest\n\
         stored website is suggested.\n\n\
         Examples:\n  \
           show github.com\n  \
           get example.org"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        if args.is_empty() {
            return CommandResult::error(format!("Usage: {}\nMissing website name", self.usage()));
        }

        let name = args[0];
        log::debug!("Showing entry for {}", name);

        match ctx.store.find_by_website(name) {
            Some((_, entry)) => {
                let mut output = entry.to_string();
                match entry.password() {
                    Some(password) => {
                        output.push_str(&format!("\nPassword: {}", password));
                    }
                    None => output.push_str("\nNo password stored."),
                }
                CommandResult::success(output)
            }
            None => {
                log::debug!("No entry for website: {}", name);
                CommandResult::error(ctx.unknown_website(name))
            }
        }
    }

    fn completions(&self, arg_index: usize, partial: &str, ctx: &ShellContext) -> Vec<String> {
        if arg_index == 0 {
            ctx.site_trie.completions(partial)
        } else {
            vec![]
        }
    }

    fn min_args(&self) -> usize {
        1
    }

    fn max_args(&self) -> Option<usize> {
        Some(1)
    }
}

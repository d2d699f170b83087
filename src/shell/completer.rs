//! Tab completion for the shell.
//!
//! Completes command names at the start of the line and, per command,
//! stored website names or field selectors for the arguments.

use rustyline::Context;
use rustyline::completion::{Completer, Pair};
use std::sync::{Arc, RwLock};

use crate::shell::command::CommandRegistry;
use crate::trie::Trie;

/// Completer over the command registry and the live website trie.
pub struct VaultCompleter {
    registry: Arc<CommandRegistry>,
    site_trie: Arc<RwLock<Trie>>,
}

/// What the cursor is currently on.
enum Position<'a> {
    Command {
        partial: &'a str,
    },
    Argument {
        command: &'a str,
        arg_index: usize,
        partial: &'a str,
    },
}

impl VaultCompleter {
    pub fn new(registry: Arc<CommandRegistry>, site_trie: Arc<RwLock<Trie>>) -> Self {
        Self {
            registry,
            site_trie,
        }
    }

    fn complete_command(&self, partial: &str) -> Vec<Pair> {
        to_pairs(self.registry.completions(partial))
    }

    fn complete_site(&self, partial: &str) -> Vec<Pair> {
        match self.site_trie.read() {
            Ok(trie) => to_pairs(trie.completions(partial)),
            Err(_) => vec![],
        }
    }

    fn complete_field(&self, partial: &str) -> Vec<Pair> {
        to_pairs(
            ["website", "username", "password"]
                .iter()
                .filter(|f| f.starts_with(partial))
                .map(|f| f.to_string())
                .collect(),
        )
    }

    /// Splits the line up to the cursor into command/argument position.
    fn parse_position<'a>(&self, line: &'a str, pos: usize) -> Position<'a> {
        let line_to_pos = &line[..pos];
        let parts: Vec<&str> = line_to_pos.split_whitespace().collect();

        if parts.is_empty() {
            return Position::Command { partial: "" };
        }

        let ends_with_space = line_to_pos.ends_with(' ');
        if parts.len() == 1 && !ends_with_space {
            return Position::Command { partial: parts[0] };
        }

        let (arg_index, partial) = if ends_with_space {
            (parts.len() - 1, "")
        } else {
            (parts.len() - 2, *parts.last().unwrap_or(&""))
        };

        Position::Argument {
            command: parts[0],
            arg_index,
            partial,
        }
    }

    fn argument_completions(&self, command: &str, arg_index: usize, partial: &str) -> Vec<Pair> {
        // Resolve aliases to the primary name first, so dispatch does not
        // have to enumerate them.
        let Some(cmd) = self.registry.get(command) else {
            return vec![];
        };

        match (cmd.name(), arg_index) {
            ("show", 0) | ("remove", 0) | ("update", 0) => self.complete_site(partial),
            ("update", 1) => self.complete_field(partial),
            ("help", 0) => self.complete_command(partial),
            _ => vec![],
        }
    }
}

fn to_pairs(candidates: Vec<String>) -> Vec<Pair> {
    candidates
        .into_iter()
        .map(|s| Pair {
            display: s.clone(),
            replacement: s,
        })
        .collect()
}

impl Completer for VaultCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        match self.parse_position(line, pos) {
            Position::Command { partial } => {
                Ok((pos - partial.len(), self.complete_command(partial)))
            }
            Position::Argument {
                command,
                arg_index,
                partial,
            } => Ok((
                pos - partial.len(),
                self.argument_completions(command, arg_index, partial),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::commands::register_all;

    fn setup() -> VaultCompleter {
        let mut registry = CommandRegistry::new();
        register_all(&mut registry);

        let mut site_trie = Trie::new();
        site_trie.insert("github.com");
        site_trie.insert("gitlab.com");
        site_trie.insert("example.org");

        VaultCompleter::new(Arc::new(registry), Arc::new(RwLock::new(site_trie)))
    }

    #[test]
    fn test_complete_command_prefix() {
        let completer = setup();
        let pairs = completer.complete_command("ge");
        let names: Vec<&str> = pairs.iter().map(|p| p.display.as_str()).collect();

        assert!(names.contains(&"gen"));
        assert!(names.contains(&"generate"));
        assert!(names.contains(&"get"));
    }

    #[test]
    fn test_complete_sites_for_show() {
        let completer = setup();
        let pairs = completer.argument_completions("show", 0, "git");
        let names: Vec<&str> = pairs.iter().map(|p| p.display.as_str()).collect();

        assert_eq!(names, vec!["github.com", "gitlab.com"]);
    }

    #[test]
    fn test_complete_sites_through_alias() {
        let completer = setup();
        let pairs = completer.argument_completions("rm", 0, "ex");
        let names: Vec<&str> = pairs.iter().map(|p| p.display.as_str()).collect();

        assert_eq!(names, vec!["example.org"]);
    }

    #[test]
    fn test_complete_update_fields() {
        let completer = setup();
        let pairs = completer.argument_completions("update", 1, "u");
        let names: Vec<&str> = pairs.iter().map(|p| p.display.as_str()).collect();

        assert_eq!(names, vec!["username"]);
    }

    #[test]
    fn test_add_has_no_completions() {
        let completer = setup();
        assert!(completer.argument_completions("add", 0, "git").is_empty());
    }

    #[test]
    fn test_parse_position() {
        let completer = setup();

        assert!(matches!(
            completer.parse_position("sh", 2),
            Position::Command { partial: "sh" }
        ));
        assert!(matches!(
            completer.parse_position("show gi", 7),
            Position::Argument {
                command: "show",
                arg_index: 0,
                partial: "gi"
            }
        ));
        assert!(matches!(
            completer.parse_position("update github.com ", 18),
            Position::Argument {
                command: "update",
                arg_index: 1,
                partial: ""
            }
        ));
    }
}

//! Inline hints for the shell.
//!
//! Shows the remainder of an unambiguous command while it is being typed,
//! and the missing arguments of a recognized command afterwards.

use rustyline::Context;
use rustyline::hint::Hinter;
use std::sync::Arc;

use crate::shell::command::CommandRegistry;

/// Hinter backed by the command registry.
pub struct VaultHinter {
    registry: Arc<CommandRegistry>,
}

impl VaultHinter {
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }

    fn hint_for(&self, line: &str) -> Option<String> {
        let has_trailing_space = line.ends_with(' ');
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let command = parts[0];

        // Still typing the command: complete it when unambiguous.
        if parts.len() == 1 && !has_trailing_space {
            let completions = self.registry.completions(command);
            if let [only] = completions.as_slice() {
                if only.starts_with(command) && only != command {
                    return Some(only[command.len()..].to_string());
                }
            }
            return None;
        }

        // Command typed: hint the arguments that are still missing.
        let cmd = self.registry.get(command)?;
        let arg_count = parts.len() - 1;
        if arg_count >= cmd.min_args() {
            return None;
        }

        let args_part = cmd.usage().strip_prefix(cmd.name())?.trim();
        if args_part.is_empty() {
            return None;
        }

        let pieces: Vec<&str> = args_part.split_whitespace().collect();
        if arg_count < pieces.len() {
            return Some(format!(" {}", pieces[arg_count..].join(" ")));
        }
        None
    }
}

impl Hinter for VaultHinter {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<Self::Hint> {
        // Only hint at the end of the line.
        if pos < line.len() {
            return None;
        }
        self.hint_for(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::commands::register_all;

    fn setup() -> VaultHinter {
        let mut registry = CommandRegistry::new();
        register_all(&mut registry);
        VaultHinter::new(Arc::new(registry))
    }

    #[test]
    fn test_unambiguous_command_completion() {
        let hinter = setup();
        // "si" can only become "sites".
        assert_eq!(hinter.hint_for("si"), Some("tes".to_string()));
    }

    #[test]
    fn test_ambiguous_prefix_no_hint() {
        let hinter = setup();
        // "ge" matches get, gen and generate.
        assert_eq!(hinter.hint_for("ge"), None);
    }

    #[test]
    fn test_usage_hint_after_command() {
        let hinter = setup();
        let hint = hinter.hint_for("add ").unwrap();
        assert!(hint.contains("<website>"));

        let hint = hinter.hint_for("add github.com ").unwrap();
        assert!(hint.contains("<username>"));
        assert!(!hint.contains("<website>"));
    }

    #[test]
    fn test_no_hint_when_args_satisfied() {
        let hinter = setup();
        assert_eq!(hinter.hint_for("add github.com octocat"), None);
        assert_eq!(hinter.hint_for("list"), None);
    }

    #[test]
    fn test_empty_line_no_hint() {
        let hinter = setup();
        assert_eq!(hinter.hint_for(""), None);
        assert_eq!(hinter.hint_for("   "), None);
    }
}

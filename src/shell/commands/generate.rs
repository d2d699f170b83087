//! Generate command.

use crate::generator::{GeneratorConfig, generate_password};
use crate::shell::command::{Command, CommandResult, ShellContext};

/// Generates a random password from the word source.
pub struct GenerateCommand;

impl Command for GenerateCommand {
    fn name(&self) -> &str {
        "generate"
    }

    fn aliases(&self) -> &[&str] {
        &["gen"]
    }

    fn description(&self) -> &str {
        "Generate a random password"
    }

    fn usage(&self) -> &str {
        "generate [min] [max] [plain]"
    }

    fn help(&self) -> &str {
        "Generate a random password from a digit, a dictionary word and a\n\
         special character, shuffled together.\n\n\
         Arguments:\n  \
           [min]   - Minimum length (default 7)\n  \
           [max]   - Maximum length (default 25)\n  \
           [plain] - Literal 'plain' to skip the special character\n\n\
         Examples:\n  \
           generate\n  \
           generate 10 16\n  \
           gen 10 16 plain"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        let mut config = GeneratorConfig::default();

        if let Some(min) = args.first() {
            match min.parse() {
                Ok(min) => config.min_length = min,
                Err(_) => {
                    return CommandResult::error(format!("'{}' is not a valid length", min));
                }
            }
        }
        if let Some(max) = args.get(1) {
            match max.parse() {
                Ok(max) => config.max_length = max,
                Err(_) => {
                    return CommandResult::error(format!("'{}' is not a valid length", max));
                }
            }
        }
        match args.get(2) {
            None => {}
            Some(&"plain") => config.include_special = false,
            Some(other) => {
                return CommandResult::error(format!(
                    "Unexpected argument '{}' (did you mean 'plain'?)",
                    other
                ));
            }
        }

        log::debug!(
            "Generating password with bounds {}..={}",
            config.min_length,
            config.max_length
        );

        match generate_password(&config, ctx.words) {
            Ok(password) => CommandResult::success(password),
            Err(e) => {
                log::warn!("Password generation failed: {}", e);
                CommandResult::error(e.to_string())
            }
        }
    }

    fn min_args(&self) -> usize {
        0
    }

    fn max_args(&self) -> Option<usize> {
        Some(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::SPECIAL_CHARACTERS;
    use crate::store::EntryStore;
    use crate::trie::Trie;
    use crate::wordlist::WordSource;

    fn words() -> WordSource {
        WordSource::from_words(vec!["apple".into(), "banana".into(), "cherry".into()])
    }

    #[test]
    fn test_generate_default_bounds() {
        let mut store = EntryStore::new();
        let words = words();
        let mut trie = Trie::new();
        let mut ctx = ShellContext::new(&mut store, &words, &mut trie);

        let result = GenerateCommand.execute(&[], &mut ctx);

        match result {
            CommandResult::Success(Some(pw)) => {
                assert!((7..=25).contains(&pw.chars().count()));
            }
            _ => panic!("Expected a password"),
        }
        // Generating does not touch the store.
        assert!(!ctx.modified);
    }

    #[test]
    fn test_generate_custom_bounds() {
        let mut store = EntryStore::new();
        let words = words();
        let mut trie = Trie::new();
        let mut ctx = ShellContext::new(&mut store, &words, &mut trie);

        let result = GenerateCommand.execute(&["8", "12"], &mut ctx);

        match result {
            CommandResult::Success(Some(pw)) => {
                assert!((8..=12).contains(&pw.chars().count()));
            }
            _ => panic!("Expected a password"),
        }
    }

    #[test]
    fn test_generate_plain() {
        let mut store = EntryStore::new();
        let words = words();
        let mut trie = Trie::new();
        let mut ctx = ShellContext::new(&mut store, &words, &mut trie);

        let result = GenerateCommand.execute(&["7", "25", "plain"], &mut ctx);

        match result {
            CommandResult::Success(Some(pw)) => {
                assert!(!pw.chars().any(|c| SPECIAL_CHARACTERS.contains(c)));
            }
            _ => panic!("Expected a password"),
        }
    }

    #[test]
    fn test_generate_invalid_bounds() {
        let mut store = EntryStore::new();
        let words = words();
        let mut trie = Trie::new();
        let mut ctx = ShellContext::new(&mut store, &words, &mut trie);

        let result = GenerateCommand.execute(&["30", "25"], &mut ctx);

        match result {
            CommandResult::Error(msg) => assert!(msg.contains("greater than")),
            _ => panic!("Expected a configuration error"),
        }
    }

    #[test]
    fn test_generate_non_numeric_length() {
        let mut store = EntryStore::new();
        let words = words();
        let mut trie = Trie::new();
        let mut ctx = ShellContext::new(&mut store, &words, &mut trie);

        let result = GenerateCommand.execute(&["long"], &mut ctx);
        assert!(matches!(result, CommandResult::Error(_)));
    }

    #[test]
    fn test_generate_unknown_flag() {
        let mut store = EntryStore::new();
        let words = words();
        let mut trie = Trie::new();
        let mut ctx = ShellContext::new(&mut store, &words, &mut trie);

        let result = GenerateCommand.execute(&["7", "25", "nosymbols"], &mut ctx);
        assert!(matches!(result, CommandResult::Error(_)));
    }
}

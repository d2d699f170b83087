//! Remove command.

use crate::shell::command::{Command, CommandResult, ShellContext};

/// Removes an entry, looked up by exact website name.
pub struct RemoveCommand;

impl Command for RemoveCommand {
    fn name(&self) -> &str {
        "remove"
    }

    fn aliases(&self) -> &[&str] {
        &["rm", "delete", "del"]
    }

    fn description(&self) -> &str {
        "Remove the entry for a website"
    }

    fn usage(&self) -> &str {
        "remove <website>"
    }

    fn help(&self) -> &str {
        "Remove an entry from the database.\n\n\
         Arguments:\n  \
           <website> - Website of the entry to remove\n\n\
         When several entries share a website, the oldest one is removed.\n\n\
         Examples:\n  \
           remove github.com\n  \
           rm example.org"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        if args.is_empty() {
            return CommandResult::error(format!("Usage: {}\nMissing website name", self.usage()));
        }

        let name = args[0];
        log::debug!("Removing entry for {}", name);

        let Some((id, _)) = ctx.store.find_by_website(name) else {
            log::debug!("No entry to remove for: {}", name);
            return CommandResult::error(ctx.unknown_website(name));
        };

        match ctx.store.remove(id) {
            Ok(removed) => {
                // Keep the completion trie in sync; another entry may still
                // use the same website.
                if ctx.store.find_by_website(name).is_none() {
                    ctx.site_trie.remove(name);
                }
                ctx.mark_modified();
                log::info!("Removed entry for {}", removed.website());
                CommandResult::success(format!(
                    "Entry for '{}' removed from the database.",
                    removed.website()
                ))
            }
            Err(e) => CommandResult::error(e.to_string()),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Entry;
    use crate::store::EntryStore;
    use crate::trie::Trie;
    use crate::wordlist::WordSource;

    #[test]
    fn test_remove_success() {
        let mut store = EntryStore::new();
        store
            .add(Entry::new("github.com", "octocat", None).unwrap())
            .unwrap();
        let words = WordSource::from_words(vec![]);
        let mut trie = Trie::new();
        trie.insert("github.com");
        let mut ctx = ShellContext::new(&mut store, &words, &mut trie);

        let result = RemoveCommand.execute(&["github.com"], &mut ctx);

        assert!(matches!(result, CommandResult::Success(_)));
        assert!(ctx.modified);
        assert!(!ctx.site_trie.contains("github.com"));
        drop(ctx);
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_keeps_trie_entry_for_remaining_site() {
        let mut store = EntryStore::new();
        store
            .add(Entry::new("github.com", "octocat", None).unwrap())
            .unwrap();
        store
            .add(Entry::new("github.com", "hubot", None).unwrap())
            .unwrap();
        let words = WordSource::from_words(vec![]);
        let mut trie = Trie::new();
        trie.insert("github.com");
        let mut ctx = ShellContext::new(&mut store, &words, &mut trie);

        let result = RemoveCommand.execute(&["github.com"], &mut ctx);

        assert!(matches!(result, CommandResult::Success(_)));
        // The second entry still lives under the same website.
        assert!(ctx.site_trie.contains("github.com"));
        drop(ctx);
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.find_by_website("github.com").unwrap().1.username(),
            "hubot"
        );
    }

    #[test]
    fn test_remove_miss_suggests_closest() {
        let mut store = EntryStore::new();
        store
            .add(Entry::new("github.com", "octocat", None).unwrap())
            .unwrap();
        let words = WordSource::from_words(vec![]);
        let mut trie = Trie::new();
        let mut ctx = ShellContext::new(&mut store, &words, &mut trie);

        let result = RemoveCommand.execute(&["guthub.com"], &mut ctx);

        match result {
            CommandResult::Error(msg) => assert!(msg.contains("Did you mean")),
            _ => panic!("Expected miss"),
        }
        assert!(!ctx.modified);
    }

    #[test]
    fn test_remove_missing_args() {
        let mut store = EntryStore::new();
        let words = WordSource::from_words(vec![]);
        let mut trie = Trie::new();
        let mut ctx = ShellContext::new(&mut store, &words, &mut trie);

        let result = RemoveCommand.execute(&[], &mut ctx);
        assert!(matches!(result, CommandResult::Error(_)));
    }
}

//! Command trait and registry for the interactive shell.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::fuzzy;
use crate::store::EntryStore;
use crate::trie::Trie;
use crate::wordlist::WordSource;

/// Result of executing a command.
#[derive(Debug, Clone)]
pub enum CommandResult {
    /// Command executed successfully with optional message.
    Success(Option<String>),
    /// Command failed with error message.
    Error(String),
    /// Signal to exit the shell.
    Exit,
    /// Continue without output.
    Continue,
}

impl CommandResult {
    pub fn success(msg: impl Into<String>) -> Self {
        CommandResult::Success(Some(msg.into()))
    }

    #[allow(unused)]
    pub fn ok() -> Self {
        CommandResult::Success(None)
    }

    pub fn error(msg: impl Into<String>) -> Self {
        CommandResult::Error(msg.into())
    }
}

/// Context available to commands during execution.
pub struct ShellContext<'a> {
    /// The entry store being operated on.
    pub store: &'a mut EntryStore,
    /// Vocabulary for the generate command.
    pub words: &'a WordSource,
    /// Set when a command mutated the store; the shell persists afterwards.
    pub modified: bool,
    /// Registry reference for the help command.
    pub registry: Option<&'a CommandRegistry>,
    /// Trie of stored website names, kept in sync for completion.
    pub site_trie: &'a mut Trie,
}

impl<'a> ShellContext<'a> {
    pub fn new(store: &'a mut EntryStore, words: &'a WordSource, site_trie: &'a mut Trie) -> Self {
        Self {
            store,
            words,
            modified: false,
            registry: None,
            site_trie,
        }
    }

    pub fn with_registry(mut self, registry: &'a CommandRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn mark_modified(&mut self) {
        self.modified = true;
    }

    /// Error text for a failed website lookup, with a closest-match
    /// suggestion when the store has anything to suggest.
    pub fn unknown_website(&self, name: &str) -> String {
        match fuzzy::closest(name, &self.store.websites()) {
            Some(suggestion) => format!(
                "No entry found for '{}'. Did you mean '{}'?",
                name, suggestion
            ),
            None => format!(
                "No entry found for '{}'. The database is currently empty.",
                name
            ),
        }
    }
}

/// A command that can be executed in the shell.
pub trait Command: Send + Sync {
    /// Primary name of the command.
    fn name(&self) -> &str;

    /// Alternative names.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Short description shown in the command listing.
    fn description(&self) -> &str;

    /// Usage line, e.g. `"add <website> <username> [password]"`.
    fn usage(&self) -> &str;

    /// Detailed help text.
    fn help(&self) -> &str {
        self.description()
    }

    /// Executes the command.
    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult;

    /// Completions for the argument at `arg_index` given `partial` input.
    #[allow(unused)]
    fn completions(&self, _arg_index: usize, _partial: &str, _ctx: &ShellContext) -> Vec<String> {
        vec![]
    }

    /// Minimum number of required arguments.
    fn min_args(&self) -> usize {
        0
    }

    /// Maximum number of arguments (None = unlimited).
    #[allow(unused)]
    fn max_args(&self) -> Option<usize> {
        None
    }
}

impl fmt::Debug for dyn Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name())
            .field("description", &self.description())
            .finish()
    }
}

/// Registry of all available commands.
pub struct CommandRegistry {
    commands: HashMap<String, Arc<dyn Command>>,
    aliases: HashMap<String, String>,
    name_trie: Trie,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            aliases: HashMap::new(),
            name_trie: Trie::new(),
        }
    }

    pub fn register(&mut self, command: Arc<dyn Command>) {
        let name = command.name().to_string();
        self.name_trie.insert(&name);

        for alias in command.aliases() {
            self.aliases.insert(alias.to_string(), name.clone());
            self.name_trie.insert(alias);
        }

        self.commands.insert(name, command);
    }

    /// Looks up a command by name or alias.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Command>> {
        if let Some(cmd) = self.commands.get(name) {
            return Some(Arc::clone(cmd));
        }
        if let Some(primary) = self.aliases.get(name) {
            return self.commands.get(primary).map(Arc::clone);
        }
        None
    }

    pub fn commands(&self) -> impl Iterator<Item = &Arc<dyn Command>> {
        self.commands.values()
    }

    /// Command-name completions (primary names and aliases).
    pub fn completions(&self, prefix: &str) -> Vec<String> {
        self.name_trie.completions(prefix)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Entry;

    struct TestCommand;

    impl Command for TestCommand {
        fn name(&self) -> &str {
            "test"
        }

        fn aliases(&self) -> &[&str] {
            &["t"]
        }

        fn description(&self) -> &str {
            "A test command"
        }

        fn usage(&self) -> &str {
            "test [args...]"
        }

        fn execute(&self, args: &[&str], _ctx: &mut ShellContext) -> CommandResult {
            if args.is_empty() {
                CommandResult::ok()
            } else {
                CommandResult::success(format!("Args: {:?}", args))
            }
        }
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(TestCommand));

        assert!(registry.get("test").is_some());
        assert!(registry.get("t").is_some());
        assert!(registry.get("unknown").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_completions_include_aliases() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(TestCommand));

        let completions = registry.completions("t");
        assert!(completions.contains(&"test".to_string()));
        assert!(completions.contains(&"t".to_string()));
    }

    #[test]
    fn test_unknown_website_suggestion() {
        let mut store = EntryStore::new();
        store
            .add(Entry::new("github.com", "octocat", None).unwrap())
            .unwrap();
        let words = WordSource::from_words(vec![]);
        let mut trie = Trie::new();
        let ctx = ShellContext::new(&mut store, &words, &mut trie);

        let msg = ctx.unknown_website("githib.com");
        assert!(msg.contains("Did you mean 'github.com'?"));
    }

    #[test]
    fn test_unknown_website_empty_store() {
        let mut store = EntryStore::new();
        let words = WordSource::from_words(vec![]);
        let mut trie = Trie::new();
        let ctx = ShellContext::new(&mut store, &words, &mut trie);

        let msg = ctx.unknown_website("github.com");
        assert!(msg.contains("currently empty"));
    }
}

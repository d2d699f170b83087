//! Interactive shell built on rustyline.
//!
//! Provides command completion, inline hints, input highlighting and
//! persistent history. Mutating commands set a modified flag; the shell
//! persists the store through a caller-supplied save function after each
//! such command, so the on-disk snapshot always reflects the last
//! successful mutation.

pub mod command;
pub mod commands;
pub mod completer;
pub mod highlighter;
pub mod hints;
pub mod history;

use anyhow::{Result, anyhow};
use rustyline::completion::Completer;
use rustyline::config::Configurer;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::FileHistory;
use rustyline::validate::{
    MatchingBracketValidator, ValidationContext, ValidationResult, Validator,
};
use rustyline::{Context, Editor, Helper};
use std::borrow::Cow;
use std::sync::{Arc, RwLock};

use crate::store::EntryStore;
use crate::trie::Trie;
use crate::wordlist::WordSource;

use command::{CommandRegistry, CommandResult, ShellContext};
use commands::register_all;
use completer::VaultCompleter;
use highlighter::{OutputHighlighter, VaultHighlighter};
use hints::VaultHinter;
use history::HistoryConfig;

/// The prompt displayed to the user.
const PROMPT: &str = "pwvault> ";

/// Combined rustyline helper wiring completion, hints and highlighting.
pub struct VaultHelper {
    completer: VaultCompleter,
    highlighter: VaultHighlighter,
    hinter: VaultHinter,
    validator: MatchingBracketValidator,
}

impl VaultHelper {
    pub fn new(registry: Arc<CommandRegistry>, site_trie: Arc<RwLock<Trie>>) -> Self {
        Self {
            completer: VaultCompleter::new(Arc::clone(&registry), Arc::clone(&site_trie)),
            highlighter: VaultHighlighter::new(Arc::clone(&registry)),
            hinter: VaultHinter::new(registry),
            validator: MatchingBracketValidator::new(),
        }
    }
}

impl Completer for VaultHelper {
    type Candidate = rustyline::completion::Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        self.completer.complete(line, pos, ctx)
    }
}

impl Highlighter for VaultHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        self.highlighter.highlight_prompt(prompt, default)
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        self.highlighter.highlight_hint(hint)
    }

    fn highlight_candidate<'c>(
        &self,
        candidate: &'c str,
        completion: rustyline::CompletionType,
    ) -> Cow<'c, str> {
        self.highlighter.highlight_candidate(candidate, completion)
    }

    fn highlight_char(&self, line: &str, pos: usize, kind: rustyline::highlight::CmdKind) -> bool {
        self.highlighter.highlight_char(line, pos, kind)
    }
}

impl Hinter for VaultHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<Self::Hint> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Validator for VaultHelper {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        self.validator.validate(ctx)
    }
}

impl Helper for VaultHelper {}

/// Configuration for the shell.
pub struct ShellConfig {
    pub history: HistoryConfig,
    pub show_welcome: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            show_welcome: true,
        }
    }
}

/// The interactive shell.
pub struct Shell {
    registry: Arc<CommandRegistry>,
    site_trie: Arc<RwLock<Trie>>,
    config: ShellConfig,
}

impl Shell {
    pub fn new() -> Self {
        Self::with_config(ShellConfig::default())
    }

    pub fn with_config(config: ShellConfig) -> Self {
        let mut registry = CommandRegistry::new();
        register_all(&mut registry);

        Self {
            registry: Arc::new(registry),
            site_trie: Arc::new(RwLock::new(Trie::new())),
            config,
        }
    }

    /// Seeds the website trie from the store's current contents.
    fn init_site_trie(&self, store: &EntryStore) {
        if let Ok(mut trie) = self.site_trie.write() {
            trie.clear();
            for website in store.websites() {
                trie.insert(website);
            }
            log::debug!("Initialized site trie with {} websites", trie.len());
        }
    }

    /// Runs the shell until quit/EOF. `save_fn` is invoked with the store
    /// after every command that modified it.
    pub fn run_with_save<F>(
        &self,
        store: &mut EntryStore,
        words: &WordSource,
        mut save_fn: F,
    ) -> Result<()>
    where
        F: FnMut(&EntryStore) -> Result<()>,
    {
        self.init_site_trie(store);

        let helper = VaultHelper::new(Arc::clone(&self.registry), Arc::clone(&self.site_trie));
        let mut editor: Editor<VaultHelper, FileHistory> = Editor::new()?;
        editor.set_helper(Some(helper));
        editor.set_max_history_size(self.config.history.max_entries)?;

        if self.config.history.path.exists() {
            if let Err(e) = editor.load_history(&self.config.history.path) {
                log::warn!("Could not load history: {}", e);
            } else {
                log::debug!("Loaded history from {}", self.config.history.path.display());
            }
        }

        if self.config.show_welcome {
            println!("Unlocked. Type 'help' for available commands.");
        }

        log::info!("Shell started");

        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    let _ = editor.add_history_entry(line);

                    let mut trie_guard = self
                        .site_trie
                        .write()
                        .map_err(|e| anyhow!("Site trie lock poisoned: {}", e))?;
                    let mut ctx = ShellContext::new(store, words, &mut trie_guard)
                        .with_registry(&self.registry);

                    let result = self.execute_with_context(line, &mut ctx);
                    let was_modified = ctx.modified;
                    drop(trie_guard);

                    match result {
                        CommandResult::Success(Some(msg)) => println!("{}", msg),
                        CommandResult::Success(None) => {}
                        CommandResult::Error(msg) => {
                            eprintln!("{}", OutputHighlighter::error(&msg));
                        }
                        CommandResult::Exit => break,
                        CommandResult::Continue => {}
                    }

                    if was_modified {
                        if let Err(e) = save_fn(store) {
                            eprintln!(
                                "{}",
                                OutputHighlighter::error(&format!("Failed to save: {}", e))
                            );
                            log::error!("Failed to save store: {}", e);
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("exit");
                    log::info!("EOF received (Ctrl-D)");
                    break;
                }
                Err(err) => {
                    eprintln!("{}", OutputHighlighter::error(&format!("Error: {}", err)));
                    log::error!("Readline error: {}", err);
                    break;
                }
            }
        }

        if let Some(parent) = self.config.history.path.parent() {
            if !parent.exists() {
                let _ = std::fs::create_dir_all(parent);
            }
        }
        if let Err(e) = editor.save_history(&self.config.history.path) {
            log::warn!("Failed to save history: {}", e);
        }

        log::info!("Shell exited");
        Ok(())
    }

    /// Parses and executes a single line against a store. Used by tests and
    /// non-interactive callers.
    pub fn execute_line(
        &self,
        line: &str,
        store: &mut EntryStore,
        words: &WordSource,
    ) -> CommandResult {
        let mut trie_guard = match self.site_trie.write() {
            Ok(guard) => guard,
            Err(e) => return CommandResult::error(format!("Site trie lock poisoned: {}", e)),
        };
        let mut ctx = ShellContext::new(store, words, &mut trie_guard).with_registry(&self.registry);
        self.execute_with_context(line, &mut ctx)
    }

    fn execute_with_context(&self, line: &str, ctx: &mut ShellContext) -> CommandResult {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&cmd_name, args)) = parts.split_first() else {
            return CommandResult::Continue;
        };

        log::debug!("Executing command: {}", cmd_name);

        match self.registry.get(cmd_name) {
            Some(cmd) => {
                let start = std::time::Instant::now();
                let result = cmd.execute(args, ctx);
                log::debug!("Command '{}' completed in {:?}", cmd_name, start.elapsed());
                result
            }
            None => CommandResult::error(format!(
                "Unknown command: '{}'\nType 'help' to see available commands.",
                cmd_name
            )),
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> WordSource {
        WordSource::from_words(vec!["apple".into(), "banana".into()])
    }

    #[test]
    fn test_shell_creation() {
        let shell = Shell::new();
        assert!(!shell.registry.is_empty());
    }

    #[test]
    fn test_execute_line_unknown_command() {
        let shell = Shell::new();
        let mut store = EntryStore::new();
        let words = words();

        let result = shell.execute_line("frobnicate", &mut store, &words);
        assert!(matches!(result, CommandResult::Error(_)));
    }

    #[test]
    fn test_execute_line_add_and_show() {
        let shell = Shell::new();
        let mut store = EntryStore::new();
        let words = words();

        let result = shell.execute_line("add github.com octocat hunter2", &mut store, &words);
        assert!(matches!(result, CommandResult::Success(_)));

        let result = shell.execute_line("show github.com", &mut store, &words);
        match result {
            CommandResult::Success(Some(msg)) => assert!(msg.contains("hunter2")),
            _ => panic!("Expected entry output"),
        }
    }

    #[test]
    fn test_execute_line_quit() {
        let shell = Shell::new();
        let mut store = EntryStore::new();
        let words = words();

        let result = shell.execute_line("quit", &mut store, &words);
        assert!(matches!(result, CommandResult::Exit));
    }

    #[test]
    fn test_site_trie_initialization() {
        let shell = Shell::new();
        let mut store = EntryStore::new();
        store
            .add(crate::entry::Entry::new("github.com", "octocat", None).unwrap())
            .unwrap();
        store
            .add(crate::entry::Entry::new("example.org", "alice", None).unwrap())
            .unwrap();

        shell.init_site_trie(&store);

        let trie = shell.site_trie.read().unwrap();
        assert!(trie.contains("github.com"));
        assert!(trie.contains("example.org"));
        assert_eq!(trie.len(), 2);
    }
}

//! Quit command.

use crate::shell::command::{Command, CommandResult, ShellContext};

/// Exits the shell.
pub struct QuitCommand;

impl Command for QuitCommand {
    fn name(&self) -> &str {
        "quit"
    }

    fn aliases(&self) -> &[&str] {
        &["exit", "q"]
    }

    fn description(&self) -> &str {
        "Exit the password manager"
    }

    fn usage(&self) -> &str {
        "quit"
    }

    fn help(&self) -> &str {
        "Exit the password manager. Changes are saved as they happen, so\n\
         nothing is lost on exit.\n\n\
         Examples:\n  \
           quit\n  \
           exit"
    }

    fn execute(&self, _args: &[&str], _ctx: &mut ShellContext) -> CommandResult {
        log::info!("User requested exit");
        CommandResult::Exit
    }

    fn min_args(&self) -> usize {
        0
    }

    fn max_args(&self) -> Option<usize> {
        Some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::EntryStore;
    use crate::trie::Trie;
    use crate::wordlist::WordSource;

    #[test]
    fn test_quit_signals_exit() {
        let mut store = EntryStore::new();
        let words = WordSource::from_words(vec![]);
        let mut trie = Trie::new();
        let mut ctx = ShellContext::new(&mut store, &words, &mut trie);

        let result = QuitCommand.execute(&[], &mut ctx);
        assert!(matches!(result, CommandResult::Exit));
    }
}

//! Input and output coloring for the shell.

use rustyline::highlight::{CmdKind, Highlighter};
use std::borrow::Cow;
use std::sync::Arc;

use crate::shell::command::CommandRegistry;

/// ANSI color codes used by the shell.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const WHITE: &str = "\x1b[37m";

    pub const BRIGHT_RED: &str = "\x1b[91m";
    pub const BRIGHT_CYAN: &str = "\x1b[96m";
}

/// Highlighter that colors recognized commands and their arguments.
pub struct VaultHighlighter {
    registry: Arc<CommandRegistry>,
}

impl VaultHighlighter {
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }

    fn highlight_line(&self, line: &str) -> String {
        if line.trim().is_empty() {
            return line.to_string();
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let command = parts[0];
        let known = self.registry.get(command).is_some();

        let mut result = String::new();
        let leading_ws = &line[..line.len() - line.trim_start().len()];
        result.push_str(leading_ws);

        if known {
            result.push_str(colors::BOLD);
            result.push_str(colors::CYAN);
        } else {
            result.push_str(colors::RED);
        }
        result.push_str(command);
        result.push_str(colors::RESET);

        let cmd_end = leading_ws.len() + command.len();
        let rest = &line[cmd_end..];
        if !rest.is_empty() {
            result.push_str(&self.highlight_arguments(command, rest));
        }

        result
    }

    fn highlight_arguments(&self, command: &str, args_str: &str) -> String {
        let primary = self
            .registry
            .get(command)
            .map(|cmd| cmd.name().to_string())
            .unwrap_or_default();

        let mut result = String::new();
        let mut pos = 0;
        let parts: Vec<&str> = args_str.split_whitespace().collect();

        for (i, part) in parts.iter().enumerate() {
            let part_start = args_str[pos..].find(part).unwrap_or(0) + pos;
            result.push_str(&args_str[pos..part_start]);

            let color = match (primary.as_str(), i) {
                // Website arguments stand out.
                ("add" | "show" | "remove" | "update", 0) => colors::MAGENTA,
                // Secrets are dimmed so they are less readable over a shoulder.
                ("add", 2) | ("update", 2) => colors::DIM,
                ("help", 0) => colors::YELLOW,
                _ => colors::WHITE,
            };

            result.push_str(color);
            result.push_str(part);
            result.push_str(colors::RESET);

            pos = part_start + part.len();
        }

        result.push_str(&args_str[pos..]);
        result
    }
}

impl Highlighter for VaultHighlighter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(self.highlight_line(line))
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        _default: bool,
    ) -> Cow<'b, str> {
        Cow::Owned(format!(
            "{}{}{}{}",
            colors::BOLD,
            colors::BRIGHT_CYAN,
            prompt,
            colors::RESET
        ))
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("{}{}{}", colors::DIM, hint, colors::RESET))
    }

    fn highlight_candidate<'c>(
        &self,
        candidate: &'c str,
        _completion: rustyline::CompletionType,
    ) -> Cow<'c, str> {
        Cow::Owned(format!(
            "{}{}{}",
            colors::BRIGHT_CYAN,
            candidate,
            colors::RESET
        ))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

/// Semantic coloring for command output.
pub struct OutputHighlighter;

impl OutputHighlighter {
    #[allow(unused)]
    pub fn success(msg: &str) -> String {
        format!("{}{}{}", colors::GREEN, msg, colors::RESET)
    }

    pub fn error(msg: &str) -> String {
        format!("{}{}{}", colors::BRIGHT_RED, msg, colors::RESET)
    }

    #[allow(unused)]
    pub fn warning(msg: &str) -> String {
        format!("{}{}{}", colors::YELLOW, msg, colors::RESET)
    }
}

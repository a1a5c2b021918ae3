//! Faux command line that fronts the cube.
//!
//! A flat dispatch table over a handful of commands. The only command with a
//! side effect outside the shell is `matrix`, which asks the caller to start
//! the animation.

/// Commands understood by `Shell::execute`, in help order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("help", "show this list"),
    ("matrix", "spin the 3D ASCII cube"),
    ("history", "list previously entered commands"),
    ("echo", "print the arguments"),
    ("clear", "clear the screen"),
    ("exit", "leave the shell"),
];

pub const PROMPT: &str = "guest@cube:~$ ";

/// Side effect requested by a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    StartAnimation,
    Clear,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub lines: Vec<String>,
    pub action: Option<ShellAction>,
}

impl Outcome {
    fn text(lines: Vec<String>) -> Self {
        Outcome { lines, action: None }
    }
}

#[derive(Debug, Default)]
pub struct Shell {
    history: Vec<String>,
    /// Position while walking history with Up/Down; `None` means "not walking".
    cursor: Option<usize>,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn execute(&mut self, input: &str) -> Outcome {
        let trimmed = input.trim();
        if !trimmed.is_empty() && !self.history.iter().any(|h| h == trimmed) {
            self.history.push(trimmed.to_string());
        }
        self.cursor = None;

        let mut words = trimmed.split_whitespace();
        let command = words.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = words.collect();

        match command.as_str() {
            "" => Outcome::text(vec![String::new()]),
            "help" => Outcome::text(help_lines()),
            "matrix" => Outcome {
                lines: lines(&[
                    "Initializing 3D ASCII Cube...",
                    "Starting rotation sequence...",
                    "",
                    "Press any key to exit.",
                    "",
                ]),
                action: Some(ShellAction::StartAnimation),
            },
            "history" => {
                let mut out = lines(&["Command History:", ""]);
                out.extend(
                    self.history
                        .iter()
                        .enumerate()
                        .map(|(i, cmd)| format!("{}. {cmd}", i + 1)),
                );
                Outcome::text(out)
            }
            "echo" => Outcome::text(vec![args.join(" ")]),
            "clear" => Outcome {
                lines: Vec::new(),
                action: Some(ShellAction::Clear),
            },
            "exit" => Outcome {
                lines: lines(&["Thank you for visiting!"]),
                action: Some(ShellAction::Exit),
            },
            other => {
                let mut out = vec![format!("bash: {other}: command not found")];
                let suggestions = suggest(other);
                if !suggestions.is_empty() {
                    out.push(String::new());
                    out.push("Did you mean one of these?".into());
                    out.extend(suggestions.iter().map(|s| format!("  {s}")));
                }
                out.push(String::new());
                out.push("Type \"help\" to see all available commands.".into());
                Outcome::text(out)
            }
        }
    }

    /// Tab completion: the single command starting with `input`, if unique.
    pub fn complete(&self, input: &str) -> Option<&'static str> {
        match suggest(input).as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Step back through history. Returns the entry to show, if any.
    pub fn history_up(&mut self) -> Option<&str> {
        if self.history.is_empty() {
            return None;
        }
        let index = match self.cursor {
            None => self.history.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(index);
        Some(self.history[index].as_str())
    }

    /// Step forward through history. Walking past the newest entry yields an
    /// empty line; `None` means the cursor was not in history.
    pub fn history_down(&mut self) -> Option<&str> {
        let next = self.cursor? + 1;
        if next >= self.history.len() {
            self.cursor = None;
            Some("")
        } else {
            self.cursor = Some(next);
            Some(self.history[next].as_str())
        }
    }
}

/// Commands whose name starts with `input`, case-insensitively.
pub fn suggest(input: &str) -> Vec<&'static str> {
    if input.is_empty() {
        return Vec::new();
    }
    let needle = input.to_lowercase();
    COMMANDS
        .iter()
        .map(|(name, _)| *name)
        .filter(|name| name.starts_with(&needle))
        .collect()
}

fn help_lines() -> Vec<String> {
    let mut out = lines(&["Available commands:", ""]);
    out.extend(COMMANDS.iter().map(|(name, about)| format!("  {name:<10}{about}")));
    out
}

fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_requests_animation() {
        let mut shell = Shell::new();
        let out = shell.execute("  MATRIX ");
        assert_eq!(out.action, Some(ShellAction::StartAnimation));
        assert_eq!(out.lines[0], "Initializing 3D ASCII Cube...");
    }

    #[test]
    fn unknown_command_lists_prefix_matches() {
        let mut shell = Shell::new();
        let out = shell.execute("he");
        assert_eq!(out.lines[0], "bash: he: command not found");
        assert!(out.lines.contains(&"  help".to_string()));
        assert_eq!(out.action, None);
    }

    #[test]
    fn unknown_command_without_matches_skips_suggestion_header() {
        let mut shell = Shell::new();
        let out = shell.execute("zzz");
        assert!(!out.lines.iter().any(|l| l.starts_with("Did you mean")));
    }

    #[test]
    fn history_is_deduplicated_and_numbered() {
        let mut shell = Shell::new();
        shell.execute("echo hi");
        shell.execute("help");
        shell.execute("echo hi");
        let out = shell.execute("history");
        assert_eq!(shell.history(), ["echo hi", "help", "history"]);
        assert_eq!(&out.lines[2..], ["1. echo hi", "2. help", "3. history"]);
    }

    #[test]
    fn echo_keeps_argument_case() {
        let mut shell = Shell::new();
        assert_eq!(shell.execute("ECHO Hello  World").lines, ["Hello World"]);
    }

    #[test]
    fn completion_requires_a_unique_match() {
        let shell = Shell::new();
        assert_eq!(shell.complete("ma"), Some("matrix"));
        assert_eq!(shell.complete("e"), None); // echo, exit
        assert_eq!(shell.complete(""), None);
    }

    #[test]
    fn history_walk_matches_terminal_behaviour() {
        let mut shell = Shell::new();
        assert_eq!(shell.history_up(), None);
        shell.execute("help");
        shell.execute("matrix");

        assert_eq!(shell.history_up(), Some("matrix"));
        assert_eq!(shell.history_up(), Some("help"));
        assert_eq!(shell.history_up(), Some("help"));
        assert_eq!(shell.history_down(), Some("matrix"));
        assert_eq!(shell.history_down(), Some(""));
        assert_eq!(shell.history_down(), None);
    }

    #[test]
    fn clear_and_exit_carry_actions() {
        let mut shell = Shell::new();
        assert_eq!(shell.execute("clear").action, Some(ShellAction::Clear));
        assert_eq!(shell.execute("exit").action, Some(ShellAction::Exit));
    }
}

//! Interactive input lines.

/// One line typed at the interactive prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum InputCommand {
    /// A question for the answer service
    Ask(String),
    /// `:expand N`
    Expand(usize),
    /// `:collapse N`
    Collapse(usize),
    /// `exit` or `quit`
    Quit,
    /// Blank line
    Empty,
    /// A `:` command that could not be understood
    Invalid(String),
}

impl InputCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return InputCommand::Empty;
        }
        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            return InputCommand::Quit;
        }

        let Some(command) = line.strip_prefix(':') else {
            return InputCommand::Ask(line.to_string());
        };

        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let number = parts.next().and_then(|n| n.parse::<usize>().ok());

        match (name, number, parts.next()) {
            ("expand", Some(n), None) => InputCommand::Expand(n),
            ("collapse", Some(n), None) => InputCommand::Collapse(n),
            ("quit" | "exit", None, None) => InputCommand::Quit,
            _ => InputCommand::Invalid(line.to_string()),
        }
    }
}

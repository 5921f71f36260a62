//! Operations a host applies to a step indicator.
//!
//! Hosts translate their own input (key presses, command lines, scripted
//! drivers) into [`Op`] values, so the translation can be tested apart from
//! the terminal.
//!
//! Uses tagged enum serialization for TypeScript compatibility:
//! ```json
//! { "type": "setStep", "payload": "3" }
//! ```

use serde::Deserialize;
use serde::Serialize;
use ts_rs::TS;

/// A change requested of the indicator or its step list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Op {
    /// Set the current step from a raw, possibly non-numeric, value.
    SetStep(String),

    /// Advance the current step by one.
    Next,

    /// Move the current step back by one.
    Previous,

    /// Append a step with the given label.
    AddStep(String),

    /// Remove the last step.
    RemoveStep,

    /// Leave the host.
    Quit,
}

impl Op {
    /// Parses a command line such as `step 3`, `add Review` or `remove`.
    ///
    /// Returns `None` for empty input or an unknown command.
    pub fn parse_command(input: &str) -> Option<Op> {
        let input = input.trim();
        let (command, rest) = match input.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command {
            "step" => Some(Op::SetStep(rest.to_string())),
            "next" => Some(Op::Next),
            "prev" | "previous" => Some(Op::Previous),
            "add" if !rest.is_empty() => Some(Op::AddStep(rest.to_string())),
            "remove" => Some(Op::RemoveStep),
            "quit" | "q" => Some(Op::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(Op::parse_command("step 3"), Some(Op::SetStep("3".to_string())));
        assert_eq!(
            Op::parse_command("  step abc "),
            Some(Op::SetStep("abc".to_string()))
        );
        assert_eq!(Op::parse_command("step"), Some(Op::SetStep(String::new())));
        assert_eq!(
            Op::parse_command("add Final review"),
            Some(Op::AddStep("Final review".to_string()))
        );
        assert_eq!(Op::parse_command("add"), None);
        assert_eq!(Op::parse_command("remove"), Some(Op::RemoveStep));
        assert_eq!(Op::parse_command("prev"), Some(Op::Previous));
        assert_eq!(Op::parse_command("next"), Some(Op::Next));
        assert_eq!(Op::parse_command("q"), Some(Op::Quit));
        assert_eq!(Op::parse_command(""), None);
        assert_eq!(Op::parse_command("jump 2"), None);
    }
}

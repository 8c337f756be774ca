use std::fmt;

/// Prefix of the `add <name>` command, matched case-insensitively.
const ADD_PREFIX: &str = "add ";

/// What a submitted command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    Cleared,
    Refreshed,
    /// Item name exactly as typed after the `add ` prefix.
    Added(String),
    /// The trimmed command text that matched nothing.
    Unknown(String),
}

impl CommandResult {
    /// Classifies a command line. Surrounding whitespace is ignored, keywords
    /// are matched case-insensitively.
    pub fn classify(text: &str) -> Self {
        let text = text.trim();
        if text.eq_ignore_ascii_case("clear") {
            CommandResult::Cleared
        } else if text.eq_ignore_ascii_case("refresh") {
            CommandResult::Refreshed
        } else if let Some(name) = strip_prefix_ignore_case(text, ADD_PREFIX) {
            CommandResult::Added(name.to_string())
        } else {
            CommandResult::Unknown(text.to_string())
        }
    }
}

impl CommandResult {
    /// Short name of the matched command.
    pub fn kind(&self) -> &'static str {
        match self {
            CommandResult::Cleared => "clear",
            CommandResult::Refreshed => "refresh",
            CommandResult::Added(_) => "add",
            CommandResult::Unknown(_) => "unknown",
        }
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandResult::Cleared => write!(f, "Data cleared"),
            CommandResult::Refreshed => write!(f, "Data refreshed"),
            CommandResult::Added(name) => write!(f, "Added item: {name}"),
            CommandResult::Unknown(text) => write!(f, "Unknown command: {text}"),
        }
    }
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        text.get(prefix.len()..)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_is_trimmed_and_case_insensitive() {
        assert_eq!(CommandResult::classify(" Clear "), CommandResult::Cleared);
        assert_eq!(CommandResult::classify("CLEAR"), CommandResult::Cleared);
    }

    #[test]
    fn test_refresh() {
        assert_eq!(CommandResult::classify("refresh"), CommandResult::Refreshed);
        assert_eq!(CommandResult::classify("ReFresh"), CommandResult::Refreshed);
    }

    #[test]
    fn test_add_keeps_remainder_verbatim() {
        assert_eq!(
            CommandResult::classify("add widget-7"),
            CommandResult::Added("widget-7".to_string())
        );
        assert_eq!(
            CommandResult::classify("ADD  Big Widget"),
            CommandResult::Added(" Big Widget".to_string())
        );
    }

    #[test]
    fn test_add_without_space_is_unknown() {
        assert_eq!(
            CommandResult::classify("addwidget"),
            CommandResult::Unknown("addwidget".to_string())
        );
        // Trailing space is trimmed away before matching
        assert_eq!(CommandResult::classify("add "), CommandResult::Unknown("add".to_string()));
    }

    #[test]
    fn test_unknown_keeps_trimmed_text() {
        assert_eq!(CommandResult::classify("xyz"), CommandResult::Unknown("xyz".to_string()));
        assert_eq!(
            CommandResult::classify("  clear all "),
            CommandResult::Unknown("clear all".to_string())
        );
    }

    #[test]
    fn test_multibyte_input_does_not_panic() {
        assert_eq!(CommandResult::classify("ädd"), CommandResult::Unknown("ädd".to_string()));
        assert_eq!(CommandResult::classify("é"), CommandResult::Unknown("é".to_string()));
    }

    #[test]
    fn test_kind() {
        assert_eq!(CommandResult::classify("CLEAR").kind(), "clear");
        assert_eq!(CommandResult::classify("add x").kind(), "add");
        assert_eq!(CommandResult::classify("nope").kind(), "unknown");
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(CommandResult::Cleared.to_string(), "Data cleared");
        assert_eq!(CommandResult::Refreshed.to_string(), "Data refreshed");
        assert_eq!(CommandResult::Added("x".into()).to_string(), "Added item: x");
        assert_eq!(CommandResult::Unknown("y".into()).to_string(), "Unknown command: y");
    }
}

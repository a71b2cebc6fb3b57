//! # Parsing Utils
//!
//! Utilities for splitting inbound messages into command + argument
//! string, and for finding the raw mention tokens (`<@userId>`,
//! `<#channelId>`) that topic text carries before normalization.

use regex::Regex;

/// Splits a message into a lowercase command name and its argument string.
/// A message is a command iff it starts with `!` followed by a non-space
/// token. Returns `None` for everything else.
pub fn split_command(body: &str) -> Option<(String, &str)> {
    let rest = body.trim_start().strip_prefix('!')?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        return None;
    }
    let (name, args) = match rest.find(char::is_whitespace) {
        Some(idx) => (&rest[..idx], rest[idx + 1..].trim()),
        None => (rest, ""),
    };
    Some((name.to_lowercase(), args))
}

/// Raw user mention tokens (`<@...>`) embedded in topic text.
pub fn user_mentions(text: &str) -> Vec<String> {
    // The token grammar is fixed, so the pattern cannot fail to compile.
    let re = Regex::new(r"<@(.*?)>").unwrap();
    re.captures_iter(text)
        .filter_map(|c| c.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Raw channel mention tokens (`<#...>`) embedded in topic text.
pub fn channel_mentions(text: &str) -> Vec<String> {
    let re = Regex::new(r"<#(.*?)>").unwrap();
    re.captures_iter(text)
        .filter_map(|c| c.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_command_with_args() {
        let (cmd, args) = split_command("!ignore @bob:example.org").unwrap();
        assert_eq!(cmd, "ignore");
        assert_eq!(args, "@bob:example.org");
    }

    #[test]
    fn test_split_command_bare() {
        let (cmd, args) = split_command("!standup").unwrap();
        assert_eq!(cmd, "standup");
        assert_eq!(args, "");
    }

    #[test]
    fn test_split_command_lowercases_name() {
        let (cmd, _) = split_command("!NEXT").unwrap();
        assert_eq!(cmd, "next");
    }

    #[test]
    fn test_non_commands_are_ignored() {
        assert!(split_command("good morning").is_none());
        assert!(split_command("! next").is_none());
        assert!(split_command("!").is_none());
        assert!(split_command("").is_none());
    }

    #[test]
    fn test_mention_extraction() {
        let text = "ask <@u1> about <#c9> and <@u2>";
        assert_eq!(user_mentions(text), vec!["u1", "u2"]);
        assert_eq!(channel_mentions(text), vec!["c9"]);
    }

    #[test]
    fn test_no_mentions() {
        assert!(user_mentions("plain text").is_empty());
        assert!(channel_mentions("plain text").is_empty());
    }
}

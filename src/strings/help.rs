//! # Help Text
//!
//! Per-command usage lines and the main help listing.
//! Displayed to the user via the `!help` command.

/// Command names in the order they are listed by `!help`.
pub const COMMAND_NAMES: &[&str] = &[
    "standup", "start", "cancel", "next", "skip", "later", "table", "left", "ignore", "heed",
    "ignoring", "help", "ready",
];

/// Usage line for one command, or `None` for an unknown topic.
pub fn command_help(name: &str) -> Option<&'static str> {
    match name {
        "standup" => Some("Type !standup to initiate a new standup"),
        "start" => Some("Type !start to get started with standup once everyone is ready"),
        "cancel" => Some("Type !cancel if you'd like to stop the standup entirely."),
        "next" => Some("Type !next to call on the next person when you're done standing up"),
        "skip" => Some("Type !skip to skip someone who isn't standing up that day"),
        "later" => Some("Type !later to move someone who isn't ready yet to the end of the list"),
        "table" => Some("Type !table <topic> to table a topic for after the standup"),
        "left" => Some("Type !left to find out who is left in the standup"),
        "ignore" => Some("Type !ignore <username> to temporarily skip a user during standup for a while"),
        "heed" => Some("Type !heed <username> to add an ignored user back, starting with the next standup"),
        "ignoring" => Some("Type !ignoring to find out who we're skipping over for standups"),
        "help" => Some("Show this message"),
        "ready" => Some("Type !ready to skip ahead in the queue and give your standup immediately"),
        _ => None,
    }
}

/// The `!help` listing with a pointer to per-command help.
pub fn main_listing() -> String {
    let topics = COMMAND_NAMES
        .iter()
        .map(|name| format!("!{name}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("My commands are {topics}. Type !help <command> for more info on that command.")
}

/// Apology for an unknown help topic, repeating the listing.
pub fn unknown_topic(topic: &str) -> String {
    let topics = COMMAND_NAMES
        .iter()
        .map(|name| format!("!{name}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("I don't know {topic}. Please choose from {topics}")
}

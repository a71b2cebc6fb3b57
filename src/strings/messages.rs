//! # Messages
//!
//! Contains constant strings and format functions for user-facing messages.
//! Each recoverable error maps to exactly one of these.

pub const ALREADY_IN_PROCESS: &str = "Looks like we have a standup already in process.";
pub const ALREADY_STARTED: &str = "But we've already started!";
pub const NOT_STARTED: &str = "Looks like standup hasn't started yet. Type !standup.";

pub fn greeting(greeting: &str) -> String {
    format!("{greeting}, @room! Please type !start when you are ready to stand up.")
}

pub fn start(start_message: &str) -> String {
    format!("Let's get started! {start_message}\nWhen you're done, please type !next")
}

pub fn youre_up(user: &str) -> String {
    format!("{user}, you're up")
}

pub fn standup_duration(minutes: i64) -> String {
    format!("That's everyone! Standup took us {minutes} minutes.")
}

pub const GOODBYE: &str = "Bye!";
pub const CANCELLED: &str = "Standup is cancelled. Bye!";

pub const NOBODY_LEFT: &str = "That's everyone!";

pub fn whos_left(users: &[&str]) -> String {
    format!("Here's who's left: {}", users.join(", "))
}

pub fn skipping(user: &str) -> String {
    format!("Skipping {user}.")
}

pub fn call_later(user: &str) -> String {
    format!("We'll call on {user} later.")
}

pub fn tabled_ack(user: &str) -> String {
    format!("{user}: Tabled.")
}

pub const TABLED_HEADER: &str = "Tabled topics:";

pub fn tabled_entry(text: &str) -> String {
    format!("-{text}")
}

pub const WHO_IGNORE: &str = "Who should I ignore?";
pub const WHO_HEED: &str = "Who should I heed?";
pub const UNRECOGNIZED_USER: &str = "I don't recognize that user.";
pub const ALREADY_IGNORING: &str = "I'm already ignoring that user.";
pub const NOT_IGNORING: &str = "I'm not ignoring that user.";
pub const HEED_NEEDS_ADMIN: &str =
    "We never call on that user. Try asking my admin to heed that username.";

pub fn will_ignore(user: &str) -> String {
    format!("I won't call on {user} again until I am told to using !heed <username>.")
}

pub fn will_heed(user: &str) -> String {
    format!("I'll start calling on {user} again at the next standup.")
}

pub const IGNORING_NOBODY: &str = "We're not ignoring anyone.";

pub fn never_called_on(users: &[&str]) -> String {
    format!("Here's who we never call on: {}", users.join(", "))
}

pub fn ignoring_for_now(users: &[&str]) -> String {
    format!("Here's who we're ignoring for now: {}", users.join(", "))
}

pub const GHOST_CALLER: &str = "Your username is blank. Are you a ghost?";
pub const UNRECOGNIZED_CALLER: &str = "I don't recognize you. How did you get in here?";
pub const CALLER_IGNORED: &str = "I'm ignoring you. Try asking my admin to heed you.";
pub const ALREADY_YOUR_TURN: &str = "It's already your turn. Go ahead.";
pub const ALREADY_WENT: &str = "You already went during this standup";

pub fn come_back_to(user: &str) -> String {
    format!("I'll come back to you, {user}")
}

pub fn welcome_back(user: &str) -> String {
    format!("Welcome back, {user}. We will call on you from now on.")
}

pub fn go_ahead(user: &str) -> String {
    format!("Alright {user}, go ahead")
}

pub fn not_sure_what(text: &str) -> String {
    format!("Not sure what \"{text}\" is.")
}

//! Compiled patterns shared by every filter.
//!
//! Patterns are compiled once, on first use, and never mutated afterwards.
use lazy_static::lazy_static;
use regex::Regex;

/// Deletion markers left by Reddit in place of a removed body.
pub const DELETION_MARKERS: [&str; 2] = ["[deleted]", "[removed]"];

lazy_static! {
    /// Bot self-identification at the start of a body, "beep boop" signatures at either end.
    pub static ref BOT_BODY: Regex = Regex::new(
        r"(?i)^i am a bot|^i'm a bot|^bleep.*?bloop|^beep.*?boop|bleep.*?bloop[^a-zA-Z]*$|beep.*?boop[^a-zA-Z]*$"
    )
    .unwrap();

    /// Superscript navigation buttons appended by bots (`^| ^[...]`).
    pub static ref BOT_BUTTON: Regex = Regex::new(r"\^\|\s*\^\[").unwrap();

    /// Author handles of well-known bots.
    pub static ref BOT_AUTHOR: Regex = Regex::new(
        r"(?i)^imgur|^linkfixer|bots?[^a-zA-Z]*$|tips?$|quotes$|transcriber$|watch$|breaker$|fixer$"
    )
    .unwrap();

    /// Markdown table separator rows (`| --- |`, `|:---:|`) and ascii table borders (`+----`).
    pub static ref MARKDOWN_TABLE: Regex = Regex::new(r"(\|\s*:?--*:?\s*\|)|(\+----*)").unwrap();

    pub static ref ALPHANUM: Regex = Regex::new(r"[a-zA-Z0-9]").unwrap();

    pub static ref URL: Regex = Regex::new(r"http\S+").unwrap();
}

//! Body-level filters.
//!
//! Each filter returns `true` when a body is kept.
use super::patterns::{ALPHANUM, BOT_BODY, BOT_BUTTON, DELETION_MARKERS, MARKDOWN_TABLE, URL};
use super::Filter;

/// Rejects bodies that are exactly a deletion marker (`[deleted]`, `[removed]`).
#[derive(Debug, Default, Clone, Copy)]
pub struct DeletionMarker;

impl Filter<&str> for DeletionMarker {
    fn detect(&self, body: &str) -> bool {
        !DELETION_MARKERS.contains(&body)
    }
}

/// Rejects bodies carrying a bot signature ("I am a bot", "beep boop"...).
#[derive(Debug, Default, Clone, Copy)]
pub struct BotSignature;

impl Filter<&str> for BotSignature {
    fn detect(&self, body: &str) -> bool {
        !BOT_BODY.is_match(body)
    }
}

/// Rejects bodies with bot navigation buttons.
#[derive(Debug, Default, Clone, Copy)]
pub struct BotButton;

impl Filter<&str> for BotButton {
    fn detect(&self, body: &str) -> bool {
        !BOT_BUTTON.is_match(body)
    }
}

/// Rejects bodies containing a markdown or ascii table.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownTable;

impl Filter<&str> for MarkdownTable {
    fn detect(&self, body: &str) -> bool {
        !MARKDOWN_TABLE.is_match(body)
    }
}

/// Keeps bodies that have at least one ascii letter or digit.
#[derive(Debug, Default, Clone, Copy)]
pub struct Alphanumeric;

impl Filter<&str> for Alphanumeric {
    fn detect(&self, body: &str) -> bool {
        ALPHANUM.is_match(body)
    }
}

/// Rejects bodies containing something that looks like a link.
#[derive(Debug, Default, Clone, Copy)]
pub struct Url;

impl Filter<&str> for Url {
    fn detect(&self, body: &str) -> bool {
        !URL.is_match(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deletion_markers() {
        let f = DeletionMarker;
        assert_eq!(f.detect("[deleted]"), false);
        assert_eq!(f.detect("[removed]"), false);
        assert_eq!(f.detect("[deleted] but with more text"), true);
        assert_eq!(f.detect("[Deleted]"), true);
    }

    #[test]
    fn bot_signature() {
        let f = BotSignature;
        assert_eq!(f.detect("I'm a bot and I summarize articles"), false);
        assert_eq!(f.detect("bleep bloop, I fetched this for you"), false);
        assert_eq!(f.detect("I really like this bot"), true);
    }

    #[test]
    fn bot_button() {
        let f = BotButton;
        assert_eq!(f.detect("^| ^[About](x)"), false);
        assert_eq!(f.detect("^|^[Source]"), false);
        assert_eq!(f.detect("2^3 | 4"), true);
    }

    #[test]
    fn markdown_table() {
        let f = MarkdownTable;
        assert_eq!(f.detect("Name | Score\n--- | ---\n|---|---|"), false);
        assert_eq!(f.detect("+----+"), false);
        assert_eq!(f.detect("just a plain reply"), true);
    }

    #[test]
    fn alphanumeric() {
        let f = Alphanumeric;
        assert_eq!(f.detect("!!! ??? ..."), false);
        assert_eq!(f.detect("😂😂😂"), false);
        assert_eq!(f.detect("... 1"), true);
        assert_eq!(f.detect("ok"), true);
    }

    #[test]
    fn url() {
        let f = Url;
        assert_eq!(f.detect("check http://example.com please"), false);
        assert_eq!(f.detect("https://x.y"), false);
        assert_eq!(f.detect("no link in here"), true);
    }
}

//! Author-level filtering.
use super::patterns::BOT_AUTHOR;
use super::Filter;

/// Rejects well-known bot accounts.
///
/// Matching is done on the lowercased handle: handles starting with `imgur` or `linkfixer`,
/// or ending with `bot(s)` (trailing non-letters allowed), `tip(s)`, `quotes`, `transcriber`,
/// `watch`, `breaker` or `fixer`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BotAuthor;

impl Filter<&str> for BotAuthor {
    fn detect(&self, author: &str) -> bool {
        !BOT_AUTHOR.is_match(&author.to_lowercase())
    }
}

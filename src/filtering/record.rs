//! Record-level filtering.
//!
//! [QualityFilter] chains every heuristic, cheapest first, and stops at the first rejection:
//!
//! 1. score below the minimum (author-aware mode only)
//! 1. deletion markers
//! 1. bot authors (author-aware mode only, when an author is known)
//! 1. bot signatures
//! 1. bot navigation buttons
//! 1. markdown/ascii tables
//! 1. no ascii alphanumeric character
//! 1. links
//! 1. token length outside of the configured bounds
use super::author::BotAuthor;
use super::length::TokenLength;
use super::text::{Alphanumeric, BotButton, BotSignature, DeletionMarker, MarkdownTable, Url};
use super::Filter;
use crate::error::Error;
use crate::pipelines::dialogue::types::Candidate;
use crate::tokenizer::Tokenizer;

/// Quality heuristics over normalized candidates.
///
/// Built once and shared by reference between workers: it holds no mutable state.
pub struct QualityFilter<'a> {
    has_author_field: bool,
    min_score: i64,
    deletion: DeletionMarker,
    bot_author: BotAuthor,
    bot_signature: BotSignature,
    bot_button: BotButton,
    markdown: MarkdownTable,
    alphanum: Alphanumeric,
    url: Url,
    length: TokenLength<'a>,
}

impl<'a> QualityFilter<'a> {
    /// Author-aware filter with a minimum score of 1 and the default token bounds.
    pub fn new(tokenizer: &'a Tokenizer) -> Self {
        Self {
            has_author_field: true,
            min_score: 1,
            deletion: DeletionMarker,
            bot_author: BotAuthor,
            bot_signature: BotSignature,
            bot_button: BotButton,
            markdown: MarkdownTable,
            alphanum: Alphanumeric,
            url: Url,
            length: TokenLength::new(tokenizer),
        }
    }

    /// Toggle score and author checks.
    ///
    /// Without them, the score threshold is expected to be enforced upstream by the pre-filter.
    pub fn with_author_field(mut self, has_author_field: bool) -> Self {
        self.has_author_field = has_author_field;
        self
    }

    pub fn with_min_score(mut self, min_score: i64) -> Self {
        self.min_score = min_score;
        self
    }

    /// Set exclusive token count bounds.
    pub fn with_token_bounds(mut self, min: usize, max: usize) -> Self {
        self.length = self.length.with_bounds(min, max);
        self
    }

    /// Returns `Ok(true)` if the candidate is kept.
    ///
    /// `candidate.text` is expected to be normalized already.
    pub fn accept(&self, candidate: &Candidate) -> Result<bool, Error> {
        let text = candidate.text.as_str();

        if self.has_author_field && candidate.score < self.min_score {
            return Ok(false);
        }
        if !self.deletion.detect(text) {
            return Ok(false);
        }
        if self.has_author_field {
            if let Some(author) = candidate.author.as_deref().filter(|a| !a.is_empty()) {
                if !self.bot_author.detect(author) {
                    return Ok(false);
                }
            }
        }

        let keep = self.bot_signature.detect(text)
            && self.bot_button.detect(text)
            && self.markdown.detect(text)
            && self.alphanum.detect(text)
            && self.url.detect(text);
        if !keep {
            return Ok(false);
        }

        self.length.detect(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::{Vocab, WhitespaceSegmenter};

    fn tokenizer() -> Tokenizer {
        Tokenizer::new(Vocab::default(), Box::new(WhitespaceSegmenter))
    }

    fn candidate(text: &str, author: Option<&str>, score: i64) -> Candidate {
        Candidate {
            id: "a1".to_string(),
            parent_id: "t1_a0".to_string(),
            text: text.to_string(),
            subreddit: "askreddit".to_string(),
            author: author.map(String::from),
            score,
        }
    }

    const GOOD: &str = "This is a genuinely decent reply here";

    #[test]
    fn accepts_regular_reply() {
        let t = tokenizer();
        let f = QualityFilter::new(&t);
        assert!(f.accept(&candidate(GOOD, Some("normal_user"), 5)).unwrap());
    }

    #[test]
    fn rejects_low_score_with_author_field() {
        let t = tokenizer();
        let f = QualityFilter::new(&t);
        assert!(!f.accept(&candidate(GOOD, Some("normal_user"), 0)).unwrap());

        let f = QualityFilter::new(&t).with_author_field(false);
        assert!(f.accept(&candidate(GOOD, Some("normal_user"), 0)).unwrap());
    }

    #[test]
    fn rejects_bot_author() {
        let t = tokenizer();
        let f = QualityFilter::new(&t);
        assert!(!f.accept(&candidate(GOOD, Some("quote_bot"), 5)).unwrap());
        assert!(f.accept(&candidate(GOOD, None, 5)).unwrap());

        let f = QualityFilter::new(&t).with_author_field(false);
        assert!(f.accept(&candidate(GOOD, Some("quote_bot"), 5)).unwrap());
    }

    #[test]
    fn rejects_deletion_markers_regardless() {
        let t = tokenizer();
        for mode in [true, false] {
            let f = QualityFilter::new(&t).with_author_field(mode).with_token_bounds(0, 100);
            assert!(!f.accept(&candidate("[deleted]", Some("normal_user"), 100)).unwrap());
            assert!(!f.accept(&candidate("[removed]", None, 100)).unwrap());
        }
    }

    #[test]
    fn rejects_body_heuristics() {
        let t = tokenizer();
        let f = QualityFilter::new(&t);
        let long = vec!["long"; 40].join(" ");
        let rejected: [&str; 8] = [
            "I am a bot and this action was performed automatically",
            "here is your summary of the thread beep boop",
            "Summary of the article ^| ^[FAQ] ^[Source]",
            "Team | Wins | Losses |---|---| some more text",
            "!!! ??? ... ;;; ::: ,,, ---",
            "you should read this one https://example.com it is great",
            "too short",
            long.as_str(),
        ];
        for text in rejected.iter() {
            assert!(!f.accept(&candidate(text, None, 5)).unwrap(), "{}", text);
        }
    }

    #[test]
    fn self_identification_only_counts_at_the_start() {
        let t = tokenizer();
        let f = QualityFilter::new(&t);
        let reply = candidate(
            "honestly sometimes I feel like I am a bot",
            Some("normal_user"),
            5,
        );
        assert!(f.accept(&reply).unwrap());
    }

    #[test]
    fn token_boundaries() {
        let t = tokenizer();
        let f = QualityFilter::new(&t);
        let words = |n: usize| vec!["word"; n].join(" ");
        assert!(!f.accept(&candidate(&words(3), None, 5)).unwrap());
        assert!(f.accept(&candidate(&words(4), None, 5)).unwrap());
        assert!(f.accept(&candidate(&words(31), None, 5)).unwrap());
        assert!(!f.accept(&candidate(&words(32), None, 5)).unwrap());
    }

    struct Failing;
    impl crate::tokenizer::Segment for Failing {
        fn pieces(&self, _: &str) -> Result<Vec<String>, Error> {
            Err(Error::Tokenizer("boom".to_string()))
        }
    }

    #[test]
    fn tokenizer_errors_propagate() {
        let t = Tokenizer::new(Vocab::default(), Box::new(Failing));
        let f = QualityFilter::new(&t);
        assert!(f.accept(&candidate(GOOD, None, 5)).is_err());
        // rejected before tokenization
        assert!(!f.accept(&candidate("[deleted]", None, 5)).unwrap());
    }
}

//! Token length filtering.
use crate::error::Error;
use crate::tokenizer::Tokenizer;

/// Keeps texts whose token count is strictly between `min` and `max`.
///
/// Defaults to `3 < count < 32`.
pub struct TokenLength<'a> {
    tokenizer: &'a Tokenizer,
    min: usize,
    max: usize,
}

impl<'a> TokenLength<'a> {
    pub fn new(tokenizer: &'a Tokenizer) -> Self {
        Self {
            tokenizer,
            min: 3,
            max: 32,
        }
    }

    /// set exclusive bounds
    pub fn with_bounds(mut self, min: usize, max: usize) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn bounds(&self) -> (usize, usize) {
        (self.min, self.max)
    }

    /// Unlike the other filters, tokenization may fail.
    pub fn detect(&self, text: &str) -> Result<bool, Error> {
        let count = self.tokenizer.tokenize(text)?.len();
        Ok(count > self.min && count < self.max)
    }
}

//! Vocabulary-constrained tokenizer.
use std::path::Path;

use log::info;

use super::segmenter::{self, Segment};
use super::vocab::Vocab;
use crate::error::Error;

/// Marker substituted for pieces that are not in the vocabulary.
pub const UNK_TOKEN: &str = "<unk>";

/// Sub-word tokenizer over a fixed vocabulary.
///
/// Every piece produced by the segmenter that is not in the vocabulary is replaced by [UNK_TOKEN],
/// so that token counts reflect the vocabulary and not the raw segmentation.
pub struct Tokenizer {
    vocab: Vocab,
    segmenter: Box<dyn Segment>,
}

impl Tokenizer {
    pub fn new(vocab: Vocab, segmenter: Box<dyn Segment>) -> Self {
        Self { vocab, segmenter }
    }

    /// Load a vocabulary file and a sub-word model.
    ///
    /// Missing files are reported as [Error::Configuration].
    pub fn from_paths(vocab_path: &Path, model_path: &Path) -> Result<Self, Error> {
        let vocab = Vocab::from_path(vocab_path)?;
        info!("loaded {} tokens from {:?}", vocab.len(), vocab_path);

        let segmenter = segmenter::from_path(model_path)?;
        Ok(Self::new(vocab, segmenter))
    }

    pub fn tokenize(&self, text: &str) -> Result<Vec<String>, Error> {
        let pieces = self.segmenter.pieces(text)?;
        Ok(pieces
            .into_iter()
            .map(|piece| {
                if self.vocab.contains(&piece) {
                    piece
                } else {
                    UNK_TOKEN.to_string()
                }
            })
            .collect())
    }

    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    pub fn tokens_to_ids<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<u32>, Error> {
        tokens
            .iter()
            .map(|token| {
                let token = token.as_ref();
                self.vocab
                    .id(token)
                    .ok_or_else(|| Error::Tokenizer(format!("unknown token {:?}", token)))
            })
            .collect()
    }

    pub fn ids_to_tokens(&self, ids: &[u32]) -> Result<Vec<String>, Error> {
        ids.iter()
            .map(|id| {
                self.vocab
                    .token(*id)
                    .map(String::from)
                    .ok_or_else(|| Error::Tokenizer(format!("unknown token id {}", id)))
            })
            .collect()
    }
}

//! Sub-word segmentation backends.
use std::path::Path;

use log::debug;

use crate::error::Error;

/// Splits text into raw sub-word pieces, before any vocabulary lookup.
pub trait Segment: Send + Sync {
    fn pieces(&self, text: &str) -> Result<Vec<String>, Error>;
}

/// Load the backend matching the model file extension.
///
/// `.model` files are native SentencePiece models, everything else is read as
/// a HuggingFace `tokenizer.json`.
pub fn from_path(path: &Path) -> Result<Box<dyn Segment>, Error> {
    if !path.is_file() {
        return Err(Error::Configuration(format!(
            "Can't find a sub-word model file at path {:?}",
            path
        )));
    }

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("model") => sentencepiece_from_path(path),
        _ => Ok(Box::new(HfSegmenter::from_path(path)?)),
    }
}

#[cfg(feature = "sentencepiece")]
fn sentencepiece_from_path(path: &Path) -> Result<Box<dyn Segment>, Error> {
    Ok(Box::new(SpSegmenter::from_path(path)?))
}

#[cfg(not(feature = "sentencepiece"))]
fn sentencepiece_from_path(path: &Path) -> Result<Box<dyn Segment>, Error> {
    Err(Error::Configuration(format!(
        "{:?} is a SentencePiece model but dialcorpus was built without the `sentencepiece` feature",
        path
    )))
}

/// HuggingFace tokenizers backend.
pub struct HfSegmenter {
    inner: tokenizers::Tokenizer,
}

impl HfSegmenter {
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        debug!("loading tokenizer.json model from {:?}", path);
        let inner = tokenizers::Tokenizer::from_file(path).map_err(|e| {
            Error::Configuration(format!("Could not load sub-word model {:?}: {}", path, e))
        })?;
        Ok(Self { inner })
    }
}

impl Segment for HfSegmenter {
    fn pieces(&self, text: &str) -> Result<Vec<String>, Error> {
        let encoding = self.inner.encode(text, false)?;
        Ok(encoding.get_tokens().to_vec())
    }
}

/// Native SentencePiece backend.
#[cfg(feature = "sentencepiece")]
pub struct SpSegmenter {
    inner: sentencepiece::SentencePieceProcessor,
}

#[cfg(feature = "sentencepiece")]
impl SpSegmenter {
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        debug!("loading sentencepiece model from {:?}", path);
        let inner = sentencepiece::SentencePieceProcessor::open(path).map_err(|e| {
            Error::Configuration(format!("Could not load sub-word model {:?}: {}", path, e))
        })?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "sentencepiece")]
impl Segment for SpSegmenter {
    fn pieces(&self, text: &str) -> Result<Vec<String>, Error> {
        let pieces = self.inner.encode(text)?;
        Ok(pieces.into_iter().map(|p| p.piece).collect())
    }
}

/// Whitespace splitting.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceSegmenter;

impl Segment for WhitespaceSegmenter {
    fn pieces(&self, text: &str) -> Result<Vec<String>, Error> {
        Ok(text.split_whitespace().map(String::from).collect())
    }
}

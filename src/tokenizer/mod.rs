/*! Sub-word tokenization.

The [Tokenizer] is only used to measure the length of a body in vocabulary-constrained tokens.
It is composed of a fixed [Vocab] and a [Segment] backend that splits text into sub-word pieces.

Available backends:
- [HfSegmenter]: HuggingFace `tokenizer.json` files,
- `SpSegmenter`: native SentencePiece `.model` files (requires the `sentencepiece` feature),
- [WhitespaceSegmenter]: whitespace splitting, for dry runs without a trained model.
!*/
mod segmenter;
#[allow(clippy::module_inception)]
mod tokenizer;
mod vocab;

#[cfg(feature = "sentencepiece")]
pub use segmenter::SpSegmenter;
pub use segmenter::{HfSegmenter, Segment, WhitespaceSegmenter};
pub use tokenizer::{Tokenizer, UNK_TOKEN};
pub use vocab::{Vocab, OCCUPY_TOKEN};

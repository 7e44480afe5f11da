//! # dialcorpus
//!
//! Extraction of a conversational corpus from Reddit comment dumps.
//!
//! Comments are read from newline-delimited JSON, filtered with a set of quality heuristics
//! (score, deletion markers, bots, tables, links, token length), normalized to a single line,
//! and written as tab-separated `(id, parent_id, text, subreddit)` tuples.
//!
//! ```no_run
//! use std::path::PathBuf;
//! use dialcorpus::pipelines::{Partitioned, Pipeline, PipelineConfig};
//! use dialcorpus::tokenizer::Tokenizer;
//!
//! # fn main() -> Result<(), dialcorpus::error::Error> {
//! let tokenizer = Tokenizer::from_paths(
//!     "tokenizer_model/vocab.txt".as_ref(),
//!     "tokenizer_model/tokenizer.json".as_ref(),
//! )?;
//! let pipeline = Partitioned::new(
//!     PathBuf::from("RC_2015-01.jsonl"),
//!     PathBuf::from("dialogues.tsv"),
//!     tokenizer,
//!     PipelineConfig::default(),
//! );
//! let summary = pipeline.run()?;
//! println!("{}", summary);
//! # Ok(())
//! # }
//! ```
pub mod error;
pub mod filtering;
pub mod io;
pub mod pipelines;
pub mod tokenizer;
pub mod transformers;

//! Output writers.
mod tsv;

pub use tsv::DialogueWriter;
